//! LiteIDE style-scheme rendering.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Theme, ThemeError};

/// LiteIDE styles with no Sublime counterpart. Listed for documentation;
/// never rendered.
pub const UNMAPPED_STYLES: &[&str] = &[
    "Extra",
    "IndentLine",
    "VisualWhitespace",
    "BaseN",
    "Float",
    "Alert",
    "Error",
    "RegionMarker",
    "Placeholder",
    "ToDo",
];

/// One rendered `<style/>` entry: name, foreground, background.
type Slot<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

/// The output slots in their fixed order. BuiltinFunc, Predeclared and Char
/// all alias the Sublime "Built-in constant" color.
fn slots(theme: &Theme) -> [Slot<'_>; 13] {
    [
        ("Text", Some(theme.foreground.as_str()), Some(theme.background.as_str())),
        ("CurrentLine", None, Some(theme.line_highlight.as_str())),
        ("Selection", None, Some(theme.selection.as_str())),
        ("Symbol", Some(theme.brackets_foreground.as_str()), None),
        ("Comment", Some(theme.comment.as_str()), None),
        ("String", Some(theme.string.as_str()), None),
        ("Decimal", Some(theme.number.as_str()), None),
        ("BuiltinFunc", Some(theme.builtin_constant.as_str()), None),
        ("Predeclared", Some(theme.builtin_constant.as_str()), None),
        ("Char", Some(theme.builtin_constant.as_str()), None),
        ("Keyword", Some(theme.keyword.as_str()), None),
        ("DataType", Some(theme.storage_type.as_str()), None),
        ("FuncDecl", Some(theme.function_name.as_str()), None),
    ]
}

fn xml_err(e: impl std::fmt::Display) -> ThemeError {
    ThemeError::Xml(e.to_string())
}

/// Render a theme as a LiteIDE style-scheme XML document.
///
/// `scheme_name` becomes the root element's `name` attribute; `source_file`
/// is recorded in the provenance comment. Slots whose source field was not
/// found render with an empty color attribute rather than being omitted.
pub fn render(theme: &Theme, scheme_name: &str, source_file: &str) -> Result<String, ThemeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut root = BytesStart::new("style-scheme");
    root.push_attribute(("version", "1.0"));
    root.push_attribute(("name", scheme_name));
    writer
        .write_event(Event::Start(root))
        .map_err(xml_err)?;

    let provenance = format!(" Auto-generated from {source_file} by sublite ");
    writer
        .write_event(Event::Comment(BytesText::new(&provenance)))
        .map_err(xml_err)?;

    for (name, fore, back) in slots(theme) {
        let mut style = BytesStart::new("style");
        style.push_attribute(("name", name));
        if let Some(color) = fore {
            style.push_attribute(("foreground", color));
        }
        if let Some(color) = back {
            style.push_attribute(("background", color));
        }
        writer
            .write_event(Event::Empty(style))
            .map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("style-scheme")))
        .map_err(xml_err)?;

    let mut out = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
    out.push('\n');
    Ok(out)
}
