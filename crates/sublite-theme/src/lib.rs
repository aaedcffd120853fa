pub mod extract;
pub mod scheme;

use extract::{key_marker, rule_marker, Document};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("malformed field after {marker}: missing closing delimiter")]
    MalformedField { marker: String },
    #[error("XML write error: {0}")]
    Xml(String),
}

impl ThemeError {
    fn malformed(marker: &str) -> Self {
        ThemeError::MalformedField {
            marker: marker.to_string(),
        }
    }
}

/// The color fields extracted from a Sublime Text theme.
///
/// Top-level settings keys and per-rule foreground colors, each a hex color
/// string as written in the source (usually `#RRGGBB`), or empty if the
/// theme does not define the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub foreground: String,
    pub background: String,
    pub line_highlight: String,
    pub selection: String,
    pub brackets_foreground: String,
    pub comment: String,
    pub string: String,
    pub number: String,
    pub builtin_constant: String,
    pub keyword: String,
    pub storage_type: String,
    pub function_name: String,
}

impl Theme {
    /// Extract all known fields from `.tmTheme` text.
    ///
    /// Each field lookup starts its own cursor at the beginning of the
    /// document, so fields may appear in any order in the source. Within one
    /// lookup the markers are still resolved in sequence (a rule's
    /// `foreground` key must follow its name marker).
    pub fn parse(text: &str) -> Result<Theme, ThemeError> {
        Ok(Theme {
            foreground: setting(text, "foreground")?,
            background: setting(text, "background")?,
            line_highlight: setting(text, "lineHighlight")?,
            selection: setting(text, "selection")?,
            brackets_foreground: setting(text, "bracketsForeground")?,
            comment: rule_foreground(text, "Comment")?,
            string: rule_foreground(text, "String")?,
            number: rule_foreground(text, "Number")?,
            builtin_constant: rule_foreground(text, "Built-in constant")?,
            keyword: rule_foreground(text, "Keyword")?,
            storage_type: rule_foreground(text, "Storage type")?,
            function_name: rule_foreground(text, "Function name")?,
        })
    }
}

/// Value of a top-level settings key, or empty if absent.
fn setting(text: &str, name: &str) -> Result<String, ThemeError> {
    let marker = key_marker(name);
    Document::new(text).extract_field(&[&marker])
}

/// Foreground color of a named scope rule, or empty if the rule is absent.
fn rule_foreground(text: &str, rule: &str) -> Result<String, ThemeError> {
    let rule = rule_marker(rule);
    let fore = key_marker("foreground");
    Document::new(text).extract_field(&[&rule, &fore])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> String {
        let settings = [
            ("background", "#272822"),
            ("foreground", "#F8F8F2"),
            ("lineHighlight", "#3E3D32"),
            ("selection", "#49483E"),
            ("bracketsForeground", "#F8F8F2"),
        ];
        let rules = [
            ("Comment", "#75715E"),
            ("String", "#E6DB74"),
            ("Number", "#AE81FF"),
            ("Built-in constant", "#AE81FF"),
            ("Keyword", "#F92672"),
            ("Storage type", "#66D9EF"),
            ("Function name", "#A6E22E"),
        ];

        let mut text = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <plist version=\"1.0\">\n<dict>\n\
             <key>name</key>\n<string>Sample</string>\n\
             <key>settings</key>\n<array>\n<dict>\n<key>settings</key>\n<dict>\n",
        );
        for (key, color) in settings {
            text.push_str(&format!(
                "<key>{key}</key>\n\t<string>{color}</string>\n"
            ));
        }
        text.push_str("</dict>\n</dict>\n");
        for (rule, color) in rules {
            text.push_str(&format!(
                "<dict>\n<key>name</key>\n<string>{rule}</string>\n\
                 <key>settings</key>\n<dict>\n\
                 <key>foreground</key>\n\t<string>{color}</string>\n\
                 </dict>\n</dict>\n",
            ));
        }
        text.push_str("</array>\n</dict>\n</plist>\n");
        text
    }

    #[test]
    fn test_parse_full_theme() {
        let theme = Theme::parse(&sample_theme()).unwrap();
        assert_eq!(theme.background, "#272822");
        assert_eq!(theme.foreground, "#F8F8F2");
        assert_eq!(theme.line_highlight, "#3E3D32");
        assert_eq!(theme.selection, "#49483E");
        assert_eq!(theme.comment, "#75715E");
        assert_eq!(theme.string, "#E6DB74");
        assert_eq!(theme.number, "#AE81FF");
        assert_eq!(theme.builtin_constant, "#AE81FF");
        assert_eq!(theme.keyword, "#F92672");
        assert_eq!(theme.storage_type, "#66D9EF");
        assert_eq!(theme.function_name, "#A6E22E");
    }

    #[test]
    fn test_missing_field_is_empty() {
        let text = sample_theme().replace("lineHighlight", "caret");
        let theme = Theme::parse(&text).unwrap();
        assert_eq!(theme.line_highlight, "");
        // Fields after the missing one are unaffected.
        assert_eq!(theme.selection, "#49483E");
        assert_eq!(theme.keyword, "#F92672");
    }

    #[test]
    fn test_field_order_independent() {
        // Settings listed after the rules still resolve, because each field
        // lookup starts from the top of the document.
        let text = "\
            <string>Keyword</string>\n\
            <key>foreground</key>\n<string>#F92672</string>\n\
            <key>background</key>\n<string>#272822</string>\n\
            <key>foreground</key>\n<string>#F8F8F2</string>\n";
        let theme = Theme::parse(text).unwrap();
        assert_eq!(theme.keyword, "#F92672");
        assert_eq!(theme.background, "#272822");
        assert_eq!(theme.foreground, "#F92672");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = sample_theme();
        assert_eq!(Theme::parse(&text).unwrap(), Theme::parse(&text).unwrap());
    }

    #[test]
    fn test_malformed_field_is_an_error() {
        let text = "<key>background</key>\n<string>#272822";
        assert!(matches!(
            Theme::parse(text),
            Err(ThemeError::MalformedField { .. })
        ));
    }
}
