//! Forward-only marker extraction over a Sublime theme document.
//!
//! A `.tmTheme` file is an XML plist, but the fields we need are located by
//! literal substring markers rather than a full parse: `<key>name</key>` for
//! settings keys and `<string>Name</string>` for named scope rules. Each
//! marker search starts at a cursor that only ever moves forward.

use crate::ThemeError;

const KEY_CLOSE: &str = "</key>";
const STRING_OPEN: &str = "<string>";
const STRING_CLOSE: &str = "</string>";

/// Marker for a settings key, e.g. `<key>background</key>`.
pub fn key_marker(name: &str) -> String {
    format!("<key>{name}</key>")
}

/// Marker for a named scope rule, e.g. `<string>Comment</string>`.
pub fn rule_marker(name: &str) -> String {
    format!("<string>{name}</string>")
}

/// An immutable theme document plus a forward-only search cursor.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Document { text, pos: 0 }
    }

    /// Current cursor offset into the document.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Resolve a marker path and extract the string value that follows it.
    ///
    /// Markers are searched in sequence, each at or after the cursor; a hit
    /// advances the cursor to the start of that marker. If any marker in the
    /// path is absent the value is the empty string and the cursor is
    /// restored to where it was before the lookup, so an absent field never
    /// breaks later lookups.
    ///
    /// Once the path resolves, the value is the text strictly between the
    /// end of the next `</key>` and the start of the next `</string>`,
    /// trimmed of whitespace and of a stray leading `<string>`. The cursor
    /// ends just past the consumed `</key>`. A resolved path with no closing
    /// delimiter is a malformed field and fails instead of yielding garbage.
    pub fn extract_field(&mut self, markers: &[&str]) -> Result<String, ThemeError> {
        let start = self.pos;
        for marker in markers {
            match self.rest().find(marker) {
                Some(i) => self.pos += i,
                None => {
                    self.pos = start;
                    return Ok(String::new());
                }
            }
        }
        self.next_string(markers.last().copied().unwrap_or(""))
    }

    fn next_string(&mut self, marker: &str) -> Result<String, ThemeError> {
        let key_end = self
            .rest()
            .find(KEY_CLOSE)
            .ok_or_else(|| ThemeError::malformed(marker))?;
        self.pos += key_end + KEY_CLOSE.len();

        let value_end = self
            .rest()
            .find(STRING_CLOSE)
            .ok_or_else(|| ThemeError::malformed(marker))?;
        let raw = self.rest()[..value_end].trim();
        let value = raw.strip_prefix(STRING_OPEN).unwrap_or(raw).trim_start();
        Ok(value.to_string())
    }
}
