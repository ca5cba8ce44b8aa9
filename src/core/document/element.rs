//! Element type.
//!
//! One logical line (or line group) of a `.kvc` document.

use std::fmt;

/// Marker that opens and closes a multi-line block.
pub const EOF_MARKER: &str = "EOF";

/// A single unit of a document, in on-disk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A blank line.
    Empty,
    /// A comment line, stored without the leading `#`.
    Comment(String),
    /// A key bound to a value without embedded newlines.
    SingleLineValue { key: String, value: String },
    /// A key bound to a value containing at least one `\n` or `\r`.
    MultiLineValue { key: String, value: String },
}

impl Element {
    /// Build a keyed element, picking the kind from the value's content.
    pub fn value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if is_multi_line(&value) {
            Element::MultiLineValue { key, value }
        } else {
            Element::SingleLineValue { key, value }
        }
    }

    /// Build a comment element.
    pub fn comment(text: impl Into<String>) -> Self {
        Element::Comment(text.into())
    }

    /// The key, for value elements.
    pub fn key(&self) -> Option<&str> {
        match self {
            Element::SingleLineValue { key, .. } | Element::MultiLineValue { key, .. } => {
                Some(key)
            }
            Element::Empty | Element::Comment(_) => None,
        }
    }

    /// The value for value elements, or the body for comments.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::SingleLineValue { value, .. } | Element::MultiLineValue { value, .. } => {
                Some(value)
            }
            Element::Comment(body) => Some(body),
            Element::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Element::Empty)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Element::Comment(_))
    }

    pub fn is_single_line_value(&self) -> bool {
        matches!(self, Element::SingleLineValue { .. })
    }

    pub fn is_multi_line_value(&self) -> bool {
        matches!(self, Element::MultiLineValue { .. })
    }
}

/// Whether a value must be written as a multi-line block.
pub(crate) fn is_multi_line(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Whether `value` reads back unchanged after a save and reload.
///
/// Single-line values lose surrounding whitespace and a trailing `=EOF`,
/// and a bare `EOF` opens a block that swallows the following lines.
/// Multi-line values lose `\r\n` pairs and any line that is a lone `EOF`.
pub fn survives_round_trip(value: &str) -> bool {
    if is_multi_line(value) {
        !value.contains("\r\n")
            && !value.ends_with('\r')
            && value.split('\n').all(|line| line.trim() != EOF_MARKER)
    } else {
        value == value.trim() && value != EOF_MARKER && !value.ends_with("=EOF")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Empty => writeln!(f),
            // Always one space after the marker, whatever the source had.
            Element::Comment(body) => writeln!(f, "# {}", body),
            Element::SingleLineValue { key, value } => writeln!(f, "{}={}", key, value),
            Element::MultiLineValue { key, value } => {
                writeln!(f, "{}={}", key, EOF_MARKER)?;
                writeln!(f, "{}", value)?;
                writeln!(f, "{}", EOF_MARKER)
            }
        }
    }
}
