//! Line scanner for the `.kvc` dialect.
//!
//! A two-state machine: `Normal` handles blank lines, comments and
//! assignments; `InMultiline` buffers raw lines until a lone `EOF`.

use tracing::{debug, trace};

use super::element::EOF_MARKER;
use super::Document;

/// Suffix that escapes a value which literally ends in `=EOF`.
const ESCAPE_SUFFIX: &str = "=EOF";

enum State<'a> {
    Normal,
    InMultiline { key: &'a str, buffer: Vec<&'a str> },
}

/// Parse `input` and append its elements to `doc`.
///
/// Never fails. Lines matching no known shape are dropped, and a
/// multi-line block still open at end of input is discarded.
pub(super) fn parse_into(doc: &mut Document, input: &str) {
    let mut state = State::Normal;

    for line in input.lines() {
        state = match state {
            State::Normal => normal(doc, line),
            State::InMultiline { key, buffer } => multiline(doc, key, buffer, line),
        };
    }

    if let State::InMultiline { key, buffer } = state {
        debug!(
            key = %key,
            lines = buffer.len(),
            "discarding unterminated multi-line block"
        );
    }
}

fn normal<'a>(doc: &mut Document, line: &'a str) -> State<'a> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        doc.add_line();
        return State::Normal;
    }

    if let Some(body) = trimmed.strip_prefix('#') {
        doc.add_comment(body.trim());
        return State::Normal;
    }

    let Some((key, value)) = line.split_once('=') else {
        trace!(line = %line, "dropping unrecognized line");
        return State::Normal;
    };
    let key = key.trim();
    let value = value.trim();

    if let Some(escaped) = value.strip_suffix(ESCAPE_SUFFIX) {
        doc.set(key, escaped.trim());
        State::Normal
    } else if value == EOF_MARKER {
        State::InMultiline {
            key,
            buffer: Vec::new(),
        }
    } else {
        doc.set(key, value);
        State::Normal
    }
}

fn multiline<'a>(
    doc: &mut Document,
    key: &'a str,
    mut buffer: Vec<&'a str>,
    line: &'a str,
) -> State<'a> {
    if line.trim() == EOF_MARKER {
        doc.set(key, buffer.join("\n"));
        return State::Normal;
    }

    buffer.push(line);
    State::InMultiline { key, buffer }
}
