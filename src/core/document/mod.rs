//! Document type.
//!
//! An ordered sequence of [`Element`]s plus a key → position index.
//! Element order is the on-disk line order; the index gives O(1) lookup
//! and must be kept in step with every structural change.

mod element;
mod parser;
mod persist;

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::trace;

pub use element::{survives_round_trip, Element, EOF_MARKER};

/// A parsed `.kvc` document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    items: Vec<Element>,
    index: HashMap<String, usize>,
    path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document with no remembered path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document bound to `path` for [`Document::save`].
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Parse `input` and append the resulting elements.
    ///
    /// Existing elements are kept; start from [`Document::new`] for a
    /// fresh load. Assignments route through [`Document::set`], so a key
    /// repeated in the input updates its first occurrence.
    pub fn parse(&mut self, input: &str) {
        parser::parse_into(self, input);
    }

    /// Look up the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|&pos| self.items.get(pos))
            .and_then(Element::text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Bind `key` to `value`.
    ///
    /// An existing key is replaced at its current position, so it keeps
    /// its place in the serialized output. A new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.index.get(&key).copied() {
            Some(pos) => {
                trace!(key = %key, pos, "updating in place");
                self.items[pos] = Element::value(key, value);
            }
            None => {
                let pos = self.items.len();
                trace!(key = %key, pos, "appending");
                self.items.push(Element::value(key.clone(), value));
                self.index.insert(key, pos);
            }
        }
    }

    /// Append a raw element.
    ///
    /// A keyed element becomes the indexed entry for its key, even if an
    /// earlier element carries the same key.
    pub fn add(&mut self, element: Element) {
        if let Some(key) = element.key() {
            self.index.insert(key.to_string(), self.items.len());
        }
        self.items.push(element);
    }

    /// Append a keyed element without looking for an existing one.
    ///
    /// Unlike [`Document::set`] this never updates in place; the index is
    /// repointed at the new element.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.add(Element::value(key, value));
    }

    /// Append a blank line.
    pub fn add_line(&mut self) {
        self.items.push(Element::Empty);
    }

    /// Append a comment line.
    pub fn add_comment(&mut self, text: impl Into<String>) {
        self.items.push(Element::comment(text));
    }

    /// Remove the element bound to `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.index.remove(key) {
            self.items.remove(pos);
            self.shift_after(pos);
        }
    }

    /// Remove the element at `pos`, whatever its kind.
    ///
    /// Out-of-range positions are a no-op.
    pub fn remove_at(&mut self, pos: usize) {
        if pos >= self.items.len() {
            return;
        }

        let removed = self.items.remove(pos);
        if let Some(key) = removed.key() {
            // A stale duplicate left behind by `add_value` is not indexed.
            if self.index.get(key) == Some(&pos) {
                self.index.remove(key);
            }
        }
        self.shift_after(pos);
    }

    /// Pull every index entry past `pos` one slot earlier.
    fn shift_after(&mut self, pos: usize) {
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.items
    }

    /// Number of elements, including blank lines and comments.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexed `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(move |(pos, element)| {
                let key = element.key()?;
                (self.index.get(key) == Some(&pos)).then(|| (key, element.text().unwrap_or("")))
            })
    }

    /// Indexed keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.items {
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut doc = Self::new();
        doc.parse(s);
        Ok(doc)
    }
}
