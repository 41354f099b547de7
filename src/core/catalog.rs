//! Aggregation of occurrences into catalog entries keyed by message text.

use std::collections::HashMap;
use std::fmt;

/// Flag telling translators the message carries runtime placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    CFormat,
}

impl FormatHint {
    /// Any `%` counts, including `%%`.
    pub fn detect(msgid: &str, msgid_plural: &str) -> Option<Self> {
        (msgid.contains('%') || msgid_plural.contains('%')).then_some(FormatHint::CFormat)
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatHint::CFormat => write!(f, "c-format"),
        }
    }
}

/// One recognized marker call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub msgid: String,
    /// Empty when the call has no plural form.
    pub msgid_plural: String,
    /// Empty when the call has no context.
    pub msgctxt: String,
    pub format_hint: Option<FormatHint>,
    /// Normalized comment lines, without the `#. ` prefix.
    pub comments: Vec<String>,
    pub file: String,
    pub line: usize,
}

/// All occurrences of one message text, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub msgid: String,
    pub occurrences: Vec<Occurrence>,
}

impl CatalogEntry {
    /// The first occurrence decides plural, context and format hint.
    pub fn primary(&self) -> &Occurrence {
        &self.occurrences[0]
    }
}

/// Message text → occurrences, remembering first-seen order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, occurrence: Occurrence) {
        match self.index.get(&occurrence.msgid) {
            Some(&i) => self.entries[i].occurrences.push(occurrence),
            None => {
                self.index
                    .insert(occurrence.msgid.clone(), self.entries.len());
                self.entries.push(CatalogEntry {
                    msgid: occurrence.msgid.clone(),
                    occurrences: vec![occurrence],
                });
            }
        }
    }

    pub fn extend(&mut self, occurrences: impl IntoIterator<Item = Occurrence>) {
        for occurrence in occurrences {
            self.record(occurrence);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order, or sorted by message text.
    pub fn into_entries(self, sorted: bool) -> Vec<CatalogEntry> {
        let mut entries = self.entries;
        if sorted {
            entries.sort_by(|a, b| a.msgid.cmp(&b.msgid));
        }
        entries
    }
}
