//! Keyword table: which call names mark translatable text and how to read them.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SINGULAR: &str = "gettext.Gettext";
pub const DEFAULT_PLURAL: &str = "gettext.NGettext";
pub const DEFAULT_CONTEXTUAL: &str = "gettext.NCGettext";

/// How the text arguments of a marker call are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    /// `(msgid)`
    Singular,
    /// `(msgid, msgid_plural)`
    Plural,
    /// `(msgctxt, msgid)`
    Contextual,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule {
    #[serde(rename = "type")]
    pub kind: KeywordKind,
    /// Fully dotted call path, e.g. `i18n.G`.
    pub name: String,
    /// Leading arguments to ignore before the text argument(s).
    #[serde(default)]
    pub skip_args: usize,
}

impl KeywordRule {
    pub fn new(kind: KeywordKind, name: impl Into<String>, skip_args: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            skip_args,
        }
    }
}

/// Immutable lookup from callee name to its rule.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    rules: HashMap<String, KeywordRule>,
}

impl KeywordTable {
    /// Build from explicit records. A later record with the same name wins.
    pub fn from_rules(rules: impl IntoIterator<Item = KeywordRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| (rule.name.clone(), rule))
            .collect();
        Self { rules }
    }

    /// Build from the three marker names sharing one skip count.
    pub fn from_names(singular: &str, plural: &str, contextual: &str, skip_args: usize) -> Self {
        Self::from_rules([
            KeywordRule::new(KeywordKind::Singular, singular, skip_args),
            KeywordRule::new(KeywordKind::Plural, plural, skip_args),
            KeywordRule::new(KeywordKind::Contextual, contextual, skip_args),
        ])
    }

    /// Parse a JSON array of `{ "type", "name", "skipArgs" }` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<KeywordRule> =
            serde_json::from_str(json).context("Malformed keyword configuration")?;
        Ok(Self::from_rules(rules))
    }

    pub fn get(&self, name: &str) -> Option<&KeywordRule> {
        self.rules.get(name)
    }
}
