//! Bilingual text values.

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// A bilingual string pair. Every display string in the catalog carries both
/// variants; resolution to one language is always explicit via [`Localized::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub ar: String,
    pub en: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// A value that is either a plain string or a bilingual pair.
///
/// The catalog data file uses both shapes for performance-spec values
/// (dimensions are plain, descriptive values are bilingual).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrLocalized {
    Plain(String),
    Localized(Localized),
}

impl TextOrLocalized {
    pub fn get(&self, lang: Language) -> &str {
        match self {
            TextOrLocalized::Plain(s) => s,
            TextOrLocalized::Localized(l) => l.get(lang),
        }
    }
}
