//! Supported site languages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A language the site is published in.
///
/// English is the canonical variant: category identity, facet options and all
/// cross-record grouping key on the English text regardless of the language
/// the caller is browsing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Lenient resolution: unknown codes fall back to English.
    ///
    /// URLs with an unrecognized two-letter prefix are still served; the
    /// content just resolves to the English variant.
    pub fn from_code(code: &str) -> Language {
        code.parse().unwrap_or(Language::En)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Document direction attribute for the resolved language.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(DomainError::validation(format!(
                "unsupported language code: {other}"
            ))),
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
