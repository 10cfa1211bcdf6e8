use sudood_core::Language;

/// Resolved locale for a request.
///
/// The URL prefix admits any two-letter code (the redirect middleware only
/// normalizes unprefixed paths); content resolution is lenient and falls
/// back to English for codes the site is not published in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn from_path_code(code: &str) -> Self {
        Self {
            language: Language::from_code(code),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn dir(&self) -> &'static str {
        self.language.dir()
    }
}
