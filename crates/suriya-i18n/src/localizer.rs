//! # Localizer Service
//!
//! The explicit translation context handed to views. Holds the active
//! language and resolves keys through the fallback chain:
//! requested-locale template, then English, then the raw key name.

use crate::catalog::MessageKey;
use crate::format::format_message;
use crate::language::Language;

/// Translation service for one rendering context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// A localizer for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a key with no parameters.
    pub fn t(&self, key: MessageKey) -> String {
        self.t_with(key, &[])
    }

    /// Resolve a key and substitute `{token}` parameters.
    pub fn t_with(&self, key: MessageKey, params: &[(&str, String)]) -> String {
        match key
            .template(self.language)
            .or_else(|| key.template(Language::En))
        {
            Some(template) => format_message(template, params),
            None => key.key().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_resolution() {
        let localizer = Localizer::new(Language::En);
        assert_eq!(localizer.t(MessageKey::ButtonBack), "Back");
    }

    #[test]
    fn test_thai_resolution() {
        let localizer = Localizer::new(Language::Th);
        assert_eq!(localizer.t(MessageKey::ButtonBack), "ย้อนกลับ");
    }

    #[test]
    fn test_fallback_to_english() {
        // Results keys have no Thai templates yet.
        let localizer = Localizer::new(Language::Th);
        assert_eq!(
            localizer.t(MessageKey::ResultNationalLabel),
            "National average"
        );
    }

    #[test]
    fn test_parameterized_resolution() {
        let localizer = Localizer::new(Language::En);
        assert_eq!(
            localizer.t_with(
                MessageKey::ProgressLabel,
                &[("current", "3".into()), ("total", "4".into())]
            ),
            "Step 3 of 4"
        );
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Localizer::default().language(), Language::En);
    }
}
