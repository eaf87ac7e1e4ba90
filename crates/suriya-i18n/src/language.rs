//! # Supported Languages
//!
//! English is the default locale and the fallback target for templates the
//! other locales have not translated yet.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A UI language the toolkit can render.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default locale).
    #[default]
    En,
    /// Thai.
    Th,
}

/// A language tag that names no supported language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Th]
    }

    /// The BCP 47-ish tag used on the wire and in the preferences file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }

    /// The language's own display name.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Th => "ไทย",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .copied()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_tag_roundtrip() {
        for language in Language::all() {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), *language);
        }
    }

    #[test]
    fn test_unrecognized_tag_rejected() {
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
    }
}
