//! # Residence Types
//!
//! The three residence options the survey offers. Labels and descriptions
//! live in the message catalog; this crate only knows the stable tokens.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SuriyaError;

/// The kind of home the respondent lives in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceType {
    /// Detached home with rooftop space.
    #[default]
    House,
    /// Shared walls but your own roof.
    Townhouse,
    /// Shared building and common roof.
    Apartment,
}

impl ResidenceType {
    /// All residence kinds in catalog order.
    pub fn all() -> &'static [ResidenceType] {
        &[Self::House, Self::Townhouse, Self::Apartment]
    }

    /// Stable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Townhouse => "townhouse",
            Self::Apartment => "apartment",
        }
    }
}

impl FromStr for ResidenceType {
    type Err = SuriyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResidenceType::all()
            .iter()
            .copied()
            .find(|residence| residence.as_str() == s)
            .ok_or_else(|| SuriyaError::InvalidIdentifier(s.to_string()))
    }
}

impl std::fmt::Display for ResidenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_house() {
        assert_eq!(ResidenceType::default(), ResidenceType::House);
    }

    #[test]
    fn test_roundtrip() {
        for residence in ResidenceType::all() {
            assert_eq!(
                residence.as_str().parse::<ResidenceType>().unwrap(),
                *residence
            );
        }
    }

    #[test]
    fn test_serde_tokens() {
        assert_eq!(
            serde_json::to_string(&ResidenceType::Apartment).unwrap(),
            "\"apartment\""
        );
    }
}
