//! # Appliance Catalog
//!
//! The six power-hungry appliance kinds the survey asks about. One enum,
//! used everywhere: every `match` on `Appliance` is exhaustive, so adding a
//! kind forces every consumer (summary text, usage charts, CLI prompts) to
//! handle it at compile time.
//!
//! Declaration order is catalog order. The derived `Ord` follows declaration
//! order, so a `BTreeMap<Appliance, _>` iterates in catalog order for free.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SuriyaError;

/// A household appliance kind from the fixed survey catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    /// Air conditioner unit.
    #[serde(rename = "ac")]
    AirConditioner,
    /// Water heater.
    #[serde(rename = "heater")]
    WaterHeater,
    /// Washer and dryer pair.
    Laundry,
    /// Refrigerator.
    #[serde(rename = "fridge")]
    Refrigerator,
    /// Smart TV / home theater.
    Tv,
    /// EV charger.
    #[serde(rename = "ev")]
    EvCharger,
}

/// Total number of appliance kinds. Used for compile-time assertions.
pub const APPLIANCE_COUNT: usize = 6;

impl Appliance {
    /// All appliance kinds in catalog order.
    pub fn all() -> &'static [Appliance] {
        &[
            Self::AirConditioner,
            Self::WaterHeater,
            Self::Laundry,
            Self::Refrigerator,
            Self::Tv,
            Self::EvCharger,
        ]
    }

    /// The stable string identifier for this kind.
    ///
    /// This must match the serde serialization format; the tokens are the
    /// keys the survey has always used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "ac",
            Self::WaterHeater => "heater",
            Self::Laundry => "laundry",
            Self::Refrigerator => "fridge",
            Self::Tv => "tv",
            Self::EvCharger => "ev",
        }
    }
}

impl FromStr for Appliance {
    type Err = SuriyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Appliance::all()
            .iter()
            .copied()
            .find(|appliance| appliance.as_str() == s)
            .ok_or_else(|| SuriyaError::InvalidIdentifier(s.to_string()))
    }
}

impl std::fmt::Display for Appliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(Appliance::all().len(), APPLIANCE_COUNT);
    }

    #[test]
    fn test_serde_tokens_match_as_str() {
        for appliance in Appliance::all() {
            let json = serde_json::to_string(appliance).unwrap();
            assert_eq!(json, format!("\"{}\"", appliance.as_str()));
            let parsed: Appliance = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *appliance);
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for appliance in Appliance::all() {
            assert_eq!(appliance.as_str().parse::<Appliance>().unwrap(), *appliance);
        }
        assert!("toaster".parse::<Appliance>().is_err());
    }

    #[test]
    fn test_ord_follows_catalog_order() {
        let mut sorted = Appliance::all().to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), Appliance::all());
    }
}
