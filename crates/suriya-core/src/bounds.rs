//! # Bounded Household Domains
//!
//! Clamp-on-write numeric newtypes for the three household inputs. Every
//! constructor is total: any raw value (slider positions arrive as floats)
//! rounds and clamps into the legal range, so an out-of-range value cannot
//! exist after any write and mutators never surface validation errors.
//!
//! Serde goes through the same constructors (`#[serde(from = ...)]`), so
//! deserialized answer files hold the same invariants as live edits.

use serde::{Deserialize, Serialize};

/// Monthly electricity bill in whole baht, bounded to [500, 20000].
///
/// The bill slider moves in steps of 100; the preset buttons set literal
/// amounts. Construction clamps but does not snap to the step grid, matching
/// slider semantics (the grid is a UI affordance, not an invariant).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct BillAmount(u32);

impl BillAmount {
    /// Lower bound of the bill slider, in baht.
    pub const MIN: u32 = 500;
    /// Upper bound of the bill slider, in baht.
    pub const MAX: u32 = 20_000;
    /// Slider step, in baht.
    pub const STEP: u32 = 100;
    /// Preset amounts offered as one-tap buttons.
    pub const PRESETS: [u32; 5] = [1_200, 2_500, 4_000, 6_000, 9_000];

    /// Clamp a raw amount into [`Self::MIN`, `Self::MAX`].
    pub fn new(baht: u32) -> Self {
        Self(baht.clamp(Self::MIN, Self::MAX))
    }

    /// The amount in baht.
    pub fn baht(&self) -> u32 {
        self.0
    }

    /// The slider midpoint marker, rounded to the step grid (10300 baht).
    pub fn midpoint() -> u32 {
        let half = (Self::MIN + Self::MAX) as f64 / 2.0;
        (half / Self::STEP as f64).round() as u32 * Self::STEP
    }
}

impl Default for BillAmount {
    fn default() -> Self {
        Self::new(4_000)
    }
}

impl From<u32> for BillAmount {
    fn from(baht: u32) -> Self {
        Self::new(baht)
    }
}

impl From<BillAmount> for u32 {
    fn from(amount: BillAmount) -> Self {
        amount.0
    }
}

/// Number of people in the home, bounded to [1, 10].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct OccupantCount(u8);

impl OccupantCount {
    /// Smallest household the survey models.
    pub const MIN: u8 = 1;
    /// Largest household the survey models.
    pub const MAX: u8 = 10;

    /// Clamp an integer count into [`Self::MIN`, `Self::MAX`].
    pub fn new(count: u32) -> Self {
        Self(count.clamp(Self::MIN as u32, Self::MAX as u32) as u8)
    }

    /// Round a raw slider value to the nearest integer, then clamp.
    /// Non-finite input pins to the lower bound.
    pub fn from_raw(raw: f64) -> Self {
        let rounded = raw.round();
        if rounded.is_nan() || rounded <= Self::MIN as f64 {
            Self(Self::MIN)
        } else if rounded >= Self::MAX as f64 {
            Self(Self::MAX)
        } else {
            Self(rounded as u8)
        }
    }

    /// The count as a plain integer.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// True when the household phrase takes the plural form.
    pub fn is_plural(&self) -> bool {
        self.0 > 1
    }
}

impl Default for OccupantCount {
    fn default() -> Self {
        Self(2)
    }
}

impl From<u32> for OccupantCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl From<OccupantCount> for u32 {
    fn from(count: OccupantCount) -> Self {
        count.0 as u32
    }
}

/// How many of one appliance kind the household runs, bounded to [0, 6].
///
/// Zero means "off": the appliance does not count as selected. A raw value
/// that rounds to zero or below stores 0; anything positive clamps into
/// [1, 6].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct ApplianceQuantity(u8);

impl ApplianceQuantity {
    /// Largest per-kind quantity the survey models.
    pub const MAX: u8 = 6;

    /// The zero quantity ("appliance off").
    pub const OFF: ApplianceQuantity = ApplianceQuantity(0);

    /// Clamp an integer quantity into [0, [`Self::MAX`]].
    pub fn new(quantity: u32) -> Self {
        Self(quantity.min(Self::MAX as u32) as u8)
    }

    /// Round a raw slider value; non-positive (or non-finite) results store
    /// 0, positive results clamp into [1, [`Self::MAX`]].
    pub fn from_raw(raw: f64) -> Self {
        let rounded = raw.round();
        if rounded.is_nan() || rounded <= 0.0 {
            Self(0)
        } else if rounded >= Self::MAX as f64 {
            Self(Self::MAX)
        } else {
            Self(rounded as u8)
        }
    }

    /// The quantity as a plain integer.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// True when the appliance counts as selected (quantity > 0).
    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for ApplianceQuantity {
    fn from(quantity: u32) -> Self {
        Self::new(quantity)
    }
}

impl From<ApplianceQuantity> for u32 {
    fn from(quantity: ApplianceQuantity) -> Self {
        quantity.0 as u32
    }
}
