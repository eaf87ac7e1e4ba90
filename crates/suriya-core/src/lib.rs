//! # suriya-core — Foundational Types for the Suriya Toolkit
//!
//! This crate is the bedrock of the Suriya solar readiness toolkit. It defines
//! the type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProvinceId`, `SessionId`,
//!    `BillAmount`, `OccupantCount`, `ApplianceQuantity` — all newtypes with
//!    validated or clamping constructors. No bare strings or bare integers
//!    for household inputs.
//!
//! 2. **Clamp, never reject.** Household numerics are total over any raw
//!    input: construction rounds and clamps into the legal range, so a value
//!    outside its bounds cannot exist after any write.
//!
//! 3. **Fixed catalogs.** The province list (78 entries) and the appliance
//!    kinds (6 variants) are closed sets. Every `match` on `Appliance` is
//!    exhaustive; adding a kind forces every consumer to handle it.
//!
//! 4. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    Submission reference ids are SHA-256 over canonical bytes only.
//!
//! 5. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision, matching the canonical serialization rules.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `suriya-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; everything that crosses
//!   the submission boundary implements `Serialize`/`Deserialize`.

pub mod appliance;
pub mod bounds;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod province;
pub mod residence;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use appliance::{Appliance, APPLIANCE_COUNT};
pub use bounds::{ApplianceQuantity, BillAmount, OccupantCount};
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::SuriyaError;
pub use identity::{ProvinceId, SessionId};
pub use province::{Province, PROVINCES};
pub use residence::ResidenceType;
pub use temporal::Timestamp;
