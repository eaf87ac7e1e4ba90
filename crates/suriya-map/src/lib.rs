//! # suriya-map — Province Map Asset
//!
//! Loads the Thailand province map (an SVG with one `<path>` per region)
//! and extracts the records the picker needs: a stable region id, a display
//! name, and the path data. Region ids share a namespace with the province
//! catalog, so a parsed region resolves directly to a catalog entry.
//!
//! Failure semantics are deliberately flat: any fetch or parse problem is
//! reported once and the caller degrades to a static placeholder. There is
//! no retry and no partial rendering of a half-parsed asset.

pub mod asset;
pub mod fetch;

pub use asset::{MapAsset, MapError, RegionPath, DEFAULT_VIEWBOX};
pub use fetch::{fetch_map, load_map_file};
