//! # SVG Region Extraction
//!
//! Event-driven parse of the map SVG. Only three things matter per region
//! path: `id`, `name`, and `d`. Paths missing an id or path data are
//! skipped, matching the picker's behavior of only rendering selectable
//! regions.

use quick_xml::events::BytesStart;
use quick_xml::{events::Event, Reader};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ViewBox used when the asset omits one.
pub const DEFAULT_VIEWBOX: &str = "0 0 560 1025";

/// Errors loading or parsing the map asset.
#[derive(Error, Debug)]
pub enum MapError {
    /// The asset could not be fetched (transport-level failure).
    #[error("map asset fetch failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("map asset fetch returned status {status} for {url}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The asset file could not be read.
    #[error("map asset read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The markup could not be parsed.
    #[error("map asset parse failed: {0}")]
    Parse(String),

    /// The document contains no `<svg>` root.
    #[error("map asset is not an SVG document")]
    InvalidSvg,
}

/// One selectable region extracted from the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPath {
    /// Stable region identifier (matches the province catalog namespace).
    pub id: String,
    /// Display name attribute (may be empty).
    pub name: String,
    /// SVG path data.
    pub d: String,
}

/// The parsed map asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapAsset {
    /// The SVG viewBox, or [`DEFAULT_VIEWBOX`] when absent.
    pub view_box: String,
    /// Selectable regions in document order.
    pub regions: Vec<RegionPath>,
}

impl MapAsset {
    /// Parse SVG markup into region records.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidSvg`] when the document has no `<svg>` root,
    /// [`MapError::Parse`] on malformed markup.
    pub fn parse(svg: &str) -> Result<Self, MapError> {
        let mut reader = Reader::from_str(svg);
        reader.trim_text(true);

        let mut saw_svg = false;
        let mut view_box: Option<String> = None;
        let mut regions = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref element)) | Ok(Event::Empty(ref element)) => {
                    match element.local_name().as_ref() {
                        b"svg" => {
                            saw_svg = true;
                            if view_box.is_none() {
                                view_box = attribute_value(element, "viewBox")?;
                            }
                        }
                        b"path" => {
                            let id = attribute_value(element, "id")?.unwrap_or_default();
                            let name = attribute_value(element, "name")?.unwrap_or_default();
                            let d = attribute_value(element, "d")?.unwrap_or_default();
                            // Only id'd paths with geometry are selectable.
                            if !id.is_empty() && !d.is_empty() {
                                regions.push(RegionPath { id, name, d });
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(error) => return Err(MapError::Parse(error.to_string())),
            }
        }

        if !saw_svg {
            return Err(MapError::InvalidSvg);
        }

        Ok(Self {
            view_box: view_box.unwrap_or_else(|| DEFAULT_VIEWBOX.to_string()),
            regions,
        })
    }

    /// Find a region by id.
    pub fn region(&self, id: &str) -> Option<&RegionPath> {
        self.regions.iter().find(|region| region.id == id)
    }
}

fn attribute_value(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, MapError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|error| MapError::Parse(error.to_string()))?;
        if attribute.key.local_name().as_ref() == name.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|error| MapError::Parse(error.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
