//! # Asset Retrieval
//!
//! Fetches the map SVG over HTTP or reads it from disk, then hands the
//! markup to the parser. One attempt only; callers that want a placeholder
//! on failure map the error to their static status text.

use std::fs;
use std::path::Path;

use crate::asset::{MapAsset, MapError};

/// Fetch and parse the map asset from a URL.
pub fn fetch_map(url: &str) -> Result<MapAsset, MapError> {
    tracing::debug!(url, "fetching map asset");

    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(MapError::Fetch {
                url: url.to_string(),
                status,
            })
        }
        Err(error) => return Err(MapError::Transport(error.to_string())),
    };

    let markup = response
        .into_string()
        .map_err(|error| MapError::Transport(error.to_string()))?;
    MapAsset::parse(&markup)
}

/// Read and parse the map asset from a local file.
pub fn load_map_file(path: impl AsRef<Path>) -> Result<MapAsset, MapError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading map asset");
    let markup = fs::read_to_string(path)?;
    MapAsset::parse(&markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_map_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<svg viewBox="0 0 10 10"><path id="bkk" name="Bangkok" d="M0 0"/></svg>"#
        )
        .unwrap();

        let asset = load_map_file(file.path()).unwrap();
        assert_eq!(asset.regions.len(), 1);
        assert_eq!(asset.view_box, "0 0 10 10");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_map_file("/nonexistent/thailand-provinces.svg");
        assert!(matches!(result, Err(MapError::Io(_))));
    }
}
