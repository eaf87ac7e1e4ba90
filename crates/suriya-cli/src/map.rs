//! # `suriya map`
//!
//! Fetches (or reads) the province map asset and lists its selectable
//! regions. A load or parse failure degrades to the same static status
//! text the picker shows; there is no retry.

use std::path::PathBuf;

use suriya_core::Province;
use suriya_i18n::{Localizer, MessageKey};
use suriya_map::{fetch_map, load_map_file, MapAsset};

/// Arguments for the `map` subcommand.
#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// Fetch the asset from a URL.
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the asset from a local SVG file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// List every region instead of just the summary.
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: MapArgs, localizer: &Localizer) -> anyhow::Result<()> {
    println!("{}", localizer.t(MessageKey::MapLoading));

    let loaded = match (&args.file, &args.url) {
        (Some(path), _) => load_map_file(path),
        (None, Some(url)) => fetch_map(url),
        (None, None) => anyhow::bail!("provide --url or --file"),
    };

    let asset = match loaded {
        Ok(asset) => asset,
        Err(error) => {
            // Degrade to the static placeholder, matching the picker.
            tracing::warn!(%error, "map asset unavailable");
            println!("{}", localizer.t(MessageKey::MapError));
            return Ok(());
        }
    };

    print_summary(&asset, localizer, args.list);
    Ok(())
}

fn print_summary(asset: &MapAsset, localizer: &Localizer, list: bool) {
    let in_catalog = asset
        .regions
        .iter()
        .filter(|region| Province::find_str(&region.id).is_some())
        .count();

    println!(
        "viewBox {} · {} regions ({} in catalog)",
        asset.view_box,
        asset.regions.len(),
        in_catalog
    );

    if list {
        for region in &asset.regions {
            let name = Province::find_str(&region.id)
                .map(|province| province.name.to_string())
                .unwrap_or_else(|| {
                    if region.name.is_empty() {
                        localizer.t(MessageKey::MapCaptionEmpty)
                    } else {
                        region.name.clone()
                    }
                });
            println!("  {:6} {}", region.id, name);
        }
    }
}
