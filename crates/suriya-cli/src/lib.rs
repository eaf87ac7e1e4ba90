//! # suriya-cli — Command-Line Interface
//!
//! Terminal front end for the survey and results flows. Command handlers
//! live one module per subcommand; argument parsing stays separate from the
//! domain crates, which hold all of the behavior.
//!
//! ## Subcommands
//!
//! - `survey` — run the wizard (interactive, or from an answers file) and
//!   render the results for the submission.
//! - `results` — render the results dashboard from ad-hoc inputs.
//! - `map` — fetch/parse the province map asset and list its regions.
//! - `lang` — show or set the persisted UI language.

use std::str::FromStr;

use suriya_i18n::{Language, LocaleStore, Localizer};

pub mod lang;
pub mod map;
pub mod results;
pub mod survey;

/// Output format for rendered dashboards and listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format {other:?} (expected text or json)")),
        }
    }
}

/// The locale store at its default location, when the platform has one.
pub fn locale_store() -> Option<LocaleStore> {
    LocaleStore::at_default_location()
}

/// Resolve the active localizer: an explicit `--lang` wins, otherwise the
/// persisted preference, otherwise English.
pub fn localizer_for(lang_override: Option<Language>) -> Localizer {
    let language = lang_override
        .or_else(|| locale_store().map(|store| store.load()))
        .unwrap_or_default();
    Localizer::new(language)
}
