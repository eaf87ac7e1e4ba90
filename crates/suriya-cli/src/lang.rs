//! # `suriya lang`
//!
//! Shows or sets the persisted UI language. The preference survives across
//! runs in the user config directory; everything else in the toolkit reads
//! it through [`crate::localizer_for`].

use suriya_i18n::{Language, Localizer, MessageKey};

use crate::locale_store;

/// Arguments for the `lang` subcommand.
#[derive(clap::Args, Debug)]
pub struct LangArgs {
    /// Language to persist (en, th). Omit to show the current preference.
    #[arg(value_name = "LANGUAGE")]
    pub set: Option<Language>,
}

pub fn run(args: LangArgs, localizer: &Localizer) -> anyhow::Result<()> {
    let Some(store) = locale_store() else {
        anyhow::bail!("no user config directory available on this platform");
    };

    let language = match args.set {
        Some(language) => {
            store.save(language)?;
            tracing::info!(language = language.as_str(), path = %store.path().display(), "language preference saved");
            language
        }
        None => store.load(),
    };

    println!(
        "{}: {} ({})",
        localizer.t(MessageKey::LanguageSwitcherLabel),
        language.as_str(),
        language.native_name()
    );
    Ok(())
}
