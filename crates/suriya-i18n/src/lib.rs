//! # suriya-i18n — Typed Bilingual Messages
//!
//! User-facing text for the survey and results views, in English and Thai.
//!
//! ## Design
//!
//! - **No string-keyed lookups.** Every message is a [`MessageKey`] variant;
//!   a key that does not exist cannot be referenced, and adding a key forces
//!   a template to be written for the default locale.
//! - **Pure formatting.** Templates carry `{token}` placeholders;
//!   [`format::format_message`] substitutes parameters without touching any
//!   ambient state. Unknown placeholders render literally.
//! - **Explicit service object.** [`Localizer`] is passed to whatever needs
//!   text. There is no global language state.
//! - **Fallback chain.** Requested-locale template, then default-locale
//!   (English) template, then the raw key name. Thai templates for the
//!   results dashboard are not yet written, so those keys exercise the
//!   English fallback.
//! - **Persisted preference.** [`LocaleStore`] keeps the chosen language in
//!   a TOML preferences file under the user config directory; absent or
//!   unrecognized values fall back to English.

pub mod catalog;
pub mod format;
pub mod language;
pub mod localizer;
pub mod store;

pub use catalog::MessageKey;
pub use format::format_message;
pub use language::Language;
pub use localizer::Localizer;
pub use store::{LocaleStore, LocaleStoreError};
