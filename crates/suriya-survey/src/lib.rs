//! # suriya-survey — Wizard State
//!
//! The survey's mutable state and its step machine.
//!
//! - **Response** (`response.rs`): the household inputs. Every mutator is a
//!   total function; numeric writes round and clamp, province selection
//!   ignores unknown ids. No mutator can fail or leave a field out of range.
//!
//! - **Wizard** (`wizard.rs`): the four-step flow
//!   Bill -> Residence -> Household -> Appliances. Navigation moves the step
//!   index by one and clamps at both ends, so stray next/back presses are
//!   no-ops rather than errors. Submission is runtime-gated to the last step
//!   and hands the results flow a real snapshot with a content-addressed
//!   reference id, not just an opaque token.
//!
//! - **Summaries** (`summary.rs`): read-only text derived from the current
//!   response, localized through an explicit [`suriya_i18n::Localizer`].
//!   Nothing here is cached; every call recomputes from current state.

pub mod response;
pub mod summary;
pub mod wizard;

pub use response::SurveyResponse;
pub use summary::{
    appliance_label_key, appliance_summary, format_baht, household_helper, household_summary,
    residence_description_key, residence_label_key, selected_province_name,
};
pub use wizard::{Submission, Wizard, WizardError, WizardStep, STEP_COUNT};
