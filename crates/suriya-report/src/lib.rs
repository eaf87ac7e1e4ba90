//! # suriya-report — Results Dashboard
//!
//! Turns a survey submission (or ad-hoc inputs) into the results view
//! model: the province efficiency comparison and the appliance usage
//! breakdown, with every label resolved through the localizer at build
//! time. Rendering is a separate, pure step over the finished model, so
//! the same dashboard can go to a terminal or to JSON unchanged.

pub mod dashboard;
pub mod loading;
pub mod render;

pub use dashboard::{
    DashboardInputs, EfficiencySection, ResultsDashboard, UsageSection,
};
pub use loading::{clamp_loading_delay, DEFAULT_LOADING_DELAY};
pub use render::{render_json, render_text};
