//! # Dashboard Model
//!
//! The fully-resolved results view: derived figures plus localized labels.
//! Building the model is pure given its inputs; the efficiency figures are
//! recomputed on every build rather than cached anywhere.

use serde::Serialize;

use suriya_core::{Province, ProvinceId};
use suriya_i18n::{Localizer, MessageKey};
use suriya_insight::{
    EfficiencyTier, ProvinceEfficiency, SeasonalSunHours, UsageBreakdown, UsageDatum,
    NATIONAL_AVERAGE_SCORE,
};
use suriya_survey::{format_baht, Submission};

/// Bill shown in the usage chart center when none was collected.
const DEFAULT_BILL_BAHT: u32 = 3_200;

/// Everything the dashboard needs. Assembled from a submission or from
/// ad-hoc CLI flags.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    /// Selected province, if any.
    pub province: Option<ProvinceId>,
    /// Tier biasing the efficiency figures.
    pub tier: EfficiencyTier,
    /// Appliance usage data; the fixed sample set stands in when empty.
    pub usage_data: Vec<UsageDatum>,
    /// Metered monthly total, overriding the summed denominator when > 0.
    pub month_kwh: Option<f64>,
    /// Monthly bill in baht for the chart center.
    pub bill_baht: Option<u32>,
}

impl DashboardInputs {
    /// Inputs derived from a submitted survey.
    ///
    /// The survey collects appliance quantities, not meter readings, so
    /// the usage chart keeps the sample dataset; the submitted province
    /// and bill drive the rest.
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            province: submission.response.province().cloned(),
            tier: EfficiencyTier::default(),
            usage_data: Vec::new(),
            month_kwh: None,
            bill_baht: Some(submission.response.monthly_bill().baht()),
        }
    }
}

/// The efficiency-comparison half of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencySection {
    /// Selected province id, if any.
    pub province_id: Option<String>,
    /// Resolved display name: catalog name, uppercased id for off-catalog
    /// ids, absent when nothing is selected.
    pub province_name: Option<String>,
    /// Localized heading over the score figure.
    pub score_label: String,
    /// Derived score in [45, 95].
    pub overall_score: u32,
    /// Localized label of the province bar.
    pub province_bar_label: String,
    /// Localized label of the national-average bar.
    pub national_bar_label: String,
    /// The comparison baseline (68).
    pub national_average: u32,
    /// Signed distance from the baseline.
    pub score_delta: i32,
    /// Season-averaged sun hours, one decimal.
    pub average_sun_hours: f64,
    /// Localized title for the sun-hours stat card.
    pub sun_hours_title: String,
    /// Localized unit line for the sun-hours stat card.
    pub sun_hours_unit: String,
    /// Localized one-line summary under the chart.
    pub summary: String,
    /// Per-season figures.
    pub seasons: SeasonalSunHours,
}

/// The usage-breakdown half of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct UsageSection {
    /// Localized section title.
    pub title: String,
    /// Normalized chart slices.
    #[serde(flatten)]
    pub breakdown: UsageBreakdown,
    /// Chart-center primary line (the bill).
    pub center_primary: String,
    /// Chart-center secondary line (total kWh per month).
    pub center_secondary: String,
}

/// The complete results view model.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsDashboard {
    /// Language the labels were resolved in.
    pub language: String,
    /// Efficiency comparison.
    pub efficiency: EfficiencySection,
    /// Usage breakdown.
    pub usage: UsageSection,
}

impl ResultsDashboard {
    /// Build the dashboard from inputs, resolving all labels through the
    /// localizer.
    pub fn build(inputs: &DashboardInputs, localizer: &Localizer) -> Self {
        Self {
            language: localizer.language().as_str().to_string(),
            efficiency: build_efficiency(inputs, localizer),
            usage: build_usage(inputs, localizer),
        }
    }
}

fn build_efficiency(inputs: &DashboardInputs, localizer: &Localizer) -> EfficiencySection {
    let derived = ProvinceEfficiency::derive(inputs.province.as_ref(), inputs.tier);
    let delta = derived.score_delta();

    // Catalog name when known, uppercased raw id otherwise.
    let province_name = inputs.province.as_ref().map(|id| {
        Province::find(id)
            .map(|province| province.name.to_string())
            .unwrap_or_else(|| id.as_str().to_uppercase())
    });

    let province_bar_label = match &province_name {
        Some(name) => localizer.t_with(
            MessageKey::ResultProvinceLabel,
            &[("province", name.clone())],
        ),
        None => localizer.t(MessageKey::ResultSelectedFallback),
    };

    let summary = match &province_name {
        Some(name) => localizer.t_with(
            MessageKey::ResultSummary,
            &[
                ("province", name.clone()),
                ("score", derived.overall_score.to_string()),
                ("national", NATIONAL_AVERAGE_SCORE.to_string()),
                ("delta", format_delta(delta)),
                ("sunHours", format_sun_hours(derived.average_sun_hours)),
            ],
        ),
        None => localizer.t(MessageKey::ResultSummaryNoProvince),
    };

    EfficiencySection {
        province_id: inputs.province.as_ref().map(|id| id.as_str().to_string()),
        province_name,
        score_label: localizer.t(MessageKey::ResultScoreLabel),
        overall_score: derived.overall_score,
        province_bar_label,
        national_bar_label: localizer.t(MessageKey::ResultNationalLabel),
        national_average: NATIONAL_AVERAGE_SCORE,
        score_delta: delta,
        average_sun_hours: derived.average_sun_hours,
        sun_hours_title: localizer.t(MessageKey::ResultSunHoursTitle),
        sun_hours_unit: localizer.t(MessageKey::ResultSunHoursUnit),
        summary,
        seasons: derived.seasons,
    }
}

fn build_usage(inputs: &DashboardInputs, localizer: &Localizer) -> UsageSection {
    let breakdown = UsageBreakdown::derive(&inputs.usage_data, inputs.month_kwh);
    let bill = inputs.bill_baht.unwrap_or(DEFAULT_BILL_BAHT);

    UsageSection {
        title: localizer.t(MessageKey::SummaryAppliances),
        center_primary: format_baht(bill),
        center_secondary: format!("{} kWh / month", format_kwh(breakdown.total_kwh)),
        breakdown,
    }
}

/// Deltas render with an explicit sign only when positive.
fn format_delta(delta: i32) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Whole-number figures drop the trailing `.0`.
fn format_kwh(kwh: f64) -> String {
    if kwh.fract() == 0.0 {
        format!("{kwh:.0}")
    } else {
        format!("{kwh}")
    }
}

/// Sun hours keep one decimal place, as derived.
fn format_sun_hours(hours: f64) -> String {
    format!("{hours:.1}")
}
