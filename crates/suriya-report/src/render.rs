//! # Dashboard Renderers
//!
//! Pure rendering over a built [`ResultsDashboard`]. The JSON form is the
//! machine hand-off; the text form is a compact terminal dashboard with the
//! score comparison as proportional bars and the usage legend with
//! one-decimal percentages.

use crate::dashboard::ResultsDashboard;

/// Width of the score comparison bars, in characters, at score 100.
const BAR_WIDTH: usize = 50;

/// Render the dashboard as pretty-printed JSON.
pub fn render_json(dashboard: &ResultsDashboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(dashboard)
}

/// Render the dashboard as terminal text.
pub fn render_text(dashboard: &ResultsDashboard) -> String {
    let mut out = String::new();
    let efficiency = &dashboard.efficiency;

    out.push_str(&format!(
        "{}: {} / 100\n\n",
        efficiency.score_label, efficiency.overall_score
    ));

    let label_width = efficiency
        .province_bar_label
        .chars()
        .count()
        .max(efficiency.national_bar_label.chars().count());
    out.push_str(&score_bar(
        &efficiency.province_bar_label,
        label_width,
        efficiency.overall_score,
    ));
    out.push_str(&score_bar(
        &efficiency.national_bar_label,
        label_width,
        efficiency.national_average,
    ));

    out.push('\n');
    out.push_str(&efficiency.summary);
    out.push('\n');
    out.push_str(&format!(
        "{}: {:.1} {}\n",
        efficiency.sun_hours_title, efficiency.average_sun_hours, efficiency.sun_hours_unit
    ));

    let usage = &dashboard.usage;
    out.push_str(&format!("\n{}\n", usage.title));
    let name_width = usage
        .breakdown
        .shares
        .iter()
        .map(|share| share.name.chars().count())
        .max()
        .unwrap_or(0);
    for share in &usage.breakdown.shares {
        out.push_str(&format!(
            "  {:name_width$}  {:>7} kWh  ({:.1}%)\n",
            share.name,
            trim_float(share.kwh),
            share.percentage,
        ));
    }
    out.push_str(&format!(
        "  {} · {}\n",
        usage.center_primary, usage.center_secondary
    ));

    out
}

fn score_bar(label: &str, label_width: usize, score: u32) -> String {
    let filled = (score as usize * BAR_WIDTH) / 100;
    format!(
        "  {:label_width$}  {}{} {}\n",
        label,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        score,
    )
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardInputs;
    use std::str::FromStr;
    use suriya_core::ProvinceId;
    use suriya_i18n::{Language, Localizer};
    use suriya_insight::EfficiencyTier;

    fn bangkok_dashboard() -> ResultsDashboard {
        let inputs = DashboardInputs {
            province: Some(ProvinceId::from_str("bkk").unwrap()),
            tier: EfficiencyTier::Good,
            ..Default::default()
        };
        ResultsDashboard::build(&inputs, &Localizer::new(Language::En))
    }

    #[test]
    fn test_text_contains_score_and_bars() {
        let text = render_text(&bangkok_dashboard());
        assert!(text.contains("Solar efficiency score: 82 / 100"));
        assert!(text.contains("Bangkok province"));
        assert!(text.contains("National average"));
        assert!(text.contains("68"));
    }

    #[test]
    fn test_text_percentages_one_decimal() {
        let text = render_text(&bangkok_dashboard());
        // Sample data: AC 120 of 280 total.
        assert!(text.contains("(42.9%)"), "{text}");
        assert!(text.contains("280 kWh / month"));
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&bangkok_dashboard()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["efficiency"]["overall_score"], 82);
        assert_eq!(value["efficiency"]["national_average"], 68);
        assert_eq!(value["usage"]["shares"][0]["name"], "AC");
        assert_eq!(value["language"], "en");
    }

    #[test]
    fn test_bar_never_overflows() {
        for score in [0u32, 45, 68, 95, 100] {
            let bar = score_bar("x", 1, score);
            let filled = bar.matches('█').count();
            let empty = bar.matches('░').count();
            assert_eq!(filled + empty, BAR_WIDTH);
        }
    }
}
