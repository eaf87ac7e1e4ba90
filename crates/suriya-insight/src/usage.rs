//! # Appliance Usage Breakdown
//!
//! Normalizes `{name, kWh}` usage data into percentage-of-total shares for
//! the doughnut chart and its legend. When the caller supplies no data (the
//! survey collects quantities, not meter readings), the fixed sample set
//! stands in.
//!
//! Colors are emitted as the dashboard theme's CSS custom properties; the
//! chart consumer resolves them against its palette.

use serde::{Deserialize, Serialize};

/// Theme color cycle applied to data without an explicit color.
pub const DEFAULT_COLORS: [&str; 8] = [
    "var(--emerald-500)",
    "var(--emerald-400)",
    "var(--emerald-300)",
    "var(--emerald-200)",
    "var(--emerald-100)",
    "var(--emerald-50)",
    "var(--emerald-600)",
    "var(--emerald-700)",
];

/// One appliance's monthly usage, as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDatum {
    /// Display name for the legend.
    pub name: String,
    /// Monthly consumption in kWh. Negative inputs are floored to 0.
    #[serde(rename = "kWh")]
    pub kwh: f64,
    /// Optional explicit slice color; the default cycle fills gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UsageDatum {
    /// A datum with no explicit color.
    pub fn new(name: impl Into<String>, kwh: f64) -> Self {
        Self {
            name: name.into(),
            kwh,
            color: None,
        }
    }
}

/// The fixed sample set used when no usage data is supplied.
pub fn sample_data() -> Vec<UsageDatum> {
    vec![
        UsageDatum::new("AC", 120.0),
        UsageDatum::new("Fridge", 45.0),
        UsageDatum::new("TV", 20.0),
        UsageDatum::new("Laundry", 35.0),
        UsageDatum::new("Heater", 60.0),
    ]
}

/// One resolved chart slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageShare {
    /// Legend name.
    pub name: String,
    /// Monthly consumption in kWh (floored at 0).
    #[serde(rename = "kWh")]
    pub kwh: f64,
    /// Resolved slice color.
    pub color: String,
    /// Share of the total, in percent. 0 when the total is 0.
    pub percentage: f64,
}

/// The normalized breakdown behind the usage chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageBreakdown {
    /// Chart slices in input order.
    pub shares: Vec<UsageShare>,
    /// The denominator used for percentages.
    pub total_kwh: f64,
}

impl UsageBreakdown {
    /// Normalize usage data into percentage shares.
    ///
    /// The denominator is `month_kwh` when supplied and positive, otherwise
    /// the sum of the (floored) kWh values. A zero denominator produces
    /// all-zero shares rather than dividing by zero.
    pub fn derive(data: &[UsageDatum], month_kwh: Option<f64>) -> Self {
        let source: Vec<UsageDatum> = if data.is_empty() {
            sample_data()
        } else {
            data.to_vec()
        };

        let resolved: Vec<(String, f64, String)> = source
            .into_iter()
            .enumerate()
            .map(|(index, datum)| {
                let color = datum
                    .color
                    .unwrap_or_else(|| DEFAULT_COLORS[index % DEFAULT_COLORS.len()].to_string());
                (datum.name, datum.kwh.max(0.0), color)
            })
            .collect();

        let sum: f64 = resolved.iter().map(|(_, kwh, _)| kwh).sum();
        let total_kwh = match month_kwh {
            Some(total) if total > 0.0 => total,
            _ => sum,
        };

        let shares = resolved
            .into_iter()
            .map(|(name, kwh, color)| UsageShare {
                name,
                kwh,
                color,
                percentage: if total_kwh > 0.0 {
                    (kwh / total_kwh) * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Self { shares, total_kwh }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sample_set() {
        let breakdown = UsageBreakdown::derive(&[], None);
        assert_eq!(breakdown.shares.len(), 5);
        assert_eq!(breakdown.shares[0].name, "AC");
        assert_eq!(breakdown.total_kwh, 280.0);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let breakdown = UsageBreakdown::derive(&[], None);
        let sum: f64 = breakdown.shares.iter().map(|share| share.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_month_kwh_overrides_denominator() {
        let data = vec![UsageDatum::new("AC", 50.0)];
        let breakdown = UsageBreakdown::derive(&data, Some(200.0));
        assert_eq!(breakdown.total_kwh, 200.0);
        assert!((breakdown.shares[0].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_nonpositive_month_kwh_ignored() {
        let data = vec![UsageDatum::new("AC", 50.0)];
        let breakdown = UsageBreakdown::derive(&data, Some(0.0));
        assert_eq!(breakdown.total_kwh, 50.0);
        assert!((breakdown.shares[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let data = vec![UsageDatum::new("AC", 0.0), UsageDatum::new("TV", 0.0)];
        let breakdown = UsageBreakdown::derive(&data, None);
        assert_eq!(breakdown.total_kwh, 0.0);
        assert!(breakdown.shares.iter().all(|share| share.percentage == 0.0));
    }

    #[test]
    fn test_negative_kwh_floored() {
        let data = vec![UsageDatum::new("AC", -10.0), UsageDatum::new("TV", 30.0)];
        let breakdown = UsageBreakdown::derive(&data, None);
        assert_eq!(breakdown.shares[0].kwh, 0.0);
        assert_eq!(breakdown.total_kwh, 30.0);
    }

    #[test]
    fn test_color_cycle_and_override() {
        let mut data: Vec<UsageDatum> = (0..9)
            .map(|index| UsageDatum::new(format!("slice {index}"), 1.0))
            .collect();
        data[1].color = Some("#123456".to_string());

        let breakdown = UsageBreakdown::derive(&data, None);
        assert_eq!(breakdown.shares[0].color, DEFAULT_COLORS[0]);
        assert_eq!(breakdown.shares[1].color, "#123456");
        // Ninth slice wraps back to the first color.
        assert_eq!(breakdown.shares[8].color, DEFAULT_COLORS[0]);
    }

    #[test]
    fn test_serde_kwh_field_name() {
        let json = serde_json::to_value(UsageDatum::new("AC", 120.0)).unwrap();
        assert_eq!(json["kWh"], 120.0);
        assert!(json.get("color").is_none());
    }
}
