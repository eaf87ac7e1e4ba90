//! # `suriya results`
//!
//! Renders the results dashboard from ad-hoc inputs instead of a live
//! submission: a province, a tier, optional usage data, and an optional
//! metered monthly total.

use std::fs;
use std::path::PathBuf;
use std::thread;

use anyhow::Context;

use suriya_core::ProvinceId;
use suriya_i18n::{Localizer, MessageKey};
use suriya_insight::{EfficiencyTier, UsageDatum};
use suriya_report::{
    clamp_loading_delay, render_json, render_text, DashboardInputs, ResultsDashboard,
    DEFAULT_LOADING_DELAY,
};

use crate::OutputFormat;

/// Arguments for the `results` subcommand.
#[derive(clap::Args, Debug)]
pub struct ResultsArgs {
    /// Province id (e.g. bkk). Omit for the national fallback figures.
    #[arg(long)]
    pub province: Option<ProvinceId>,

    /// Efficiency tier biasing the score (good, neutral, poor).
    #[arg(long, default_value = "neutral")]
    pub tier: EfficiencyTier,

    /// JSON file with usage data: `[{"name": "AC", "kWh": 120}, ...]`.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Metered monthly total in kWh, overriding the summed denominator.
    #[arg(long)]
    pub month_kwh: Option<f64>,

    /// Monthly bill in baht for the chart center.
    #[arg(long)]
    pub bill: Option<u32>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip the cosmetic loading pause.
    #[arg(long)]
    pub skip_loading: bool,
}

pub fn run(args: ResultsArgs, localizer: &Localizer) -> anyhow::Result<()> {
    let usage_data = match &args.data {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading usage data {}", path.display()))?;
            serde_json::from_str::<Vec<UsageDatum>>(&raw)
                .with_context(|| format!("parsing usage data {}", path.display()))?
        }
        None => Vec::new(),
    };

    let inputs = DashboardInputs {
        province: args.province,
        tier: args.tier,
        usage_data,
        month_kwh: args.month_kwh,
        bill_baht: args.bill,
    };

    if !args.skip_loading {
        println!("{}", localizer.t(MessageKey::LoadingText));
        thread::sleep(clamp_loading_delay(DEFAULT_LOADING_DELAY));
    }

    let dashboard = ResultsDashboard::build(&inputs, localizer);
    match args.format {
        OutputFormat::Text => print!("{}", render_text(&dashboard)),
        OutputFormat::Json => println!("{}", render_json(&dashboard)?),
    }
    Ok(())
}
