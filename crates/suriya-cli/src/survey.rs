//! # `suriya survey`
//!
//! Runs the wizard and renders the results for the submission. Interactive
//! by default; `--answers` loads a response snapshot from JSON instead,
//! which is what scripted runs and tests use.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::thread;

use anyhow::Context;

use suriya_core::{Appliance, BillAmount, Province, ProvinceId, ResidenceType};
use suriya_i18n::{Localizer, MessageKey};
use suriya_report::{
    clamp_loading_delay, render_json, render_text, DashboardInputs, ResultsDashboard,
    DEFAULT_LOADING_DELAY,
};
use suriya_survey::{
    appliance_label_key, appliance_summary, format_baht, household_helper, household_summary,
    residence_description_key, residence_label_key, selected_province_name, SurveyResponse,
    Wizard, WizardStep, STEP_COUNT,
};

use crate::OutputFormat;

/// Arguments for the `survey` subcommand.
#[derive(clap::Args, Debug)]
pub struct SurveyArgs {
    /// Answers file (a JSON response snapshot); skips the interactive wizard.
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Output format for the results dashboard.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip the cosmetic loading pause before the results render.
    #[arg(long)]
    pub skip_loading: bool,

    /// Also print the submitted snapshot as JSON.
    #[arg(long)]
    pub show_snapshot: bool,
}

/// What the respondent chose at a step's navigation prompt.
enum Navigation {
    Forward,
    Back,
    Quit,
}

pub fn run(args: SurveyArgs, localizer: &Localizer) -> anyhow::Result<()> {
    let mut wizard = Wizard::new();

    match &args.answers {
        Some(path) => {
            *wizard.response_mut() = load_answers(path)?;
            while !wizard.is_last_step() {
                wizard.go_next();
            }
        }
        None => {
            if !run_interactive(&mut wizard, localizer)? {
                // Quit before submitting: state is simply discarded.
                return Ok(());
            }
        }
    }

    let submission = wizard.submit()?;
    tracing::info!(
        session = %submission.session,
        reference = %submission.reference,
        "survey submitted"
    );
    println!("refId: {}", submission.reference_id());

    if args.show_snapshot {
        println!("{}", serde_json::to_string_pretty(&submission.response)?);
    }

    if !args.skip_loading {
        println!("{}", localizer.t(MessageKey::LoadingText));
        thread::sleep(clamp_loading_delay(DEFAULT_LOADING_DELAY));
    }

    let inputs = DashboardInputs::from_submission(&submission);
    let dashboard = ResultsDashboard::build(&inputs, localizer);
    match args.format {
        OutputFormat::Text => print!("{}", render_text(&dashboard)),
        OutputFormat::Json => println!("{}", render_json(&dashboard)?),
    }
    Ok(())
}

/// Load a response snapshot from a JSON answers file. Out-of-range values
/// clamp on deserialization, same as live edits; a province outside the
/// catalog clears to "not selected".
pub fn load_answers(path: &Path) -> anyhow::Result<SurveyResponse> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading answers file {}", path.display()))?;
    let mut response: SurveyResponse = serde_json::from_str(&raw)
        .with_context(|| format!("parsing answers file {}", path.display()))?;
    if let Some(id) = response.province().cloned() {
        if Province::find(&id).is_none() {
            response.select_province(None);
        }
    }
    Ok(response)
}

/// Drive the wizard on stdin/stdout. Returns false if the respondent quit.
fn run_interactive(wizard: &mut Wizard, localizer: &Localizer) -> anyhow::Result<bool> {
    println!("[{}]", localizer.t(MessageKey::HeroBadge));
    println!("{}", localizer.t(MessageKey::HeroTitle));
    println!("{}\n", localizer.t(MessageKey::HeroSubtitle));

    loop {
        print_step_header(wizard, localizer);
        match wizard.current_step() {
            WizardStep::Bill => edit_bill(wizard, localizer)?,
            WizardStep::Residence => edit_residence(wizard, localizer)?,
            WizardStep::Household => edit_household(wizard, localizer)?,
            WizardStep::Appliances => edit_appliances(wizard, localizer)?,
        }

        match prompt_navigation(wizard, localizer)? {
            Navigation::Quit => return Ok(false),
            Navigation::Back => {
                wizard.go_previous();
            }
            Navigation::Forward => {
                if wizard.is_last_step() {
                    return Ok(true);
                }
                wizard.go_next();
            }
        }
        println!();
    }
}

fn print_step_header(wizard: &Wizard, localizer: &Localizer) {
    let step = wizard.current_step();
    let position = (wizard.step_index() + 1).to_string();
    println!(
        "── {} ──",
        localizer.t_with(
            MessageKey::ProgressLabel,
            &[("current", position.clone()), ("total", STEP_COUNT.to_string())],
        )
    );
    let overview = WizardStep::all()
        .iter()
        .map(|entry| {
            let marker = if *entry == step { "●" } else { "○" };
            format!(
                "{marker} {} ({})",
                localizer.t(entry.title_key()),
                localizer.t(entry.description_key())
            )
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{overview}");
    println!(
        "{}",
        localizer.t_with(step.heading_key(), &[("step", position)])
    );
    println!("{}", localizer.t(step.body_description_key()));
}

fn edit_bill(wizard: &mut Wizard, localizer: &Localizer) -> anyhow::Result<()> {
    let current = wizard.response().monthly_bill().baht();
    println!(
        "{}: {}",
        localizer.t(MessageKey::BillEstimatedSpendLabel),
        format_baht(current)
    );
    let presets = BillAmount::PRESETS
        .iter()
        .map(|amount| format_baht(*amount))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {presets}");
    println!(
        "  {}  |  {} ({})  |  {}",
        format_baht(BillAmount::MIN),
        format_baht(BillAmount::midpoint()),
        localizer.t(MessageKey::BillAverageHomes),
        format_baht(BillAmount::MAX)
    );

    let input = read_line("> ")?;
    if let Ok(amount) = input.parse::<u32>() {
        wizard.response_mut().set_monthly_bill(amount);
    }
    Ok(())
}

fn edit_residence(wizard: &mut Wizard, localizer: &Localizer) -> anyhow::Result<()> {
    println!("{}", localizer.t(MessageKey::ResidenceFormTitle));
    for (position, residence) in ResidenceType::all().iter().enumerate() {
        println!(
            "  {}. {} · {}",
            position + 1,
            localizer.t(residence_label_key(*residence)),
            localizer.t(residence_description_key(*residence))
        );
    }
    let input = read_line("> ")?;
    if let Ok(choice) = input.parse::<usize>() {
        if let Some(residence) = ResidenceType::all().get(choice.wrapping_sub(1)) {
            wizard.response_mut().set_residence(*residence);
        }
    }

    println!(
        "{}: {}",
        localizer.t(MessageKey::ProvinceDropdownLabel),
        selected_province_name(wizard.response(), localizer)
    );
    println!("{}", localizer.t(MessageKey::ProvinceDropdownDescription));
    let input = read_line(&format!("{} > ", localizer.t(MessageKey::ProvincePlaceholder)))?;
    match input.as_str() {
        "" => {}
        "-" => wizard.response_mut().select_province(None),
        raw => match ProvinceId::from_str(raw) {
            Ok(id) => {
                let before = wizard.response().province().cloned();
                wizard.response_mut().select_province(Some(id));
                if wizard.response().province().cloned() == before {
                    println!("{}", localizer.t(MessageKey::ProvinceNoResults));
                }
            }
            Err(_) => println!("{}", localizer.t(MessageKey::ProvinceNoResults)),
        },
    }
    Ok(())
}

fn edit_household(wizard: &mut Wizard, localizer: &Localizer) -> anyhow::Result<()> {
    println!(
        "{}: {}",
        localizer.t(MessageKey::HouseholdSliderLabel),
        household_summary(wizard.response(), localizer)
    );
    println!("{}", household_helper(wizard.response(), localizer));
    println!(
        "  {}",
        localizer.t_with(MessageKey::HouseholdSliderTypical, &[("value", "3".into())])
    );
    let input = read_line("> ")?;
    if let Ok(raw) = input.parse::<f64>() {
        wizard.response_mut().set_occupants(raw);
    }
    Ok(())
}

fn edit_appliances(wizard: &mut Wizard, localizer: &Localizer) -> anyhow::Result<()> {
    for appliance in Appliance::all() {
        let quantity = wizard.response().appliance_quantity(*appliance);
        let status = if quantity.is_active() {
            format!(" [{}]", localizer.t(MessageKey::ApplianceStatusActive))
        } else {
            String::new()
        };
        let input = read_line(&format!(
            "{} · {} {}{} > ",
            localizer.t(appliance_label_key(*appliance)),
            localizer.t(MessageKey::ApplianceQuantityLabel),
            quantity.get(),
            status
        ))?;
        if let Ok(raw) = input.parse::<f64>() {
            wizard.response_mut().set_appliance_quantity(*appliance, raw);
        }
    }

    print_snapshot(wizard, localizer);
    Ok(())
}

fn print_snapshot(wizard: &Wizard, localizer: &Localizer) {
    let response = wizard.response();
    println!(
        "\n{} · {}",
        localizer.t(MessageKey::SummaryBannerTitle),
        localizer.t(MessageKey::SummaryBannerSubtitle)
    );
    println!(
        "  {}: {}",
        localizer.t(MessageKey::SummaryMonthlyBill),
        format_baht(response.monthly_bill().baht())
    );
    println!(
        "  {}: {}",
        localizer.t(MessageKey::SummaryResidence),
        localizer.t(residence_label_key(response.residence()))
    );
    println!(
        "  {}: {}",
        localizer.t(MessageKey::SummaryProvince),
        selected_province_name(response, localizer)
    );
    println!(
        "  {}: {}",
        localizer.t(MessageKey::SummaryHousehold),
        household_summary(response, localizer)
    );
    println!(
        "  {}: {}",
        localizer.t(MessageKey::SummaryAppliances),
        appliance_summary(response, localizer)
    );
    println!("{}", localizer.t(MessageKey::SummaryCta));
}

fn prompt_navigation(wizard: &Wizard, localizer: &Localizer) -> anyhow::Result<Navigation> {
    let forward = if wizard.is_last_step() {
        localizer.t(MessageKey::ButtonSubmit)
    } else {
        localizer.t(MessageKey::ButtonNext)
    };
    let mut hint = format!("[Enter] {forward}");
    if !wizard.is_first_step() {
        hint.push_str(&format!("  ·  b {}", localizer.t(MessageKey::ButtonBack)));
    }
    hint.push_str("  ·  q quit");

    loop {
        match read_line(&format!("{hint} > "))?.as_str() {
            "" => return Ok(Navigation::Forward),
            "b" if !wizard.is_first_step() => return Ok(Navigation::Back),
            "q" => return Ok(Navigation::Quit),
            _ => {}
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
