//! # suriya CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use suriya_i18n::Language;

/// Suriya — solar readiness survey toolkit.
///
/// Runs the household survey wizard, derives the province efficiency and
/// usage-breakdown dashboard, inspects the map asset, and manages the
/// persisted language preference.
#[derive(Parser, Debug)]
#[command(name = "suriya", version, about)]
struct Cli {
    /// Override the UI language for this invocation (en, th).
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the survey wizard and show results for the submission.
    Survey(suriya_cli::survey::SurveyArgs),
    /// Render the results dashboard from ad-hoc inputs.
    Results(suriya_cli::results::ResultsArgs),
    /// Fetch and inspect the province map asset.
    Map(suriya_cli::map::MapArgs),
    /// Show or set the persisted UI language.
    Lang(suriya_cli::lang::LangArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let localizer = suriya_cli::localizer_for(cli.lang);

    match cli.command {
        Commands::Survey(args) => suriya_cli::survey::run(args, &localizer),
        Commands::Results(args) => suriya_cli::results::run(args, &localizer),
        Commands::Map(args) => suriya_cli::map::run(args, &localizer),
        Commands::Lang(args) => suriya_cli::lang::run(args, &localizer),
    }
}
