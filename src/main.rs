use clap::Parser;
use taxplan::application::matching::MatchOptions;
use taxplan::application::normalize::RawAnswers;
use taxplan::cli::commands::{Cli, Commands, SummaryFormat};
use taxplan::config::Config;
use taxplan::domain::values::strategy_category::StrategyCategory;
use taxplan::TaxPlan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let plan = match TaxPlan::from_config(&config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error initializing taxplan: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&plan, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(plan: &TaxPlan, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Profile { json } => {
            let profile = plan.normalize(&parse_answers(&json)?);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Match {
            json,
            scores,
            limit,
            category,
        } => {
            let options = MatchOptions {
                include_scores: scores,
                category: parse_category(category)?,
                limit,
            };
            let report = plan.match_answers(&parse_answers(&json)?, &options)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Summary { json, top, format } => {
            let summary = plan.summary(&parse_answers(&json)?, top)?;
            match format {
                SummaryFormat::Text => print!("{}", summary.render_text()),
                SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
        Commands::Catalog { category } => {
            let entries = plan.catalog(parse_category(category)?);
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Show { id } => {
            let entry = plan.strategy(&id)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
    }
    Ok(())
}

fn parse_answers(json: &str) -> Result<RawAnswers, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid answers JSON: {e}"))
}

fn parse_category(category: Option<String>) -> Result<Option<StrategyCategory>, String> {
    category.map(|c| c.parse()).transpose()
}
