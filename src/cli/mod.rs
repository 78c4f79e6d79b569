//! Command-line front end for running scenario analyses against a JSON snapshot.

pub mod output;

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use finsight_config::{Config, ConfigManager};
use finsight_core::{find_scenario, predefined_scenarios, CoreError, ScenarioService};
use finsight_domain::{FinanceSnapshot, ScenarioParameters};
use finsight_storage_json::JsonStore;

use crate::{
    errors::{AppError, Result},
    settings::analysis_settings,
    utils::build_info,
};
use output::{MessageKind, OutputPreferences};

pub const CUSTOM_SCENARIO_NAME: &str = "Özel Senaryo";

#[derive(Debug, Parser)]
#[command(name = "finsight", version)]
#[command(about = "What-if cash-flow projection and risk scoring")]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub plain: bool,
    /// Configuration file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Snapshot file holding accounts, transactions, fixed expenses, and credits.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the predefined scenarios.
    Scenarios,
    /// Run one scenario and store its forecast.
    Analyze(AnalyzeArgs),
    /// Run every predefined scenario.
    Batch,
    /// Create an empty snapshot file.
    Init,
    /// Show build information.
    Version,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Predefined scenario key or name to start from.
    #[arg(long)]
    pub scenario: Option<String>,
    /// Title stored with the forecast.
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub income: Option<Decimal>,
    #[arg(long)]
    pub expense: Option<Decimal>,
    #[arg(long)]
    pub fixed: Option<Decimal>,
    #[arg(long)]
    pub credit: Option<Decimal>,
    #[arg(long)]
    pub months: Option<u32>,
}

impl AnalyzeArgs {
    /// Resolves the scenario title and parameters, applying overrides on top of
    /// the selected catalog entry or the baseline.
    pub fn resolve(&self) -> Result<(String, ScenarioParameters)> {
        let (mut name, mut params) = match &self.scenario {
            Some(key) => {
                let definition = find_scenario(key)
                    .ok_or_else(|| CoreError::ScenarioNotFound(key.clone()))?;
                (definition.name, definition.parameters)
            }
            None => (CUSTOM_SCENARIO_NAME.to_string(), ScenarioParameters::default()),
        };
        if let Some(custom) = &self.name {
            let trimmed = custom.trim();
            if trimmed.is_empty() {
                return Err(AppError::InvalidInput("scenario name must not be empty".into()));
            }
            name = trimmed.to_string();
        }
        if let Some(value) = self.income {
            params.income_multiplier = value;
        }
        if let Some(value) = self.expense {
            params.expense_multiplier = value;
        }
        if let Some(value) = self.fixed {
            params.fixed_expense_multiplier = value;
        }
        if let Some(value) = self.credit {
            params.credit_payment_multiplier = value;
        }
        if let Some(months) = self.months {
            params.months_to_project = months;
        }
        Ok((name, params))
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    Ok(manager.load()?)
}

fn store_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.store
        .clone()
        .unwrap_or_else(|| config.resolve_default_store())
}

fn open_service(cli: &Cli, config: &Config) -> Result<ScenarioService> {
    let path = store_path(cli, config);
    if !path.exists() {
        return Err(AppError::InvalidInput(format!(
            "snapshot file not found: {} (run `finsight init --store <file>` first)",
            path.display()
        )));
    }
    let store = Arc::new(JsonStore::new(path));
    Ok(ScenarioService::new(store).with_settings(analysis_settings(config)))
}

/// Executes the parsed command and returns the text to print on stdout.
pub async fn execute(cli: Cli) -> Result<String> {
    output::apply_preferences(OutputPreferences { plain: cli.plain });
    let config = load_config(&cli)?;

    match &cli.command {
        Command::Scenarios => {
            let scenarios = predefined_scenarios();
            if cli.json {
                Ok(serde_json::to_string_pretty(&scenarios)?)
            } else {
                Ok(output::render_catalog(&scenarios))
            }
        }
        Command::Analyze(args) => {
            let (name, params) = args.resolve()?;
            let service = open_service(&cli, &config)?;
            let result = service.analyze(&name, params).await?;
            if cli.json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else {
                Ok(output::render_result(&result))
            }
        }
        Command::Batch => {
            let service = open_service(&cli, &config)?;
            let results = service.analyze_catalog().await?;
            if cli.json {
                Ok(serde_json::to_string_pretty(&results)?)
            } else {
                Ok(output::render_batch(&results))
            }
        }
        Command::Init => {
            let path = store_path(&cli, &config);
            if path.exists() {
                return Err(AppError::InvalidInput(format!(
                    "{} already exists",
                    path.display()
                )));
            }
            JsonStore::create(&path, &FinanceSnapshot::default()).await?;
            Ok(output::format_message(
                MessageKind::Success,
                format!("created {}", path.display()),
            ))
        }
        Command::Version => {
            let info = build_info::current();
            if cli.json {
                Ok(serde_json::to_string_pretty(&info)?)
            } else {
                Ok(info.summary())
            }
        }
    }
}

/// Parses arguments from the environment, runs the command, and prints the outcome.
pub async fn run_cli() -> i32 {
    let cli = Cli::parse();
    match execute(cli).await {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("{}", output::format_message(MessageKind::Error, &err));
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn analyze_args() -> AnalyzeArgs {
        AnalyzeArgs {
            scenario: None,
            name: None,
            income: None,
            expense: None,
            fixed: None,
            credit: None,
            months: None,
        }
    }

    #[test]
    fn custom_scenario_starts_from_baseline() {
        let (name, params) = analyze_args().resolve().expect("resolve");
        assert_eq!(name, CUSTOM_SCENARIO_NAME);
        assert_eq!(params, ScenarioParameters::default());
    }

    #[test]
    fn overrides_apply_on_top_of_catalog_entry() {
        let args = AnalyzeArgs {
            scenario: Some("worst_case".into()),
            months: Some(6),
            credit: Some(dec!(1.5)),
            ..analyze_args()
        };
        let (name, params) = args.resolve().expect("resolve");
        assert_eq!(name, "En Kötü Senaryo");
        assert_eq!(params.income_multiplier, dec!(0.8));
        assert_eq!(params.credit_payment_multiplier, dec!(1.5));
        assert_eq!(params.months_to_project, 6);
    }

    #[test]
    fn unknown_catalog_key_is_reported() {
        let args = AnalyzeArgs {
            scenario: Some("nope".into()),
            ..analyze_args()
        };
        let err = args.resolve().expect_err("unknown key");
        assert!(matches!(err, AppError::Core(CoreError::ScenarioNotFound(_))));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn cli_parses_decimal_overrides() {
        let cli = Cli::try_parse_from([
            "finsight", "--json", "analyze", "--income", "0.7", "--months", "3",
        ])
        .expect("parse");
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.income, Some(dec!(0.7)));
                assert_eq!(args.months, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(cli.json);
    }
}
