//! Orchestrates a full scenario analysis against a finance store.

use std::sync::Arc;

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, error, info};

use finsight_domain::{
    common::total_amount, ForecastInput, ScenarioDefinition, ScenarioParameters, ScenarioResult,
};

use crate::{
    aggregation_service::{AggregationService, DEFAULT_HISTORY_MONTHS},
    catalog::predefined_scenarios,
    error::AnalysisError,
    projection_service::ProjectionService,
    risk_service::RiskService,
    storage::FinanceStore,
    time::{Clock, SystemClock},
    validation::validate_parameters,
    CoreError,
};

pub const FORECAST_TYPE: &str = "scenario";
pub const FORECAST_CATEGORY: &str = "balance";
pub const DAYS_PER_PROJECTED_MONTH: i64 = 30;

/// Tunables for an analysis run. Defaults match the product's forecast conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub history_months: u32,
    pub confidence_interval: u8,
    /// Relative width of the forecast band around the predicted value.
    pub confidence_band: Decimal,
    pub currency: String,
    pub max_months_to_project: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            history_months: DEFAULT_HISTORY_MONTHS,
            confidence_interval: 85,
            confidence_band: dec!(0.15),
            currency: "TRY".into(),
            max_months_to_project: 120,
        }
    }
}

/// Lower-cases the name and joins whitespace-separated words with `_`.
///
/// Leading and trailing whitespace is dropped rather than turned into `_`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub struct ScenarioService {
    store: Arc<dyn FinanceStore>,
    clock: Arc<dyn Clock>,
    settings: AnalysisSettings,
}

impl ScenarioService {
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn FinanceStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            settings: AnalysisSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Runs the named scenario and persists its forecast.
    ///
    /// Parameters are validated first. Any later failure is logged and reported as
    /// [`CoreError::AnalysisFailed`]; no partial result is returned.
    pub async fn analyze(
        &self,
        scenario_name: &str,
        parameters: ScenarioParameters,
    ) -> Result<ScenarioResult, CoreError> {
        validate_parameters(&parameters, self.settings.max_months_to_project)?;
        info!(
            scenario = scenario_name,
            months = parameters.months_to_project,
            "running scenario analysis"
        );
        match self.run(scenario_name, parameters).await {
            Ok(result) => {
                info!(
                    scenario = scenario_name,
                    risk = %result.risk_assessment.risk_level,
                    projected_balance = %result.projected_balance,
                    "scenario analysis finished"
                );
                Ok(result)
            }
            Err(source) => {
                error!(
                    scenario = scenario_name,
                    parameters = ?parameters,
                    error = %source,
                    "scenario analysis failed"
                );
                Err(CoreError::AnalysisFailed {
                    scenario: scenario_name.to_string(),
                    source,
                })
            }
        }
    }

    pub async fn analyze_definition(
        &self,
        definition: &ScenarioDefinition,
    ) -> Result<ScenarioResult, CoreError> {
        self.analyze(&definition.name, definition.parameters).await
    }

    /// Runs every catalog scenario in order. Stops at the first failure.
    pub async fn analyze_catalog(&self) -> Result<Vec<ScenarioResult>, CoreError> {
        let mut results = Vec::new();
        for definition in predefined_scenarios() {
            results.push(self.analyze_definition(&definition).await?);
        }
        Ok(results)
    }

    async fn run(
        &self,
        scenario_name: &str,
        parameters: ScenarioParameters,
    ) -> Result<ScenarioResult, AnalysisError> {
        let (accounts, transactions, fixed_expenses, credits) = tokio::try_join!(
            self.store.accounts(),
            self.store.transactions(),
            self.store.fixed_expenses(),
            self.store.credits(),
        )?;

        let current_balance =
            total_amount(&accounts).ok_or(AnalysisError::Overflow("current balance"))?;
        let averages = AggregationService::trailing_averages(
            &transactions,
            self.clock.today(),
            self.settings.history_months,
        )?;
        debug!(
            avg_income = %averages.avg_monthly_income,
            avg_expenses = %averages.avg_monthly_expenses,
            months = averages.total_months,
            "historical averages computed"
        );

        let monthly_projections =
            ProjectionService::project(&averages, &fixed_expenses, &credits, &parameters)?;
        let projected_balance =
            ProjectionService::projected_balance(current_balance, &monthly_projections)?;
        let risk_assessment =
            RiskService::assess(&parameters, &monthly_projections, projected_balance);

        let input = self.forecast_input(scenario_name, &parameters, projected_balance)?;
        let forecast = self.store.create_forecast(input).await?;

        Ok(ScenarioResult {
            scenario: scenario_name.to_string(),
            parameters,
            projected_balance,
            monthly_projections,
            risk_assessment,
            forecast,
        })
    }

    /// Builds the forecast record persisted for a scenario run.
    pub fn forecast_input(
        &self,
        scenario_name: &str,
        parameters: &ScenarioParameters,
        projected_balance: Decimal,
    ) -> Result<ForecastInput, AnalysisError> {
        let now = self.clock.now();
        let horizon_days = i64::from(parameters.months_to_project) * DAYS_PER_PROJECTED_MONTH;
        let target_date = now
            .checked_add_signed(Duration::days(horizon_days))
            .ok_or(AnalysisError::Overflow("forecast target date"))?;
        let band = self.settings.confidence_band;
        let lower_bound = Decimal::ONE
            .checked_sub(band)
            .and_then(|factor| projected_balance.checked_mul(factor))
            .ok_or(AnalysisError::Overflow("forecast lower bound"))?;
        let upper_bound = Decimal::ONE
            .checked_add(band)
            .and_then(|factor| projected_balance.checked_mul(factor))
            .ok_or(AnalysisError::Overflow("forecast upper bound"))?;
        Ok(ForecastInput {
            title: scenario_name.to_string(),
            forecast_type: FORECAST_TYPE.to_string(),
            scenario: slugify(scenario_name),
            forecast_date: now,
            target_date,
            predicted_value: projected_balance,
            confidence_interval: self.settings.confidence_interval,
            lower_bound,
            upper_bound,
            currency: self.settings.currency.clone(),
            category: FORECAST_CATEGORY.to_string(),
            parameters: serde_json::to_string(parameters)?,
        })
    }
}
