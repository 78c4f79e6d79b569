//! Scenario parameters, monthly projections, and analysis results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{forecast::Forecast, risk::RiskAssessment};

pub const DEFAULT_MONTHS_TO_PROJECT: u32 = 12;

/// Multipliers describing a hypothetical deviation from historical behaviour.
///
/// A multiplier of `1` leaves the baseline unchanged, values below `1` reduce it
/// and values above `1` increase it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioParameters {
    pub income_multiplier: Decimal,
    pub expense_multiplier: Decimal,
    pub fixed_expense_multiplier: Decimal,
    pub credit_payment_multiplier: Decimal,
    pub months_to_project: u32,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::baseline(DEFAULT_MONTHS_TO_PROJECT)
    }
}

impl ScenarioParameters {
    /// Every multiplier set to one.
    pub fn baseline(months_to_project: u32) -> Self {
        Self {
            income_multiplier: Decimal::ONE,
            expense_multiplier: Decimal::ONE,
            fixed_expense_multiplier: Decimal::ONE,
            credit_payment_multiplier: Decimal::ONE,
            months_to_project,
        }
    }

    pub fn new(
        income_multiplier: Decimal,
        expense_multiplier: Decimal,
        fixed_expense_multiplier: Decimal,
        credit_payment_multiplier: Decimal,
        months_to_project: u32,
    ) -> Self {
        Self {
            income_multiplier,
            expense_multiplier,
            fixed_expense_multiplier,
            credit_payment_multiplier,
            months_to_project,
        }
    }

    pub fn with_income(mut self, multiplier: Decimal) -> Self {
        self.income_multiplier = multiplier;
        self
    }

    pub fn with_expenses(mut self, multiplier: Decimal) -> Self {
        self.expense_multiplier = multiplier;
        self
    }

    pub fn with_fixed_expenses(mut self, multiplier: Decimal) -> Self {
        self.fixed_expense_multiplier = multiplier;
        self
    }

    pub fn with_credit_payments(mut self, multiplier: Decimal) -> Self {
        self.credit_payment_multiplier = multiplier;
        self
    }

    /// Named multipliers, in declaration order.
    pub fn multipliers(&self) -> [(&'static str, Decimal); 4] {
        [
            ("income_multiplier", self.income_multiplier),
            ("expense_multiplier", self.expense_multiplier),
            ("fixed_expense_multiplier", self.fixed_expense_multiplier),
            ("credit_payment_multiplier", self.credit_payment_multiplier),
        ]
    }
}

/// Historical baseline derived from the trailing transaction window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MonthlyAverages {
    pub avg_monthly_income: Decimal,
    pub avg_monthly_expenses: Decimal,
    pub total_months: usize,
}

/// Projected figures for one month of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyProjection {
    /// 1-based month index.
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub fixed_expenses: Decimal,
    pub credit_payments: Decimal,
    pub net_cash_flow: Decimal,
    /// Running sum of net cash flow; excludes the starting balance.
    pub cumulative_balance: Decimal,
}

/// A named, pre-parameterised scenario from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioDefinition {
    pub key: String,
    pub name: String,
    pub description: String,
    pub parameters: ScenarioParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioResult {
    pub scenario: String,
    pub parameters: ScenarioParameters,
    pub projected_balance: Decimal,
    pub monthly_projections: Vec<MonthlyProjection>,
    pub risk_assessment: RiskAssessment,
    pub forecast: Forecast,
}

impl ScenarioResult {
    /// Sum of every projected month's net cash flow, read off the last cumulative balance.
    pub fn total_net_cash_flow(&self) -> Decimal {
        self.monthly_projections
            .last()
            .map_or(Decimal::ZERO, |month| month.cumulative_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn baseline_parameters_leave_figures_unchanged() {
        let params = ScenarioParameters::baseline(3);
        assert!(params
            .multipliers()
            .iter()
            .all(|(_, value)| *value == Decimal::ONE));
        assert_eq!(params.months_to_project, 3);
    }

    #[test]
    fn builders_override_single_multiplier() {
        let params = ScenarioParameters::default()
            .with_income(dec!(0.9))
            .with_credit_payments(dec!(1.25));
        assert_eq!(params.income_multiplier, dec!(0.9));
        assert_eq!(params.expense_multiplier, Decimal::ONE);
        assert_eq!(params.credit_payment_multiplier, dec!(1.25));
        assert_eq!(params.months_to_project, DEFAULT_MONTHS_TO_PROJECT);
    }

    #[test]
    fn parameters_accept_plain_json_numbers() {
        let json = r#"{
            "income_multiplier": 0.7,
            "expense_multiplier": 1,
            "fixed_expense_multiplier": "1.1",
            "credit_payment_multiplier": 1.3,
            "months_to_project": 6
        }"#;
        let params: ScenarioParameters = serde_json::from_str(json).expect("deserialize");
        assert_eq!(params.income_multiplier, dec!(0.7));
        assert_eq!(params.fixed_expense_multiplier, dec!(1.1));
        assert_eq!(params.months_to_project, 6);
    }
}
