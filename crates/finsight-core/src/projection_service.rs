//! Month-by-month cash-flow projection under scenario multipliers.

use rust_decimal::Decimal;

use finsight_domain::{
    common::total_amount, Credit, FixedExpense, MonthlyAverages, MonthlyProjection,
    ScenarioParameters,
};

use crate::error::AnalysisError;

fn scaled(value: Decimal, multiplier: Decimal, what: &'static str) -> Result<Decimal, AnalysisError> {
    value
        .checked_mul(multiplier)
        .ok_or(AnalysisError::Overflow(what))
}

pub struct ProjectionService;

impl ProjectionService {
    /// Sum of active monthly fixed expenses. Other cadences are excluded.
    pub fn monthly_fixed_expenses(fixed_expenses: &[FixedExpense]) -> Result<Decimal, AnalysisError> {
        total_amount(fixed_expenses.iter().filter(|expense| expense.counts_monthly()))
            .ok_or(AnalysisError::Overflow("fixed expenses"))
    }

    /// Sum of minimum payments on credits that are still active.
    pub fn monthly_credit_payments(credits: &[Credit]) -> Result<Decimal, AnalysisError> {
        total_amount(credits.iter().filter(|credit| credit.is_payable()))
            .ok_or(AnalysisError::Overflow("credit payments"))
    }

    /// Produces `months_to_project` projections, 1-indexed and in month order.
    ///
    /// Fails with [`AnalysisError::Overflow`] when a figure leaves the decimal range.
    pub fn project(
        averages: &MonthlyAverages,
        fixed_expenses: &[FixedExpense],
        credits: &[Credit],
        parameters: &ScenarioParameters,
    ) -> Result<Vec<MonthlyProjection>, AnalysisError> {
        let income = scaled(
            averages.avg_monthly_income,
            parameters.income_multiplier,
            "projected income",
        )?;
        let expenses = scaled(
            averages.avg_monthly_expenses,
            parameters.expense_multiplier,
            "projected expenses",
        )?;
        let fixed = scaled(
            Self::monthly_fixed_expenses(fixed_expenses)?,
            parameters.fixed_expense_multiplier,
            "projected fixed expenses",
        )?;
        let credit_payments = scaled(
            Self::monthly_credit_payments(credits)?,
            parameters.credit_payment_multiplier,
            "projected credit payments",
        )?;
        let net_cash_flow = income
            .checked_sub(expenses)
            .and_then(|net| net.checked_sub(fixed))
            .and_then(|net| net.checked_sub(credit_payments))
            .ok_or(AnalysisError::Overflow("net cash flow"))?;

        let mut cumulative = Decimal::ZERO;
        (1..=parameters.months_to_project)
            .map(|month| {
                cumulative = cumulative
                    .checked_add(net_cash_flow)
                    .ok_or(AnalysisError::Overflow("cumulative balance"))?;
                Ok(MonthlyProjection {
                    month,
                    income,
                    expenses,
                    fixed_expenses: fixed,
                    credit_payments,
                    net_cash_flow,
                    cumulative_balance: cumulative,
                })
            })
            .collect()
    }

    /// Current balance plus every projected month's net cash flow.
    pub fn projected_balance(
        current_balance: Decimal,
        projections: &[MonthlyProjection],
    ) -> Result<Decimal, AnalysisError> {
        projections
            .iter()
            .try_fold(current_balance, |total, month| {
                total.checked_add(month.net_cash_flow)
            })
            .ok_or(AnalysisError::Overflow("projected balance"))
    }
}
