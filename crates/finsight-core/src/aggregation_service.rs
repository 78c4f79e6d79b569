//! Reduces transaction history into average monthly income and expenses.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use finsight_domain::{MonthlyAverages, Transaction, TransactionKind};

use crate::error::AnalysisError;

pub const DEFAULT_HISTORY_MONTHS: u32 = 6;

#[derive(Debug, Default, Clone, Copy)]
struct MonthTotals {
    income: Decimal,
    expenses: Decimal,
}

pub struct AggregationService;

impl AggregationService {
    /// First date included in a trailing window of `months` calendar months ending at `today`.
    pub fn window_start(today: NaiveDate, months: u32) -> NaiveDate {
        today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Averages the transactions dated on or after `since`, grouped by calendar month.
    ///
    /// An empty window yields zero averages rather than an error.
    pub fn monthly_averages(
        transactions: &[Transaction],
        since: NaiveDate,
    ) -> Result<MonthlyAverages, AnalysisError> {
        let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.date >= since) {
            let totals = months
                .entry((txn.date.year(), txn.date.month()))
                .or_default();
            let slot = match txn.kind {
                TransactionKind::Income => &mut totals.income,
                TransactionKind::Expense => &mut totals.expenses,
            };
            *slot = slot
                .checked_add(txn.amount)
                .ok_or(AnalysisError::Overflow("monthly transaction totals"))?;
        }

        let total_months = months.len();
        if total_months == 0 {
            return Ok(MonthlyAverages::default());
        }
        let count = Decimal::from(total_months);
        let income = checked_sum(months.values().map(|totals| totals.income), "income history")?;
        let expenses =
            checked_sum(months.values().map(|totals| totals.expenses), "expense history")?;
        Ok(MonthlyAverages {
            avg_monthly_income: income / count,
            avg_monthly_expenses: expenses / count,
            total_months,
        })
    }

    /// Convenience wrapper combining [`Self::window_start`] and [`Self::monthly_averages`].
    pub fn trailing_averages(
        transactions: &[Transaction],
        today: NaiveDate,
        months: u32,
    ) -> Result<MonthlyAverages, AnalysisError> {
        Self::monthly_averages(transactions, Self::window_start(today, months))
    }
}

fn checked_sum(
    mut values: impl Iterator<Item = Decimal>,
    what: &'static str,
) -> Result<Decimal, AnalysisError> {
    values
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(AnalysisError::Overflow(what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight_domain::Account;
    use rust_decimal_macros::dec;

    fn account() -> Account {
        Account::new("Checking", Decimal::ZERO)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn averages_group_by_calendar_month() {
        let id = account().id;
        let transactions = vec![
            Transaction::income(id, dec!(10000), date(2024, 4, 1)),
            Transaction::expense(id, dec!(4000), date(2024, 4, 10)),
            Transaction::expense(id, dec!(2000), date(2024, 4, 20)),
            Transaction::income(id, dec!(8000), date(2024, 5, 1)),
            Transaction::expense(id, dec!(5000), date(2024, 5, 3)),
        ];
        let averages = AggregationService::monthly_averages(&transactions, date(2024, 1, 1))
                .expect("averages");
        assert_eq!(averages.total_months, 2);
        assert_eq!(averages.avg_monthly_income, dec!(9000));
        assert_eq!(averages.avg_monthly_expenses, dec!(5500));
    }

    #[test]
    fn months_without_income_still_count() {
        let id = account().id;
        let transactions = vec![
            Transaction::income(id, dec!(6000), date(2024, 4, 1)),
            Transaction::expense(id, dec!(3000), date(2024, 5, 1)),
        ];
        let averages = AggregationService::monthly_averages(&transactions, date(2024, 1, 1))
                .expect("averages");
        assert_eq!(averages.total_months, 2);
        assert_eq!(averages.avg_monthly_income, dec!(3000));
        assert_eq!(averages.avg_monthly_expenses, dec!(1500));
    }

    #[test]
    fn transactions_before_window_are_ignored() {
        let id = account().id;
        let today = date(2024, 7, 15);
        let transactions = vec![
            Transaction::income(id, dec!(99999), date(2024, 1, 14)),
            Transaction::income(id, dec!(5000), date(2024, 1, 15)),
        ];
        let averages =
            AggregationService::trailing_averages(&transactions, today, 6).expect("averages");
        assert_eq!(averages.total_months, 1);
        assert_eq!(averages.avg_monthly_income, dec!(5000));
    }

    #[test]
    fn empty_window_yields_zero_averages() {
        let averages =
            AggregationService::trailing_averages(&[], date(2024, 7, 15), 6).expect("averages");
        assert_eq!(averages, MonthlyAverages::default());
        assert_eq!(averages.avg_monthly_income, Decimal::ZERO);
        assert_eq!(averages.total_months, 0);
    }

    #[test]
    fn overflowing_history_is_an_error() {
        let id = account().id;
        let transactions = vec![
            Transaction::income(id, Decimal::MAX, date(2024, 4, 1)),
            Transaction::income(id, Decimal::MAX, date(2024, 4, 2)),
        ];
        let err = AggregationService::monthly_averages(&transactions, date(2024, 1, 1))
            .expect_err("overflow");
        assert!(matches!(err, AnalysisError::Overflow(_)));
    }

    #[test]
    fn window_start_clamps_to_month_end() {
        assert_eq!(
            AggregationService::window_start(date(2024, 8, 31), 6),
            date(2024, 2, 29)
        );
    }
}
