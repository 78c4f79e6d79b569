#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finsight::domain::{
    Account, Credit, FinanceSnapshot, FixedExpense, Recurrence, Transaction,
};

/// First day of the month `back` months before the current one.
pub fn month_start(back: u32) -> NaiveDate {
    let today = Utc::now().date_naive();
    let first =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).expect("valid first of month");
    first
        .checked_sub_months(Months::new(back))
        .expect("date in range")
}

/// Three full months of 10000 income and 6000 spending, no obligations.
pub fn steady_snapshot(balance: Decimal) -> FinanceSnapshot {
    let account = Account::new("Vadesiz", balance);
    let mut transactions = Vec::new();
    for back in 1..=3 {
        let day = month_start(back);
        transactions.push(Transaction::income(account.id, dec!(10000), day));
        transactions.push(
            Transaction::expense(account.id, dec!(6000), day).with_description("market + kira"),
        );
    }
    FinanceSnapshot {
        accounts: vec![account],
        transactions,
        ..FinanceSnapshot::default()
    }
}

/// Adds rent and a credit card on top of [`steady_snapshot`].
pub fn indebted_snapshot(balance: Decimal) -> FinanceSnapshot {
    let mut snapshot = steady_snapshot(balance);
    snapshot
        .fixed_expenses
        .push(FixedExpense::new("Kira", dec!(2500), Recurrence::Monthly));
    snapshot
        .fixed_expenses
        .push(FixedExpense::new("Sigorta", dec!(6000), Recurrence::Yearly));
    snapshot.credits.push(Credit::new("Kredi Kartı", dec!(1000)));
    snapshot
}

pub fn write_snapshot(dir: &Path, snapshot: &FinanceSnapshot) -> PathBuf {
    let path = dir.join("snapshot.json");
    let json = serde_json::to_string_pretty(snapshot).expect("serialize snapshot");
    std::fs::write(&path, json).expect("write snapshot");
    path
}
