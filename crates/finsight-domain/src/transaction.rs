//! Recorded income and expense transactions.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        kind: TransactionKind,
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            kind,
            amount,
            date,
            category: category.into(),
            description: None,
        }
    }

    pub fn income(account_id: Uuid, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(account_id, TransactionKind::Income, amount, date, "income")
    }

    pub fn expense(account_id: Uuid, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(account_id, TransactionKind::Expense, amount, date, "expense")
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Direction of money flow for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}
