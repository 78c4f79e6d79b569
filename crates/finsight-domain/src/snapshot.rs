//! Serializable collection of every record a finance store holds.

use serde::{Deserialize, Serialize};

use crate::{
    account::Account,
    forecast::Forecast,
    obligation::{Credit, FixedExpense},
    transaction::Transaction,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinanceSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default)]
    pub forecasts: Vec<Forecast>,
}

