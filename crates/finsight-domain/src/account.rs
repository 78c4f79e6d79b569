//! Account records as returned by the finance store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A money-holding account. Only the balance feeds scenario analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Account {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            currency: None,
            is_active: true,
        }
    }
}

impl Amounted for Account {
    fn amount(&self) -> Decimal {
        self.balance
    }
}
