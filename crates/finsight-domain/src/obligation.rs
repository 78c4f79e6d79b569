//! Recurring obligations: fixed expenses and credit lines.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, transaction::TransactionKind};

/// Cadence of a fixed expense.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Quarterly => "quarterly",
            Recurrence::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

/// A recurring obligation such as rent or a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedExpense {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(rename = "type", default = "default_fixed_kind")]
    pub kind: TransactionKind,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_fixed_kind() -> TransactionKind {
    TransactionKind::Expense
}

fn default_active() -> bool {
    true
}

impl FixedExpense {
    pub fn new(name: impl Into<String>, amount: Decimal, recurrence: Recurrence) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            recurrence,
            kind: TransactionKind::Expense,
            is_active: true,
        }
    }

    /// Only active monthly expense items are part of the monthly outflow.
    pub fn counts_monthly(&self) -> bool {
        self.is_active
            && self.kind == TransactionKind::Expense
            && self.recurrence == Recurrence::Monthly
    }
}

impl Amounted for FixedExpense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Lifecycle state of a credit line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreditStatus {
    #[default]
    Active,
    Paid,
    Defaulted,
    Closed,
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditStatus::Active => "active",
            CreditStatus::Paid => "paid",
            CreditStatus::Defaulted => "defaulted",
            CreditStatus::Closed => "closed",
        };
        f.write_str(label)
    }
}

/// A loan or card balance with a required minimum monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credit {
    pub id: Uuid,
    pub name: String,
    pub minimum_payment: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub status: CreditStatus,
}

impl Credit {
    pub fn new(name: impl Into<String>, minimum_payment: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            minimum_payment,
            is_active: true,
            status: CreditStatus::Active,
        }
    }

    /// Whether the minimum payment is still owed each month.
    pub fn is_payable(&self) -> bool {
        self.is_active && self.status == CreditStatus::Active
    }
}

impl Amounted for Credit {
    fn amount(&self) -> Decimal {
        self.minimum_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn only_active_monthly_expenses_count() {
        let rent = FixedExpense::new("Rent", dec!(1000), Recurrence::Monthly);
        assert!(rent.counts_monthly());

        let insurance = FixedExpense::new("Insurance", dec!(1200), Recurrence::Yearly);
        assert!(!insurance.counts_monthly());

        let mut paused = FixedExpense::new("Gym", dec!(50), Recurrence::Monthly);
        paused.is_active = false;
        assert!(!paused.counts_monthly());

        let mut salary = FixedExpense::new("Salary", dec!(5000), Recurrence::Monthly);
        salary.kind = TransactionKind::Income;
        assert!(!salary.counts_monthly());
    }

    #[test]
    fn credit_must_be_active_in_both_flags() {
        let mut credit = Credit::new("Card", dec!(300));
        assert!(credit.is_payable());

        credit.status = CreditStatus::Paid;
        assert!(!credit.is_payable());

        credit.status = CreditStatus::Active;
        credit.is_active = false;
        assert!(!credit.is_payable());
    }

    #[test]
    fn fixed_expense_defaults_apply_when_fields_missing() {
        let json = r#"{
            "id": "6c1c4f9e-1d5c-4a8e-9d43-6f7b0f1c2a11",
            "name": "Rent",
            "amount": "1500.00"
        }"#;
        let expense: FixedExpense = serde_json::from_str(json).expect("deserialize");
        assert_eq!(expense.recurrence, Recurrence::Monthly);
        assert_eq!(expense.kind, TransactionKind::Expense);
        assert!(expense.is_active);
    }
}
