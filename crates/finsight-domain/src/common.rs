//! Shared contract for records that carry a monetary amount.

use rust_decimal::Decimal;

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Sums the amounts of every item in the iterator. `None` when the sum overflows.
pub fn total_amount<'a, T, I>(items: I) -> Option<Decimal>
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.amount()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_balances() {
        let accounts = vec![
            Account::new("Vadesiz", dec!(1200.50)),
            Account::new("Kredi Kartı", dec!(-200.25)),
        ];
        assert_eq!(total_amount(&accounts), Some(dec!(1000.25)));
        assert_eq!(total_amount(&Vec::<Account>::new()), Some(Decimal::ZERO));
    }

    #[test]
    fn overflow_yields_none() {
        let accounts = vec![
            Account::new("A", Decimal::MAX),
            Account::new("B", Decimal::ONE),
        ];
        assert_eq!(total_amount(&accounts), None);
    }
}
