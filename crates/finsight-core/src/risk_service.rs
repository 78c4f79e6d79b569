//! Classifies the risk of a projected scenario and suggests next steps.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finsight_domain::{MonthlyProjection, RiskAssessment, RiskLevel, ScenarioParameters};

/// Income multipliers strictly below this are a severe income drop.
pub const INCOME_DROP_THRESHOLD: Decimal = dec!(0.8);
/// Expense multipliers strictly above this are a severe expense rise.
pub const EXPENSE_RISE_THRESHOLD: Decimal = dec!(1.2);
/// Fixed expenses above this share of income are flagged.
pub const FIXED_EXPENSE_RATIO_THRESHOLD: Decimal = dec!(0.7);

pub struct RiskService;

impl RiskService {
    /// Applies the risk rules in order. The level is a running maximum and is never lowered.
    pub fn assess(
        parameters: &ScenarioParameters,
        projections: &[MonthlyProjection],
        projected_balance: Decimal,
    ) -> RiskAssessment {
        let mut level = RiskLevel::Low;
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        let negative_months = projections
            .iter()
            .filter(|month| month.net_cash_flow < Decimal::ZERO)
            .count();
        if negative_months > 0 {
            factors.push(format!("{negative_months} ay boyunca negatif nakit akışı"));
            level.raise_to(RiskLevel::Medium);
        }

        if parameters.income_multiplier < INCOME_DROP_THRESHOLD {
            factors.push("Gelirde %20'den fazla düşüş".to_string());
            level.raise_to(RiskLevel::High);
            recommendations.push("Gelirinizi artıracak ek kaynaklar arayın".to_string());
        }

        if parameters.expense_multiplier > EXPENSE_RISE_THRESHOLD {
            factors.push("Giderlerde %20'den fazla artış".to_string());
            let floor = if level >= RiskLevel::Medium {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };
            level.raise_to(floor);
            recommendations.push("Harcamalarınızı kontrol altına alın".to_string());
        }

        if projected_balance < Decimal::ZERO {
            factors.push("Dönem sonunda negatif bakiye öngörülüyor".to_string());
            level.raise_to(RiskLevel::High);
            recommendations.push("Acil nakit akışı planlaması yapın".to_string());
        }

        if Self::fixed_expense_ratio(projections) > FIXED_EXPENSE_RATIO_THRESHOLD {
            factors.push("Sabit giderler gelirin %70'inden fazla".to_string());
            recommendations.push("Sabit giderlerinizi gözden geçirin".to_string());
        }

        recommendations.extend(
            Self::general_recommendations(level)
                .iter()
                .map(|text| text.to_string()),
        );

        RiskAssessment {
            risk_level: level,
            risk_factors: factors,
            recommendations,
        }
    }

    /// Mean projected fixed expenses over mean projected income; zero when income is zero.
    pub fn fixed_expense_ratio(projections: &[MonthlyProjection]) -> Decimal {
        if projections.is_empty() {
            return Decimal::ZERO;
        }
        let avg_income = mean(projections.iter().map(|m| m.income), projections.len());
        if avg_income.is_zero() {
            return Decimal::ZERO;
        }
        let avg_fixed = mean(projections.iter().map(|m| m.fixed_expenses), projections.len());
        avg_fixed.checked_div(avg_income).unwrap_or_else(|| {
            if avg_fixed.is_sign_negative() == avg_income.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
    }

    pub fn general_recommendations(level: RiskLevel) -> [&'static str; 2] {
        match level {
            RiskLevel::High => [
                "Kriz durumu için eylem planı hazırlayın",
                "Alternatif gelir kaynakları oluşturun",
            ],
            RiskLevel::Medium => [
                "Nakit akışınızı düzenli olarak takip edin",
                "Acil durum fonu oluşturun",
            ],
            RiskLevel::Low => [
                "Mevcut finansal durumunuzu koruyun",
                "Yatırım fırsatlarını değerlendirin",
            ],
        }
    }
}

/// Averages `count` values. Falls back to summing pre-divided terms when the plain sum overflows.
fn mean(values: impl Iterator<Item = Decimal> + Clone, count: usize) -> Decimal {
    let count = Decimal::from(count);
    values
        .clone()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .map(|total| total / count)
        .unwrap_or_else(|| {
            values.fold(Decimal::ZERO, |total, value| {
                total.saturating_add(value / count)
            })
        })
}
