//! Predefined scenarios that can be run without entering custom parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finsight_domain::{ScenarioDefinition, ScenarioParameters};

const CATALOG_MONTHS: u32 = 12;

fn definition(
    key: &str,
    name: &str,
    description: &str,
    parameters: ScenarioParameters,
) -> ScenarioDefinition {
    ScenarioDefinition {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        parameters,
    }
}

/// The fixed, ordered scenario catalog.
pub fn predefined_scenarios() -> Vec<ScenarioDefinition> {
    let base = ScenarioParameters::baseline(CATALOG_MONTHS);
    vec![
        definition(
            "income_drop_10",
            "Gelir %10 Azalma",
            "Aylık gelirin %10 azaldığı durum",
            base.with_income(dec!(0.9)),
        ),
        definition(
            "income_drop_20",
            "Gelir %20 Azalma",
            "Aylık gelirin %20 azaldığı durum",
            base.with_income(dec!(0.8)),
        ),
        definition(
            "expense_rise_15",
            "Gider %15 Artış",
            "Değişken giderlerin %15 arttığı durum",
            base.with_expenses(dec!(1.15)),
        ),
        definition(
            "credit_payment_rise_25",
            "Kredi Ödemeleri %25 Artış",
            "Kredi ödemelerinin %25 arttığı durum",
            base.with_credit_payments(dec!(1.25)),
        ),
        definition(
            "worst_case",
            "En Kötü Senaryo",
            "Gelir %20 azalır, giderler %20, sabit giderler %10, kredi ödemeleri %30 artar",
            ScenarioParameters::new(dec!(0.8), dec!(1.2), dec!(1.1), dec!(1.3), CATALOG_MONTHS),
        ),
        definition(
            "best_case",
            "En İyi Senaryo",
            "Gelir %20 artar, giderler %20 azalır",
            ScenarioParameters::new(dec!(1.2), dec!(0.8), Decimal::ONE, Decimal::ONE, CATALOG_MONTHS),
        ),
    ]
}

/// Looks up a catalog entry by key or display name, ignoring case.
pub fn find_scenario(key_or_name: &str) -> Option<ScenarioDefinition> {
    let needle = key_or_name.trim().to_lowercase();
    predefined_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == needle || scenario.name.to_lowercase() == needle)
}
