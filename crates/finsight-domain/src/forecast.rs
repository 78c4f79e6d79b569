//! Forecast records written to the store after a scenario run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Forecast fields supplied by the engine; the store assigns identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastInput {
    pub title: String,
    #[serde(rename = "type")]
    pub forecast_type: String,
    pub scenario: String,
    pub forecast_date: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
    pub predicted_value: Decimal,
    pub confidence_interval: u8,
    pub lower_bound: Decimal,
    pub upper_bound: Decimal,
    pub currency: String,
    pub category: String,
    /// Scenario parameters serialized as JSON.
    pub parameters: String,
}

/// A persisted forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub id: Uuid,
    #[serde(flatten)]
    pub input: ForecastInput,
    pub created_at: DateTime<Utc>,
}

impl Forecast {
    pub fn from_input(input: ForecastInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            created_at,
        }
    }
}
