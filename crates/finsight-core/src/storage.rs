use async_trait::async_trait;

use finsight_domain::{Account, Credit, FixedExpense, Forecast, ForecastInput, Transaction};

use crate::StoreError;

/// Read access to the finance records and write access to forecasts.
///
/// Each fetch returns a fresh snapshot; the store owns consistency between them.
#[async_trait]
pub trait FinanceStore: Send + Sync {
    async fn accounts(&self) -> Result<Vec<Account>, StoreError>;
    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError>;
    async fn fixed_expenses(&self) -> Result<Vec<FixedExpense>, StoreError>;
    async fn credits(&self) -> Result<Vec<Credit>, StoreError>;
    /// Persists the forecast and returns it with its assigned identity.
    async fn create_forecast(&self, input: ForecastInput) -> Result<Forecast, StoreError>;
}
