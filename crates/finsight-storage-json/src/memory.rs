use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use finsight_core::{FinanceStore, StoreError};
use finsight_domain::{
    Account, Credit, FinanceSnapshot, FixedExpense, Forecast, ForecastInput, Transaction,
};

/// Holds a snapshot in memory. Useful for embedding and tests.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<FinanceSnapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: FinanceSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    pub async fn snapshot(&self) -> FinanceSnapshot {
        self.snapshot.lock().await.clone()
    }

    pub async fn forecasts(&self) -> Vec<Forecast> {
        self.snapshot.lock().await.forecasts.clone()
    }
}

#[async_trait]
impl FinanceStore for MemoryStore {
    async fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.snapshot.lock().await.accounts.clone())
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.snapshot.lock().await.transactions.clone())
    }

    async fn fixed_expenses(&self) -> Result<Vec<FixedExpense>, StoreError> {
        Ok(self.snapshot.lock().await.fixed_expenses.clone())
    }

    async fn credits(&self) -> Result<Vec<Credit>, StoreError> {
        Ok(self.snapshot.lock().await.credits.clone())
    }

    async fn create_forecast(&self, input: ForecastInput) -> Result<Forecast, StoreError> {
        let forecast = Forecast::from_input(input, Utc::now());
        self.snapshot.lock().await.forecasts.push(forecast.clone());
        Ok(forecast)
    }
}
