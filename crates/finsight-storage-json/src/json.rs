use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use finsight_core::{FinanceStore, StoreError};
use finsight_domain::{
    Account, Credit, FinanceSnapshot, FixedExpense, Forecast, ForecastInput, Transaction,
};

const TMP_SUFFIX: &str = "tmp";

/// Finance records kept in a single JSON snapshot file.
///
/// Every fetch re-reads the file. Forecasts are appended with a staged write
/// followed by a rename so readers never observe a half-written snapshot.
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Writes `snapshot` to `path` and opens a store over it.
    pub async fn create(
        path: impl Into<PathBuf>,
        snapshot: &FinanceSnapshot,
    ) -> Result<Self, StoreError> {
        let store = Self::new(path);
        save_snapshot(&store.path, snapshot).await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load_snapshot(&self) -> Result<FinanceSnapshot, StoreError> {
        load_snapshot(&self.path).await
    }

    async fn fetch<T>(
        &self,
        collection: &'static str,
        select: impl FnOnce(FinanceSnapshot) -> Vec<T>,
    ) -> Result<Vec<T>, StoreError> {
        let snapshot = self
            .load_snapshot()
            .await
            .map_err(|err| StoreError::Fetch {
                collection,
                message: err.to_string(),
            })?;
        let items = select(snapshot);
        debug!(collection, count = items.len(), path = %self.path.display(), "loaded records");
        Ok(items)
    }
}

#[async_trait]
impl FinanceStore for JsonStore {
    async fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.fetch("accounts", |snapshot| snapshot.accounts).await
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        self.fetch("transactions", |snapshot| snapshot.transactions)
            .await
    }

    async fn fixed_expenses(&self) -> Result<Vec<FixedExpense>, StoreError> {
        self.fetch("fixed_expenses", |snapshot| snapshot.fixed_expenses)
            .await
    }

    async fn credits(&self) -> Result<Vec<Credit>, StoreError> {
        self.fetch("credits", |snapshot| snapshot.credits).await
    }

    async fn create_forecast(&self, input: ForecastInput) -> Result<Forecast, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self
            .load_snapshot()
            .await
            .map_err(|err| StoreError::Persist(err.to_string()))?;
        let forecast = Forecast::from_input(input, Utc::now());
        snapshot.forecasts.push(forecast.clone());
        save_snapshot(&self.path, &snapshot)
            .await
            .map_err(|err| StoreError::Persist(err.to_string()))?;
        debug!(id = %forecast.id, path = %self.path.display(), "forecast stored");
        Ok(forecast)
    }
}

async fn load_snapshot(path: &Path) -> Result<FinanceSnapshot, StoreError> {
    let data = fs::read_to_string(path).await?;
    serde_json::from_str(&data).map_err(|err| StoreError::Serde(err.to_string()))
}

async fn save_snapshot(path: &Path, snapshot: &FinanceSnapshot) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|err| StoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
