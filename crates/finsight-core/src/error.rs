use thiserror::Error;

/// Failures reported by a finance store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to fetch {collection}: {message}")]
    Fetch {
        collection: &'static str,
        message: String,
    },
    #[error("Failed to persist forecast: {0}")]
    Persist(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Failure raised while an analysis is running, before it is collapsed into
/// [`CoreError::AnalysisFailed`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Could not serialize scenario parameters: {0}")]
    Parameters(#[from] serde_json::Error),
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid scenario parameters: {0}")]
    InvalidParameters(String),
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("Senaryo analizi başarısız oldu")]
    AnalysisFailed {
        scenario: String,
        #[source]
        source: AnalysisError,
    },
}
