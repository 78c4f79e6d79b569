//! finsight-core
//!
//! Scenario analysis services: historical aggregation, cash-flow projection,
//! risk assessment, the predefined scenario catalog, and the orchestration that
//! ties them to a finance store. Depends on finsight-domain. No CLI, no terminal
//! I/O, no concrete storage.

pub mod aggregation_service;
pub mod catalog;
pub mod error;
pub mod projection_service;
pub mod risk_service;
pub mod scenario_service;
pub mod storage;
pub mod time;
pub mod validation;

pub use aggregation_service::*;
pub use catalog::*;
pub use error::{CoreError, StoreError};
pub use projection_service::*;
pub use risk_service::*;
pub use scenario_service::*;
pub use storage::FinanceStore;
pub use time::{Clock, FixedClock, SystemClock};
pub use validation::validate_parameters;
