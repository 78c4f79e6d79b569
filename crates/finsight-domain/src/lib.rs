//! finsight-domain
//!
//! Pure domain models (accounts, transactions, obligations, scenarios, forecasts).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod common;
pub mod forecast;
pub mod obligation;
pub mod risk;
pub mod scenario;
pub mod snapshot;
pub mod transaction;

pub use account::*;
pub use common::*;
pub use forecast::*;
pub use obligation::*;
pub use risk::*;
pub use scenario::*;
pub use snapshot::*;
pub use transaction::*;
