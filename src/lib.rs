#![doc(test(attr(deny(warnings))))]

//! finsight runs what-if cash-flow scenarios over historical finance data and
//! scores the risk of each projected future.

pub mod cli;
pub mod errors;
pub mod settings;
pub mod utils;

pub use finsight_config as config;
pub use finsight_core as engine;
pub use finsight_domain as domain;
pub use finsight_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("finsight tracing initialized.");
    });
}
