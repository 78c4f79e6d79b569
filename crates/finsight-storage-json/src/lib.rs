//! finsight-storage-json
//!
//! [`FinanceStore`](finsight_core::FinanceStore) implementations: a JSON snapshot
//! file on disk and an in-memory store.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;
