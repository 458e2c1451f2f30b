//! Event Store - whole-collection persistence
//!
//! Handlers never touch the backing file directly. They go through an
//! [`EventStore`], which reads and writes the entire collection at once:
//!
//! - `load()` never fails. A missing or unreadable store is an empty collection.
//! - `save()` never raises. It reports success as a boolean and logs the cause.
//!
//! Two implementations ship with the crate: [`JsonFileStore`] for the real
//! server and [`MemoryStore`] for tests.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Evento, Eventos};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Failures inside a store implementation
///
/// These are logged by the store and never cross the [`EventStore`] boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("store is configured to fail writes")]
    Rejected,
}

/// Read-everything / write-everything accessor for the event collection
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Load the full collection, falling back to an empty one
    async fn load(&self) -> Eventos;

    /// Overwrite the full collection; `false` if it could not be persisted
    async fn save(&self, eventos: &[Evento]) -> bool;
}
