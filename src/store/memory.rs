//! In-memory store, for tests and ephemeral runs

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::error;

use super::{EventStore, StoreError};
use crate::types::{Evento, Eventos};

/// Event store that keeps the collection in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    eventos: Mutex<Eventos>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `eventos`
    pub fn with_eventos(eventos: Eventos) -> Self {
        Self {
            eventos: Mutex::new(eventos),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored collection
    pub fn snapshot(&self) -> Eventos {
        self.eventos.lock().clone()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self) -> Eventos {
        self.eventos.lock().clone()
    }

    async fn save(&self, eventos: &[Evento]) -> bool {
        if self.fail_saves.load(Ordering::SeqCst) {
            error!(error = %StoreError::Rejected, "error saving events");
            return false;
        }
        *self.eventos.lock() = eventos.to_vec();
        true
    }
}
