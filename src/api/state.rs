//! Shared application state

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::EventStore;

/// State handed to every handler
pub struct AppState {
    /// Backing event collection
    pub store: Arc<dyn EventStore>,

    /// Held across load/save by mutating handlers so that two requests in
    /// this process never save over each other's changes
    write_lock: Mutex<()>,
}

impl AppState {
    /// Create a new AppState around the given store
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Acquire the mutation lock for one read-modify-write cycle
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::time::Duration;

    #[tokio::test]
    async fn test_write_lock_is_exclusive() {
        let state = AppState::new(Arc::new(MemoryStore::new()));

        let guard = state.lock_writes().await;
        let second = tokio::time::timeout(Duration::from_millis(20), state.lock_writes()).await;
        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(20), state.lock_writes()).await;
        assert!(third.is_ok());
    }
}
