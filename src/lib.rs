//! Eventos Server
//!
//! A small CRUD backend for named, dated events, persisted as a single JSON
//! array on disk and exposed over HTTP.
//!
//! # Modules
//!
//! - `types`: The `Evento` record and request payloads
//! - `store`: Whole-collection persistence (`JsonFileStore`, `MemoryStore`)
//! - `api`: Axum router, handlers and response envelopes
//! - `config`: Environment-driven server configuration
//! - `utils`: Timestamps and atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use eventos_server::{create_router, AppState, JsonFileStore, ServerConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env();
//! let store = Arc::new(JsonFileStore::new(&config.eventos_file));
//! let app = create_router(Arc::new(AppState::new(store)), &config.static_dir);
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use store::{EventStore, JsonFileStore, MemoryStore};
pub use types::{Evento, EventoInput, Eventos};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_identity() {
        assert_eq!(NAME, "eventos-server");
        assert!(!VERSION.is_empty());
    }
}
