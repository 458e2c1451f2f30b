//! API module for HTTP endpoints
//!
//! REST endpoints for the event collection plus the static landing page.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
