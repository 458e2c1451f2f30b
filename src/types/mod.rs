//! Data types for the Eventos server
//!
//! This module contains the event record and the request payloads built from it.

mod evento;

pub use evento::{Evento, EventoDatos, EventoInput};

/// The whole persisted state: every event, in insertion order
pub type Eventos = Vec<Evento>;
