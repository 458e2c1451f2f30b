//! Event record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named, dated event as stored in the collection file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evento {
    /// Creation time in milliseconds since the Unix epoch
    pub id: i64,
    pub nombre: String,
    pub fecha: String,
    /// ISO-8601 creation timestamp, never modified; empty for records
    /// written by hand without one
    #[serde(default)]
    pub creado: String,
    /// ISO-8601 timestamp of the last update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actualizado: Option<String>,
    /// Unknown keys found in the stored record, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Evento {
    /// Create a new event that has never been updated
    pub fn new(id: i64, nombre: String, fecha: String, creado: String) -> Self {
        Self {
            id,
            nombre,
            fecha,
            creado,
            actualizado: None,
            extra: Map::new(),
        }
    }

    /// Overwrite the mutable fields and stamp the update time
    pub fn apply(&mut self, datos: EventoDatos, actualizado: String) {
        self.nombre = datos.nombre;
        self.fecha = datos.fecha;
        self.actualizado = Some(actualizado);
    }
}

/// Request payload for create and update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventoInput {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

/// Validated create/update payload: both fields present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventoDatos {
    pub nombre: String,
    pub fecha: String,
}

impl EventoInput {
    /// Returns the validated fields, or `None` when either is missing or empty
    pub fn validate(self) -> Option<EventoDatos> {
        match (self.nombre, self.fecha) {
            (Some(nombre), Some(fecha)) if !nombre.is_empty() && !fecha.is_empty() => {
                Some(EventoDatos { nombre, fecha })
            }
            _ => None,
        }
    }
}
