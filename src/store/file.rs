//! JSON file backed store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::{EventStore, StoreError};
use crate::types::{Evento, Eventos};
use crate::utils::atomic_write;

/// Event store persisted as one pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, eventos: &[Evento]) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(eventos)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || atomic_write(path, &content)).await??;
        Ok(())
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load(&self) -> Eventos {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no event file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read event file, treating as empty");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "event file is not a JSON array, treating as empty");
                return Vec::new();
            }
        };

        // One bad record must not take the rest of the collection with it
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Evento>(record) {
                Ok(evento) => Some(evento),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "skipping malformed event record");
                    None
                }
            })
            .collect()
    }

    async fn save(&self, eventos: &[Evento]) -> bool {
        match self.write(eventos).await {
            Ok(()) => {
                debug!(path = %self.path.display(), count = eventos.len(), "saved events");
                true
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error saving events");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample(id: i64, nombre: &str) -> Evento {
        Evento::new(
            id,
            nombre.to_string(),
            "2024-01-01".to_string(),
            "2024-01-01T00:00:00.000Z".to_string(),
        )
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("eventos.json"));

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eventos.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_non_array_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eventos.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_skips_malformed_record_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eventos.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "nombre": "Old", "fecha": "2023-01-01"},
                {"id": 2, "nombre": 5, "fecha": "2024-01-01", "creado": "t"},
                {"id": 3, "nombre": "B", "fecha": "2024-01-01", "creado": "2024-01-01T00:00:00.000Z"}
            ]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let eventos = store.load().await;

        let nombres: Vec<&str> = eventos.iter().map(|e| e.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Old", "B"]);
        assert_eq!(eventos[0].creado, "");
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("eventos.json"));
        let eventos = vec![sample(3, "C"), sample(1, "A"), sample(2, "B")];

        assert!(store.save(&eventos).await);
        assert_eq!(store.load().await, eventos);
    }

    #[tokio::test]
    async fn test_save_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eventos.json");
        let store = JsonFileStore::new(&path);

        assert!(store.save(&[sample(1, "A")]).await);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[tokio::test]
    async fn test_save_failure_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp_dir.path().join("eventos.json");
        fs::create_dir(&path).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(!store.save(&[sample(1, "A")]).await);
    }
}
