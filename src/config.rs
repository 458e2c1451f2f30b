//! Server configuration from the environment
//!
//! | Variable       | Default        |
//! |----------------|----------------|
//! | `PORT`         | `3000`         |
//! | `EVENTOS_FILE` | `eventos.json` |
//! | `STATIC_DIR`   | `public`       |
//!
//! Relative paths resolve against the current directory.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EVENTOS_FILE: &str = "eventos.json";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub eventos_file: PathBuf,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Resolve the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let eventos_file = lookup("EVENTOS_FILE").unwrap_or_else(|| DEFAULT_EVENTOS_FILE.to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Self {
            port,
            eventos_file: resolve(&current_dir, &eventos_file),
            static_dir: resolve(&current_dir, &static_dir),
        }
    }

    /// Listen address: all interfaces on the configured port
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn resolve(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
