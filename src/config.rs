//! Environment-driven configuration
//!
//! Read once at startup; the chosen backend never changes for the life of
//! the process.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::{EmbeddedStore, EventStore, ExternalStore};

/// Which persistence backend to construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Compiled-in curated dataset, optionally overridden by a JSON file
    Embedded { dataset_path: Option<PathBuf> },
    /// PostgREST-style HTTP backend
    External { base_url: String, api_key: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub backend: Backend,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// `AIONOS_DB_URL` + `AIONOS_DB_KEY` (both present) select the external
    /// backend; otherwise the embedded dataset serves, from the file named
    /// by `AIONOS_DATASET` if set. `HOST`/`PORT` control the bind address.
    pub fn from_env() -> Result<Self> {
        let host: IpAddr = match env::var("HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid HOST '{}'", raw)))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid PORT '{}'", raw)))?,
            Err(_) => 8000,
        };

        let backend = match (env::var("AIONOS_DB_URL"), env::var("AIONOS_DB_KEY")) {
            (Ok(base_url), Ok(api_key)) => Backend::External { base_url, api_key },
            _ => Backend::Embedded {
                dataset_path: env::var("AIONOS_DATASET").ok().map(PathBuf::from),
            },
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            backend,
        })
    }

    /// Construct the event store this configuration describes
    pub fn build_store(&self) -> Result<EventStore> {
        match &self.backend {
            Backend::Embedded { dataset_path } => {
                let store = match dataset_path {
                    Some(path) => EmbeddedStore::from_file(path)?,
                    None => EmbeddedStore::curated()?,
                };
                Ok(EventStore::Embedded(store))
            }
            Backend::External { base_url, api_key } => {
                Ok(EventStore::External(ExternalStore::new(base_url, api_key)?))
            }
        }
    }
}
