//! Shared, reloadable handle to the client configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{ApiConfig, Config};

/// Cloneable config handle read by the gateway and the session layer.
#[derive(Clone)]
pub struct ConfigStore {
    current: Arc<RwLock<Config>>,
    source: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, source: PathBuf) -> Self {
        Self {
            current: Arc::new(RwLock::new(config)),
            source,
        }
    }

    /// Read `source` (defaults if absent) and keep it for later reloads.
    pub fn open(source: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&source)?;
        Ok(Self::new(config, source))
    }

    /// Snapshot of the whole configuration.
    pub fn get(&self) -> Config {
        self.current.read().clone()
    }

    /// Snapshot of the `[api]` section, used to build an `ApiClient`.
    pub fn api(&self) -> ApiConfig {
        self.current.read().api.clone()
    }

    /// Where the session store should live under the current config.
    pub fn session_path(&self) -> PathBuf {
        self.current.read().session.resolved_path()
    }

    /// Re-read the source file. A failed reload leaves the current value in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let fresh = Config::load_from(&self.source)?;
        *self.current.write() = fresh;
        tracing::info!(path = %self.source.display(), "Configuration reloaded");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.source
    }
}
