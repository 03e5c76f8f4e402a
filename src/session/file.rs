//! TOML-backed session store.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::{Mutex, RwLock};

use super::{KeyValueStore, SessionError, SessionKey};

/// Session store persisted as a flat TOML table.
///
/// Reads are served from an in-memory copy. Every write rewrites the file
/// through a temp file + rename while holding an exclusive lock on a sibling
/// `.lock` file, so a crash never leaves a half-written session behind.
/// The cache only changes after the file write succeeded.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<BTreeMap<String, String>>,
    write_guard: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) the session file at `path`.
    pub fn open(path: PathBuf) -> Result<Self, SessionError> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| SessionError::Io {
                path: path.clone(),
                source,
            })?;
            let values: BTreeMap<String, String> =
                toml::from_str(&content).map_err(|source| SessionError::Parse {
                    path: path.clone(),
                    source,
                })?;
            // Keys written by a newer build stay in the file untouched.
            for unknown in values.keys().filter(|key| SessionKey::parse(key).is_none()) {
                tracing::warn!(path = %path.display(), key = %unknown, "Unknown session key kept as is");
            }
            values
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(values),
            write_guard: Mutex::new(()),
        })
    }

    fn update(
        &self,
        describe: &str,
        apply: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), SessionError> {
        let _guard = self.write_guard.lock();
        let mut next = self.cache.read().clone();
        apply(&mut next);
        self.persist(&next)?;
        *self.cache.write() = next;
        tracing::debug!(path = %self.path.display(), change = describe, "Session updated");
        Ok(())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.with_extension("lock"))
            .map_err(io_err)?;
        lock_file.lock_exclusive().map_err(io_err)?;

        let content = toml::to_string(values)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        let result = write_then_rename(&tmp_path, &self.path, &content).map_err(io_err);

        let _ = FileExt::unlock(&lock_file);
        result
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    {
        use std::io::Write;
        let mut file = File::create(tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.cache.read().get(key.as_str()).cloned()
    }

    fn set(&self, key: SessionKey, value: String) -> Result<(), SessionError> {
        let change = if key.is_secret() {
            format!("{} = <redacted>", key.as_str())
        } else {
            format!("{} = {}", key.as_str(), value)
        };
        self.update(&change, |values| {
            values.insert(key.as_str().to_string(), value);
        })
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.update(key.as_str(), |values| {
            values.remove(key.as_str());
        })
    }

    fn remove_all(&self, keys: &[SessionKey]) -> Result<(), SessionError> {
        self.update("remove_all", |values| {
            for key in keys {
                values.remove(key.as_str());
            }
        })
    }
}
