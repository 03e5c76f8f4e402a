use std::collections::HashMap;

use parking_lot::RwLock;

use super::{KeyValueStore, SessionError, SessionKey};

/// Process-local store; contents vanish with the process.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<SessionKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values.read().get(&key).cloned()
    }

    fn set(&self, key: SessionKey, value: String) -> Result<(), SessionError> {
        self.values.write().insert(key, value);
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.values.write().remove(&key);
        Ok(())
    }

    fn remove_all(&self, keys: &[SessionKey]) -> Result<(), SessionError> {
        let mut values = self.values.write();
        for key in keys {
            values.remove(key);
        }
        Ok(())
    }
}
