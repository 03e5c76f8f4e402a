//! Persisted session state: tokens, cached profile and preference flags.
//!
//! State holders never touch a global store. They receive a
//! [`TokenManager`] and an [`AppManager`], both typed facades over an
//! injected [`KeyValueStore`].
//!
//! Lifecycle: populated after login/signup/OTP verification, read when a
//! holder initialises, cleared at logout. Reads return a point-in-time
//! snapshot; each write replaces one key atomically and writes to different
//! keys are independent.

mod error;
mod file;
mod keys;
mod manager;
mod memory;

pub use error::SessionError;
pub use file::FileStore;
pub use keys::SessionKey;
pub use manager::{AppManager, Profile, TokenManager};
pub use memory::MemoryStore;

/// Key-value capability backing the session facades.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Option<String>;

    fn set(&self, key: SessionKey, value: String) -> Result<(), SessionError>;

    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;

    /// Remove several keys in one write.
    fn remove_all(&self, keys: &[SessionKey]) -> Result<(), SessionError>;
}
