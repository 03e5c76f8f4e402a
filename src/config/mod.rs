//! Client configuration: backend endpoints, timeouts and session location.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, EmailConfig, SessionConfig};
