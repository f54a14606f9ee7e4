mod loader;
mod types;

pub use loader::{ConfigError, Overrides, ENDPOINT_ENV, STATE_DIR_ENV};
pub use types::{Config, RemoteConfig, StorageConfig, UiConfig};
