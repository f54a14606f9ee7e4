use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote sheet service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the sheet web app. Blank counts as unset.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Hard deadline for pushing the activity log (default: 60).
    #[serde(default = "default_push_timeout")]
    pub push_timeout_seconds: u64,
}

/// Local durable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the ledger documents and the log file.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

/// Terminal loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_push_timeout() -> u64 {
    60
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            push_timeout_seconds: default_push_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    pub fn push_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.push_timeout_seconds)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Configured state directory, else `<data_dir>/nirocheck`.
    pub fn state_dir(&self) -> PathBuf {
        self.storage.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("nirocheck")
        })
    }
}
