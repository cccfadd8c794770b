//! Configuration for the airwatch client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration: where the API lives and how often to poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn default_base_url() -> String {
    "https://minor-project-backend-bom7.onrender.com".to_string()
}

fn default_poll_interval_ms() -> u64 {
    5000
}
