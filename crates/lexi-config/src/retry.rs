use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_max_retries() -> u32 {
    2
}

fn default_backoff_ms() -> u64 {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Fixed wait between attempts
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self {
            max_retries: env_parse("LEXI_MAX_RETRIES", default_max_retries()),
            backoff_ms: env_parse("LEXI_RETRY_BACKOFF_MS", default_backoff_ms()),
        }
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}
