use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{env_flag, env_parse};

fn default_enabled() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    300
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FallbackConfig {
    /// Consult the built-in word table before any provider
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Artificial latency applied to table hits
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Extra JSON word tables merged over the built-in one
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            delay_ms: default_delay_ms(),
            additional_paths: vec![],
        }
    }
}

impl FallbackConfig {
    pub fn new() -> Self {
        let additional_paths = env::var_os("LEXI_FALLBACK_PATHS")
            .map(|paths| {
                env::split_paths(&paths)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            enabled: env_flag("LEXI_FALLBACK_ENABLED", default_enabled()),
            delay_ms: env_parse("LEXI_FALLBACK_DELAY_MS", default_delay_ms()),
            additional_paths,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
