use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

/// Primary provider
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FreeDictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL, the word is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for FreeDictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
        }
    }
}

impl FreeDictionaryConfig {
    pub fn new() -> Self {
        Self {
            enabled: env_flag("LEXI_FREE_DICTIONARY_ENABLED", default_enabled()),
            api_url: env::var("LEXI_FREE_DICTIONARY_URL").unwrap_or_else(|_| default_api_url()),
        }
    }
}
