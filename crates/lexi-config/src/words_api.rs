use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://wordsapiv1.p.rapidapi.com/words".to_string()
}

fn default_api_host() -> String {
    "wordsapiv1.p.rapidapi.com".to_string()
}

/// Secondary provider, only usable with a RapidAPI key
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordsApiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
}

impl Default for WordsApiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            api_host: default_api_host(),
        }
    }
}

impl WordsApiConfig {
    pub fn new() -> Self {
        Self {
            enabled: env_flag("LEXI_WORDS_API_ENABLED", default_enabled()),
            api_url: env::var("LEXI_WORDS_API_URL").unwrap_or_else(|_| default_api_url()),
            api_key: env::var("LEXI_WORDS_API_KEY").unwrap_or_default(),
            api_host: env::var("LEXI_WORDS_API_HOST").unwrap_or_else(|_| default_api_host()),
        }
    }

    /// Enabled and holding a key
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}
