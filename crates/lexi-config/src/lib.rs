use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::fallback::FallbackConfig;
use self::free_dictionary::FreeDictionaryConfig;
use self::retry::RetryConfig;
use self::words_api::WordsApiConfig;

pub mod fallback;
pub mod free_dictionary;
pub mod retry;
pub mod words_api;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub fallback: FallbackConfig,
    pub free_dictionary: FreeDictionaryConfig,
    pub words_api: WordsApiConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Defaults overridden by `LEXI_*` environment variables
    pub fn new() -> Self {
        Config {
            fallback: FallbackConfig::new(),
            free_dictionary: FreeDictionaryConfig::new(),
            words_api: WordsApiConfig::new(),
            retry: RetryConfig::new(),
        }
    }
}

pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => parse_flag(&v).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
