use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lexi_config::Config;
use lexi_config::fallback::FallbackConfig;
use lexi_core::{FailurePolicy, FallbackTable, Resolver, RetrySupervisor};
use lexi_provider_english::{FreeDictionaryProvider, WordsApiProvider};

/// Resolver wrapped in the configured retry policy
pub fn build_supervisor(config: &Config) -> anyhow::Result<RetrySupervisor<Resolver>> {
    let resolver = build_resolver(config)?;

    Ok(RetrySupervisor::new(resolver)
        .with_max_retries(config.retry.max_retries)
        .with_backoff(config.retry.backoff()))
}

/// Fallback table, then Free Dictionary, then WordsAPI
pub fn build_resolver(config: &Config) -> anyhow::Result<Resolver> {
    let mut builder = Resolver::builder();

    if config.fallback.enabled {
        let table = load_fallback_table(&config.fallback);
        tracing::info!("Fallback table ready with {} words", table.len());
        builder = builder.strategy(Arc::new(table), FailurePolicy::Skip);
    }

    if config.free_dictionary.enabled {
        let provider = FreeDictionaryProvider::new(&config.free_dictionary.api_url)
            .context("Invalid Free Dictionary URL")?;
        builder = builder.strategy(Arc::new(provider), FailurePolicy::Degrade);
    }

    if config.words_api.is_usable() {
        let provider = WordsApiProvider::new(
            &config.words_api.api_url,
            config.words_api.api_key.clone(),
            config.words_api.api_host.clone(),
        )
        .context("Invalid WordsAPI URL")?;
        builder = builder.strategy(Arc::new(provider), FailurePolicy::Skip);
    } else if config.words_api.enabled {
        tracing::info!("LEXI_WORDS_API_KEY not set, WordsAPI disabled");
    }

    let resolver = builder.build()?;
    tracing::debug!("Lookup order: {}", resolver.strategy_names().join(" -> "));
    Ok(resolver)
}

/// Built-in words merged with any extra tables; unreadable files are skipped
fn load_fallback_table(config: &FallbackConfig) -> FallbackTable {
    let mut table = FallbackTable::seeded();

    for path in &config.additional_paths {
        match FallbackTable::load_from_file(Path::new(path)) {
            Ok(additional) => {
                tracing::info!("Merging fallback words from: {}", path);
                table = table.merge(additional);
            }
            Err(e) => {
                tracing::warn!("Failed to load fallback words from {}: {}", path, e);
            }
        }
    }

    table.with_delay(config.delay())
}
