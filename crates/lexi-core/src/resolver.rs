use std::sync::Arc;

use async_trait::async_trait;
use lexi_provider::DictionaryProvider;
use lexi_types::{Degraded, LookupOutcome};

use crate::error::{BuildError, LookupError};
use crate::preprocess::normalize_query;

/// One resolution attempt over a query
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<LookupOutcome, LookupError>;
}

/// What the resolver does when a strategy cannot reach its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and move on to the next strategy
    Skip,
    /// Move on, but report a connectivity problem if nothing else finds the word
    Degrade,
    /// Abort the attempt with a `LookupError`
    Propagate,
}

struct Strategy {
    provider: Arc<dyn DictionaryProvider>,
    on_failure: FailurePolicy,
}

/// Runs lookup strategies in order and stops at the first definition
pub struct Resolver {
    strategies: Vec<Strategy>,
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Names of the configured strategies, in lookup order
    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies
            .iter()
            .map(|s| s.provider.metadata().name)
            .collect()
    }

    pub async fn resolve(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        let word = normalize_query(query);
        if word.is_empty() {
            tracing::debug!("Empty query, nothing to look up");
            return Ok(LookupOutcome::NotFound);
        }

        let mut unreachable: Option<String> = None;

        for strategy in &self.strategies {
            let name = strategy.provider.metadata().name;

            match strategy.provider.define(&word).await {
                Ok(Some(definition)) => {
                    tracing::info!(provider = %name, word = %word, "definition found");
                    return Ok(LookupOutcome::Found(definition));
                }
                Ok(None) => {
                    tracing::debug!("{} has no entry for '{}'", name, word);
                }
                Err(err) if !err.is_transport() => {
                    tracing::warn!("{} answered with an error for '{}': {}", name, word, err);
                }
                Err(err) => match strategy.on_failure {
                    FailurePolicy::Skip => {
                        tracing::warn!("{} unavailable, skipping: {}", name, err);
                    }
                    FailurePolicy::Degrade => {
                        tracing::warn!("{} unreachable: {}", name, err);
                        unreachable.get_or_insert(name);
                    }
                    FailurePolicy::Propagate => {
                        return Err(LookupError::Provider {
                            provider: name,
                            source: err,
                        });
                    }
                },
            }
        }

        match unreachable {
            Some(name) => {
                tracing::warn!("No definition for '{}' and {} could not be reached", word, name);
                Ok(LookupOutcome::Degraded(Degraded::connectivity(word)))
            }
            None => {
                tracing::debug!("No provider knows '{}'", word);
                Ok(LookupOutcome::NotFound)
            }
        }
    }
}

#[async_trait]
impl Lookup for Resolver {
    async fn lookup(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        self.resolve(query).await
    }
}

#[derive(Default)]
pub struct ResolverBuilder {
    strategies: Vec<Strategy>,
}

impl ResolverBuilder {
    /// Append a strategy, consulted after the ones already added
    pub fn strategy(mut self, provider: Arc<dyn DictionaryProvider>, on_failure: FailurePolicy) -> Self {
        self.strategies.push(Strategy {
            provider,
            on_failure,
        });
        self
    }

    pub fn build(self) -> Result<Resolver, BuildError> {
        if self.strategies.is_empty() {
            return Err(BuildError::NoStrategies);
        }

        Ok(Resolver {
            strategies: self.strategies,
        })
    }
}
