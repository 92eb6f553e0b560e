//! Concurrent quote fan-out.
//!
//! [`QuoteAggregator`] asks its [`QuoteSource`] for every distinct symbol at
//! once and waits for all of them. Each symbol's outcome is recorded on its
//! own: a rate-limited or unknown symbol shows up as [`QuoteResult::Failed`]
//! next to the quotes that did resolve.
//!
//! The batch completes when its slowest symbol does. Without a deadline
//! that is bounded only by the source's own timeout; with
//! [`QuoteAggregator::with_deadline`] a symbol that has not answered in time
//! is recorded as `Failed` with a `Timeout` cause. Dropping the future
//! returned by [`QuoteAggregator::resolve_all`] drops every in-flight
//! request with it.

use futures::future::join_all;
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tickerfolio_market_data::{canonical_symbol, MarketDataError, QuoteSource};

use super::quotes_model::{quote_key, QuoteResult, UpstreamFailure};
use crate::positions::Position;

pub struct QuoteAggregator {
    source: Arc<dyn QuoteSource>,
    deadline: Option<Duration>,
}

impl QuoteAggregator {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            deadline: None,
        }
    }

    /// Cap how long any single symbol may take.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    async fn resolve_one(&self, symbol: String) -> (String, QuoteResult) {
        let request = self.source.latest_quote(&symbol);
        let outcome = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, request)
                .await
                .unwrap_or_else(|_| {
                    Err(MarketDataError::Timeout {
                        provider: self.source.id().to_string(),
                    })
                }),
            None => request.await,
        };
        let result = outcome.map_err(|cause| UpstreamFailure::new(symbol.clone(), cause));
        (symbol, QuoteResult::from(result))
    }

    /// Resolve quotes for a batch of symbols.
    ///
    /// Symbols are canonicalized and de-duplicated before any request is
    /// made, so the source sees exactly one call per distinct symbol. The
    /// returned map is keyed by canonical symbol and holds an entry for every
    /// input. Malformed symbols are never sent upstream; they come back as
    /// `Failed` with an `InvalidSymbol` cause.
    ///
    /// Latency equals the slowest symbol's, capped by the deadline if one is
    /// set.
    pub async fn resolve_all<I, S>(&self, symbols: I) -> HashMap<String, QuoteResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = HashMap::new();
        let mut distinct = BTreeSet::new();

        for raw in symbols {
            let raw = raw.as_ref();
            match canonical_symbol(raw) {
                Ok(symbol) => {
                    distinct.insert(symbol);
                }
                Err(cause) => {
                    let key = quote_key(raw);
                    warn!("Skipping malformed symbol '{}': {}", raw, cause);
                    results.insert(key.clone(), QuoteResult::Failed(UpstreamFailure::new(key, cause)));
                }
            }
        }

        if distinct.is_empty() {
            return results;
        }

        debug!(
            "Resolving {} quotes via {}",
            distinct.len(),
            self.source.id()
        );

        let requests = distinct.into_iter().map(|symbol| self.resolve_one(symbol));
        let resolved = join_all(requests).await;

        let failed: Vec<&UpstreamFailure> = resolved
            .iter()
            .filter_map(|(_, result)| result.failure())
            .collect();
        if !failed.is_empty() {
            let retryable = failed.iter().filter(|f| f.is_retryable()).count();
            warn!(
                "Failed to resolve {} of {} quotes ({} retryable): {:?}",
                failed.len(),
                resolved.len(),
                retryable,
                failed
            );
        }

        results.extend(resolved);
        results
    }

    /// Resolve quotes for every symbol held in `positions`.
    pub async fn resolve_for_positions(&self, positions: &[Position]) -> HashMap<String, QuoteResult> {
        self.resolve_all(positions.iter().map(|p| p.symbol.as_str()))
            .await
    }
}
