use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tickerfolio_market_data::HistorySource;

use super::history_model::{History, HistoryRequest};
use super::history_normalizer::normalize;
use crate::errors::Result;
use crate::quotes::UpstreamFailure;

#[async_trait]
pub trait HistoryServiceTrait: Send + Sync {
    /// Fetch and normalize one symbol's bars. Upstream failure surfaces as
    /// `Error::Upstream`; an empty feed is an empty `History`.
    async fn fetch(&self, request: &HistoryRequest) -> Result<History>;
}

pub struct HistoryService {
    source: Arc<dyn HistorySource>,
}

impl HistoryService {
    pub fn new(source: Arc<dyn HistorySource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl HistoryServiceTrait for HistoryService {
    async fn fetch(&self, request: &HistoryRequest) -> Result<History> {
        request.validate()?;

        let raw = self
            .source
            .history(
                &request.symbol,
                request.resolution,
                request.from_epoch,
                request.to_epoch,
            )
            .await
            .map_err(|cause| UpstreamFailure::new(request.symbol.clone(), cause))?;

        let received = raw.len();
        let points = normalize(raw);
        debug!(
            "History for {}: {} rows received, {} kept",
            request.symbol,
            received,
            points.len()
        );

        Ok(History {
            symbol: request.symbol.clone(),
            resolution: request.resolution,
            points,
        })
    }
}
