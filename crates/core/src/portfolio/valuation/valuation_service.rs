use crate::errors::Result as CoreResult;
use crate::portfolio::valuation::valuation_calculator::valuate;
use crate::portfolio::valuation::valuation_model::PortfolioValuation;
use crate::positions::PositionServiceTrait;
use crate::quotes::QuoteAggregator;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Values the owner's current holdings against live quotes.
    ///
    /// Quote failures never fail the call; affected lines fall back to the
    /// position's average cost. Dropping the returned future abandons any
    /// quote requests still in flight.
    async fn valuate_portfolio(&self, owner_id: &str) -> CoreResult<PortfolioValuation>;
}

pub struct PortfolioService {
    position_service: Arc<dyn PositionServiceTrait>,
    quote_aggregator: QuoteAggregator,
}

impl PortfolioService {
    pub fn new(
        position_service: Arc<dyn PositionServiceTrait>,
        quote_aggregator: QuoteAggregator,
    ) -> Self {
        Self {
            position_service,
            quote_aggregator,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn valuate_portfolio(&self, owner_id: &str) -> CoreResult<PortfolioValuation> {
        let start = Instant::now();
        let positions = self.position_service.list_positions(owner_id)?;
        if positions.is_empty() {
            return Ok(PortfolioValuation::empty());
        }

        let quotes = self.quote_aggregator.resolve_for_positions(&positions).await;
        let valuation = valuate(&positions, &quotes)?;

        debug!(
            "Portfolio valuation for {} ({} positions, {} on fallback) took {:?}",
            owner_id,
            valuation.lines.len(),
            valuation.fallback_count(),
            start.elapsed()
        );
        Ok(valuation)
    }
}
