//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tickerfolio_market_data::{Direction, Quote};

use crate::positions::Position;

/// Where a line's current price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceSource {
    LiveQuote,
    /// No usable quote; the position's average cost stands in, so P&L is zero.
    CostBasisFallback,
}

/// One position valued against its quote. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationLine {
    pub position: Position,
    pub quote: Option<Quote>,
    pub price_source: PriceSource,
    pub current_price: Decimal,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
    pub profit_and_loss: Decimal,
    /// Share of the portfolio's total value, in `[0, 1]`.
    pub allocation_weight: Decimal,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub lines: Vec<ValuationLine>,
    pub total_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_profit_and_loss: Decimal,
    pub direction: Direction,
}

impl PortfolioValuation {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total_value: Decimal::ZERO,
            total_cost_basis: Decimal::ZERO,
            total_profit_and_loss: Decimal::ZERO,
            direction: Direction::Neutral,
        }
    }

    /// Number of lines priced from the cost-basis fallback.
    pub fn fallback_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.price_source == PriceSource::CostBasisFallback)
            .count()
    }
}
