use crate::errors::{Result, ValidationError};
use crate::portfolio::valuation::{PortfolioValuation, PriceSource, ValuationLine};
use crate::positions::Position;
use crate::quotes::{quote_key, QuoteResult};

use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tickerfolio_market_data::Direction;

fn overflow(what: &str, symbol: &str) -> crate::Error {
    ValidationError::Overflow(format!("{} for {}", what, symbol)).into()
}

/// Fraction of `total` that `value` represents. Zero when `total` is zero.
pub fn allocation_weight(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    value.checked_div(total).unwrap_or(Decimal::ZERO)
}

/// Values every position against the resolved quotes.
///
/// Quotes are looked up by the position's canonical symbol. A `Failed` or
/// missing entry prices the position at its average cost, which makes its
/// P&L exactly zero; the line is tagged [`PriceSource::CostBasisFallback`].
///
/// # Arguments
///
/// * `positions` - Ledger snapshot for one owner.
/// * `quotes` - Output of the quote aggregator, keyed by canonical symbol.
///
pub fn valuate(
    positions: &[Position],
    quotes: &HashMap<String, QuoteResult>,
) -> Result<PortfolioValuation> {
    if positions.is_empty() {
        return Ok(PortfolioValuation::empty());
    }

    let mut lines = Vec::with_capacity(positions.len());
    let mut total_value = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;

    for position in positions {
        let symbol = position.symbol.as_str();
        let quote = quotes
            .get(&quote_key(symbol))
            .and_then(QuoteResult::quote)
            .cloned();
        let (current_price, price_source) = match &quote {
            Some(quote) => (quote.price, PriceSource::LiveQuote),
            None => {
                warn!(
                    "No live quote for {}; valuing at average cost {}",
                    symbol, position.average_cost
                );
                (position.average_cost, PriceSource::CostBasisFallback)
            }
        };

        let cost_basis = position
            .shares
            .checked_mul(position.average_cost)
            .ok_or_else(|| overflow("cost basis", symbol))?;
        let current_value = position
            .shares
            .checked_mul(current_price)
            .ok_or_else(|| overflow("market value", symbol))?;
        let profit_and_loss = current_value
            .checked_sub(cost_basis)
            .ok_or_else(|| overflow("profit and loss", symbol))?;

        total_value = total_value
            .checked_add(current_value)
            .ok_or_else(|| overflow("total value", symbol))?;
        total_cost_basis = total_cost_basis
            .checked_add(cost_basis)
            .ok_or_else(|| overflow("total cost basis", symbol))?;

        lines.push(ValuationLine {
            position: position.clone(),
            quote,
            price_source,
            current_price,
            cost_basis,
            current_value,
            profit_and_loss,
            allocation_weight: Decimal::ZERO,
            direction: Direction::of(profit_and_loss),
        });
    }

    // Weights need the aggregate, so they are filled in a second pass.
    for line in &mut lines {
        line.allocation_weight = allocation_weight(line.current_value, total_value);
    }

    let total_profit_and_loss = total_value
        .checked_sub(total_cost_basis)
        .ok_or_else(|| overflow("total profit and loss", "portfolio"))?;
    debug!(
        "Valuated {} positions: value {}, cost basis {}, P&L {}",
        lines.len(),
        total_value,
        total_cost_basis,
        total_profit_and_loss
    );

    Ok(PortfolioValuation {
        lines,
        total_value,
        total_cost_basis,
        total_profit_and_loss,
        direction: Direction::of(total_profit_and_loss),
    })
}
