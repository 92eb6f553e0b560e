//! Weighted-average-cost ledger arithmetic.
//!
//! Everything here is pure: no storage, no clock. The position service is
//! the thin adapter that loads the existing holding, calls
//! [`merge_purchase`] and persists the result.

use rust_decimal::Decimal;
use tickerfolio_market_data::canonical_symbol;

use super::positions_model::{MergedPosition, NewPurchase, Position, PositionUpdate};
use crate::errors::{Result, ValidationError};

/// Canonicalize a user-supplied symbol for lookup and storage.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    canonical_symbol(raw).map_err(|_| ValidationError::InvalidSymbol(raw.to_string()).into())
}

fn ensure_positive_shares(shares: Decimal) -> Result<()> {
    if shares <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveShares(shares).into());
    }
    Ok(())
}

fn ensure_non_negative_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::NegativePrice(price).into());
    }
    Ok(())
}

fn overflow(what: &str) -> crate::Error {
    ValidationError::Overflow(what.to_string()).into()
}

/// Check a partial update before it reaches storage.
///
/// Supplied share counts must be positive (a holding sold down to nothing is
/// removed, not zeroed) and supplied costs must not be negative.
pub fn validate_update(update: &PositionUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(ValidationError::InvalidInput("update contains no fields".to_string()).into());
    }
    if let Some(shares) = update.shares {
        ensure_positive_shares(shares)?;
    }
    if let Some(average_cost) = update.average_cost {
        ensure_non_negative_price(average_cost)?;
    }
    Ok(())
}

/// Merge a purchase into an existing holding, or open a new one.
///
/// With no existing position the result carries the purchase quantity and
/// price unchanged. Otherwise:
///
/// ```text
/// shares       = existing.shares + purchase.shares
/// average_cost = (existing.shares * existing.average_cost
///                 + purchase.shares * purchase.price) / shares
/// ```
///
/// so that `shares * average_cost` equals the capital invested before the
/// merge plus the cost of the purchase. The existing company name is kept.
pub fn merge_purchase(existing: Option<&Position>, purchase: &NewPurchase) -> Result<MergedPosition> {
    let symbol = normalize_symbol(&purchase.symbol)?;
    ensure_positive_shares(purchase.shares)?;
    ensure_non_negative_price(purchase.price)?;

    let existing = match existing {
        None => {
            let company_name = match purchase.company_name.trim() {
                "" => symbol.clone(),
                name => name.to_string(),
            };
            return Ok(MergedPosition {
                symbol,
                company_name,
                shares: purchase.shares,
                average_cost: purchase.price,
            });
        }
        Some(existing) => existing,
    };

    if existing.symbol != symbol {
        return Err(ValidationError::InvalidInput(format!(
            "purchase of {} cannot be merged into position {}",
            symbol, existing.symbol
        ))
        .into());
    }

    let shares = existing
        .shares
        .checked_add(purchase.shares)
        .ok_or_else(|| overflow("share count"))?;
    // Guards the division below.
    ensure_positive_shares(shares)?;

    let invested_before = existing
        .shares
        .checked_mul(existing.average_cost)
        .ok_or_else(|| overflow("existing cost basis"))?;
    let purchase_cost = purchase
        .shares
        .checked_mul(purchase.price)
        .ok_or_else(|| overflow("purchase cost"))?;
    let invested_after = invested_before
        .checked_add(purchase_cost)
        .ok_or_else(|| overflow("merged cost basis"))?;
    let average_cost = invested_after
        .checked_div(shares)
        .ok_or_else(|| overflow("average cost"))?;

    Ok(MergedPosition {
        symbol,
        company_name: existing.company_name.clone(),
        shares,
        average_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn position(symbol: &str, shares: Decimal, average_cost: Decimal) -> Position {
        Position {
            id: "pos-1".to_string(),
            owner_id: "user-1".to_string(),
            symbol: symbol.to_string(),
            company_name: "Apple Inc".to_string(),
            shares,
            average_cost,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_position_copies_purchase_exactly() {
        let purchase = NewPurchase::new("aapl", "Apple Inc", dec!(12.5), dec!(187.33));
        let merged = merge_purchase(None, &purchase).unwrap();

        assert_eq!(merged.symbol, "AAPL");
        assert_eq!(merged.shares, dec!(12.5));
        assert_eq!(merged.average_cost, dec!(187.33));
        assert_eq!(merged.company_name, "Apple Inc");
    }

    #[test]
    fn test_blank_company_name_defaults_to_symbol() {
        let purchase = NewPurchase::new("msft", "  ", dec!(1), dec!(400));
        let merged = merge_purchase(None, &purchase).unwrap();
        assert_eq!(merged.company_name, "MSFT");
    }

    #[test]
    fn test_merge_uses_weighted_average() {
        let existing = position("AAPL", dec!(10), dec!(100));
        let purchase = NewPurchase::new("AAPL", "ignored", dec!(30), dec!(200));
        let merged = merge_purchase(Some(&existing), &purchase).unwrap();

        assert_eq!(merged.shares, dec!(40));
        assert_eq!(merged.average_cost, dec!(175));
        assert_eq!(merged.company_name, "Apple Inc");
    }

    #[test]
    fn test_merge_is_not_latest_price_overwrite() {
        let existing = position("AAPL", dec!(100), dec!(50));
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(1), dec!(1000));
        let merged = merge_purchase(Some(&existing), &purchase).unwrap();

        assert!(merged.average_cost < dec!(60));
        assert_ne!(merged.average_cost, dec!(1000));
    }

    #[test]
    fn test_merge_conserves_cost_basis() {
        let existing = position("AAPL", dec!(3), dec!(10.01));
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(7), dec!(13.37));
        let merged = merge_purchase(Some(&existing), &purchase).unwrap();

        let expected = dec!(3) * dec!(10.01) + dec!(7) * dec!(13.37);
        let diff = (merged.cost_basis() - expected).abs();
        assert!(diff < dec!(0.0000000001), "diff {}", diff);
    }

    #[test]
    fn test_free_shares_lower_average_cost() {
        let existing = position("AAPL", dec!(10), dec!(90));
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(5), Decimal::ZERO);
        let merged = merge_purchase(Some(&existing), &purchase).unwrap();

        assert_eq!(merged.shares, dec!(15));
        assert_eq!(merged.average_cost, dec!(60));
    }

    #[test]
    fn test_merge_into_emptied_position_takes_purchase_price() {
        let existing = position("AAPL", Decimal::ZERO, dec!(120));
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(2), dec!(150));
        let merged = merge_purchase(Some(&existing), &purchase).unwrap();

        assert_eq!(merged.shares, dec!(2));
        assert_eq!(merged.average_cost, dec!(150));
    }

    #[test]
    fn test_rejects_non_positive_shares() {
        for shares in [Decimal::ZERO, dec!(-1)] {
            let purchase = NewPurchase::new("AAPL", "Apple Inc", shares, dec!(100));
            let err = merge_purchase(None, &purchase).unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::NonPositiveShares(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_price() {
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(1), dec!(-0.01));
        let err = merge_purchase(None, &purchase).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_symbol() {
        let purchase = NewPurchase::new("AA PL", "Apple Inc", dec!(1), dec!(1));
        let err = merge_purchase(None, &purchase).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_rejects_symbol_mismatch() {
        let existing = position("AAPL", dec!(1), dec!(1));
        let purchase = NewPurchase::new("MSFT", "Microsoft", dec!(1), dec!(1));
        assert!(merge_purchase(Some(&existing), &purchase).is_err());
    }

    #[test]
    fn test_overflow_is_a_validation_error() {
        let existing = position("AAPL", Decimal::MAX, dec!(2));
        let purchase = NewPurchase::new("AAPL", "Apple Inc", dec!(1), dec!(1));
        let err = merge_purchase(Some(&existing), &purchase).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Overflow(_))));
    }

    #[test]
    fn test_validate_update() {
        assert!(validate_update(&PositionUpdate::default()).is_err());
        assert!(validate_update(&PositionUpdate {
            shares: Some(Decimal::ZERO),
            average_cost: None,
        })
        .is_err());
        assert!(validate_update(&PositionUpdate {
            shares: None,
            average_cost: Some(dec!(-5)),
        })
        .is_err());
        assert!(validate_update(&PositionUpdate {
            shares: Some(dec!(3)),
            average_cost: Some(Decimal::ZERO),
        })
        .is_ok());
    }
}
