use crate::errors::MarketDataError;

/// Longest ticker accepted, including exchange suffixes like `.TO`.
const MAX_SYMBOL_LEN: usize = 20;

/// Canonicalize a user-supplied ticker: trim and uppercase.
///
/// Accepts ASCII letters, digits and the separators `.`, `-`, `/`, `:`, `^`.
/// Anything else, or an empty string, is an [`MarketDataError::InvalidSymbol`].
pub fn canonical_symbol(raw: &str) -> Result<String, MarketDataError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_SYMBOL_LEN {
        return Err(MarketDataError::InvalidSymbol(raw.to_string()));
    }

    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '/' | ':' | '^'));
    if !valid {
        return Err(MarketDataError::InvalidSymbol(raw.to_string()));
    }

    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_trims() {
        assert_eq!(canonical_symbol("  aapl ").unwrap(), "AAPL");
        assert_eq!(canonical_symbol("shop.to").unwrap(), "SHOP.TO");
        assert_eq!(canonical_symbol("eur/usd").unwrap(), "EUR/USD");
        assert_eq!(canonical_symbol("^gspc").unwrap(), "^GSPC");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            canonical_symbol(""),
            Err(MarketDataError::InvalidSymbol(_))
        ));
        assert!(canonical_symbol("   ").is_err());
        assert!(canonical_symbol("AA PL").is_err());
        assert!(canonical_symbol("AAPL;DROP").is_err());
        assert!(canonical_symbol("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    }
}
