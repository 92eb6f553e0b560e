//! Market data source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource`, `HistorySource` and `SymbolSearch` traits the core consumes
//! - The Twelve Data provider implementing all three

mod traits;

pub mod twelve_data;

// Re-exports
pub use traits::{HistorySource, QuoteSource, SymbolSearch};
