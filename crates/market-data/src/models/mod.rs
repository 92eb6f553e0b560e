//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `quote` - Point-in-time quote (Quote)
//! - `history` - Raw historical rows and bar resolution (RawHistoryPoint, Resolution)
//! - `direction` - Three-way sign classification (Direction)
//! - `symbol` - Ticker canonicalization
//! - `profile` - Company profile data (CompanyProfile)
//! - `search` - Search result data (SearchResult)

mod direction;
mod history;
mod profile;
mod quote;
mod search;
mod symbol;

pub use direction::Direction;
pub use history::{RawHistoryPoint, Resolution};
pub use profile::CompanyProfile;
pub use quote::Quote;
pub use search::SearchResult;
pub use symbol::canonical_symbol;
