//! Positions module - the per-user ledger of holdings.

mod positions_ledger;
mod positions_model;
mod positions_service;
mod positions_traits;

#[cfg(test)]
mod positions_service_tests;

// Re-export the public interface
pub use positions_ledger::{merge_purchase, normalize_symbol, validate_update};
pub use positions_model::{MergedPosition, NewPosition, NewPurchase, Position, PositionUpdate};
pub use positions_service::PositionService;
pub use positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
