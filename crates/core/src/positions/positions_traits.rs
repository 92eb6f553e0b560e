//! Position repository and service traits.
//!
//! These traits define the contract for position operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::positions_model::{NewPosition, NewPurchase, Position, PositionUpdate};
use crate::errors::Result;

/// Trait defining the contract for Position repository operations.
///
/// Implementations must enforce uniqueness of (owner_id, symbol).
#[async_trait]
pub trait PositionRepositoryTrait: Send + Sync {
    /// Retrieves a position by its ID, regardless of owner.
    fn get_by_id(&self, position_id: &str) -> Result<Option<Position>>;

    /// Looks up the owner's position for a canonical symbol.
    fn find_by_symbol(&self, owner_id: &str, symbol: &str) -> Result<Option<Position>>;

    /// Lists all positions of one owner.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Position>>;

    async fn insert(&self, new_position: NewPosition) -> Result<Position>;

    /// Applies only the supplied fields of `update`.
    async fn patch(&self, position_id: &str, update: PositionUpdate) -> Result<Position>;

    /// Deletes a position by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, position_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Position service operations.
///
/// Every mutation is ownership-checked before it reaches the repository.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    fn list_positions(&self, owner_id: &str) -> Result<Vec<Position>>;

    /// Merges a purchase into the owner's holding for that symbol, creating
    /// the holding when none exists.
    async fn add_purchase(&self, owner_id: &str, purchase: NewPurchase) -> Result<Position>;

    async fn update_position(
        &self,
        owner_id: &str,
        position_id: &str,
        update: PositionUpdate,
    ) -> Result<Position>;

    async fn remove_position(&self, owner_id: &str, position_id: &str) -> Result<()>;
}
