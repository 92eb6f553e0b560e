use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::positions_ledger::{merge_purchase, normalize_symbol, validate_update};
use super::positions_model::{NewPosition, NewPurchase, Position, PositionUpdate};
use super::positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing one user's holdings on top of a repository.
pub struct PositionService {
    repository: Arc<dyn PositionRepositoryTrait>,
}

impl PositionService {
    pub fn new(repository: Arc<dyn PositionRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Load a position and confirm it belongs to `owner_id`.
    fn owned_position(&self, owner_id: &str, position_id: &str) -> Result<Position> {
        match self.repository.get_by_id(position_id)? {
            Some(position) if position.owner_id == owner_id => Ok(position),
            _ => Err(Error::NotFoundOrUnauthorized("Position".to_string())),
        }
    }
}

#[async_trait::async_trait]
impl PositionServiceTrait for PositionService {
    fn list_positions(&self, owner_id: &str) -> Result<Vec<Position>> {
        self.repository.list_by_owner(owner_id)
    }

    async fn add_purchase(&self, owner_id: &str, purchase: NewPurchase) -> Result<Position> {
        let symbol = normalize_symbol(&purchase.symbol)?;
        let existing = self.repository.find_by_symbol(owner_id, &symbol)?;
        let merged = merge_purchase(existing.as_ref(), &purchase)?;

        match existing {
            Some(existing) => {
                debug!(
                    "Merging purchase of {} {} into position {}: {} @ {}",
                    purchase.shares, symbol, existing.id, merged.shares, merged.average_cost
                );
                self.repository
                    .patch(
                        &existing.id,
                        PositionUpdate {
                            shares: Some(merged.shares),
                            average_cost: Some(merged.average_cost),
                        },
                    )
                    .await
            }
            None => {
                debug!(
                    "Opening position {} for owner {}: {} @ {}",
                    symbol, owner_id, merged.shares, merged.average_cost
                );
                self.repository
                    .insert(NewPosition {
                        id: Uuid::new_v4().to_string(),
                        owner_id: owner_id.to_string(),
                        symbol: merged.symbol,
                        company_name: merged.company_name,
                        shares: merged.shares,
                        average_cost: merged.average_cost,
                    })
                    .await
            }
        }
    }

    async fn update_position(
        &self,
        owner_id: &str,
        position_id: &str,
        update: PositionUpdate,
    ) -> Result<Position> {
        self.owned_position(owner_id, position_id)?;
        validate_update(&update)?;
        self.repository.patch(position_id, update).await
    }

    async fn remove_position(&self, owner_id: &str, position_id: &str) -> Result<()> {
        self.owned_position(owner_id, position_id)?;
        self.repository.delete(position_id).await?;
        Ok(())
    }
}
