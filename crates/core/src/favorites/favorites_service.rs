use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::favorites_model::{Favorite, NewFavorite};
use super::favorites_traits::{FavoriteRepositoryTrait, FavoriteServiceTrait};
use crate::errors::{Error, Result};
use crate::positions::normalize_symbol;

pub struct FavoriteService {
    repository: Arc<dyn FavoriteRepositoryTrait>,
}

impl FavoriteService {
    pub fn new(repository: Arc<dyn FavoriteRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl FavoriteServiceTrait for FavoriteService {
    fn list_favorites(&self, owner_id: &str) -> Result<Vec<Favorite>> {
        self.repository.list_by_owner(owner_id)
    }

    fn is_favorite(&self, owner_id: &str, symbol: &str) -> Result<bool> {
        let symbol = normalize_symbol(symbol)?;
        Ok(self.repository.find_by_symbol(owner_id, &symbol)?.is_some())
    }

    async fn add_favorite(
        &self,
        owner_id: &str,
        symbol: &str,
        company_name: &str,
    ) -> Result<Favorite> {
        let symbol = normalize_symbol(symbol)?;
        if let Some(existing) = self.repository.find_by_symbol(owner_id, &symbol)? {
            return Ok(existing);
        }

        debug!("Adding favorite {} for owner {}", symbol, owner_id);
        let company_name = match company_name.trim() {
            "" => symbol.clone(),
            name => name.to_string(),
        };
        self.repository
            .insert(NewFavorite {
                id: Uuid::new_v4().to_string(),
                owner_id: owner_id.to_string(),
                symbol,
                company_name,
            })
            .await
    }

    async fn remove_favorite(&self, owner_id: &str, favorite_id: &str) -> Result<()> {
        match self.repository.get_by_id(favorite_id)? {
            Some(favorite) if favorite.owner_id == owner_id => {
                self.repository.delete(favorite_id).await?;
                Ok(())
            }
            _ => Err(Error::NotFoundOrUnauthorized("Favorite".to_string())),
        }
    }
}
