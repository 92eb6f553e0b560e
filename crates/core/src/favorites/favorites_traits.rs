use async_trait::async_trait;

use super::favorites_model::{Favorite, NewFavorite};
use crate::errors::Result;

/// Trait for favorite repository operations.
///
/// Implementations must enforce uniqueness of (owner_id, symbol).
#[async_trait]
pub trait FavoriteRepositoryTrait: Send + Sync {
    fn get_by_id(&self, favorite_id: &str) -> Result<Option<Favorite>>;
    fn find_by_symbol(&self, owner_id: &str, symbol: &str) -> Result<Option<Favorite>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Favorite>>;
    async fn insert(&self, new_favorite: NewFavorite) -> Result<Favorite>;
    async fn delete(&self, favorite_id: &str) -> Result<usize>;
}

/// Trait for favorite service operations
#[async_trait]
pub trait FavoriteServiceTrait: Send + Sync {
    fn list_favorites(&self, owner_id: &str) -> Result<Vec<Favorite>>;
    fn is_favorite(&self, owner_id: &str, symbol: &str) -> Result<bool>;
    /// Idempotent: favoriting an already-favorited symbol returns the existing record.
    async fn add_favorite(&self, owner_id: &str, symbol: &str, company_name: &str)
        -> Result<Favorite>;
    async fn remove_favorite(&self, owner_id: &str, favorite_id: &str) -> Result<()>;
}
