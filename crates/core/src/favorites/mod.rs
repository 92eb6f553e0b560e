//! Favorites module - watched symbols, unique per owner.

mod favorites_model;
mod favorites_service;
mod favorites_traits;

pub use favorites_model::{Favorite, NewFavorite};
pub use favorites_service::FavoriteService;
pub use favorites_traits::{FavoriteRepositoryTrait, FavoriteServiceTrait};
