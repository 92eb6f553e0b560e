use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A symbol the user watches without holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub owner_id: String,
    /// Canonical uppercase ticker; unique per owner.
    pub symbol: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub id: String,
    pub owner_id: String,
    pub symbol: String,
    pub company_name: String,
}
