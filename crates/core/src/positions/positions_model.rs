//! Position domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's aggregated holding in one symbol.
///
/// `shares * average_cost` is the total cost basis. `average_cost` is the
/// weighted mean of every purchase merged into the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub owner_id: String,
    /// Canonical uppercase ticker; unique per owner.
    pub symbol: String,
    pub company_name: String,
    pub shares: Decimal,
    /// Average cost per share.
    pub average_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Position {
    /// Total amount originally invested.
    pub fn cost_basis(&self) -> Decimal {
        self.shares * self.average_cost
    }
}

/// Insert payload handed to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition {
    pub id: String,
    pub owner_id: String,
    pub symbol: String,
    pub company_name: String,
    pub shares: Decimal,
    pub average_cost: Decimal,
}

/// Partial update. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<Decimal>,
}

impl PositionUpdate {
    pub fn is_empty(&self) -> bool {
        self.shares.is_none() && self.average_cost.is_none()
    }
}

/// A purchase to merge into the owner's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub symbol: String,
    pub company_name: String,
    pub shares: Decimal,
    /// Price paid per share.
    pub price: Decimal,
}

impl NewPurchase {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        shares: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            shares,
            price,
        }
    }
}

/// Result of merging a purchase: the holding's new quantity and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPosition {
    pub symbol: String,
    pub company_name: String,
    pub shares: Decimal,
    pub average_cost: Decimal,
}

impl MergedPosition {
    pub fn cost_basis(&self) -> Decimal {
        self.shares * self.average_cost
    }
}
