//! # Domain Types
//!
//! The product record tracked by the inventory store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌─────────────────┐                │
//! │  │   NewProduct    │   insert()      │     Product     │                │
//! │  │  ─────────────  │  ───────────►   │  ─────────────  │                │
//! │  │  name           │  store assigns  │  id (i64)       │                │
//! │  │  quantity       │  the id         │  name           │                │
//! │  │  price          │                 │  quantity       │                │
//! │  └─────────────────┘                 │  price          │                │
//! │                                      └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Validation Here
//! Any name, quantity and price combination is a valid record as far as the
//! store is concerned. Range and emptiness checks belong to the front-end.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Store-assigned product identifier (SQLite rowid).
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product row as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned on insert and never changed.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Builds a stored product from its assigned id and the inserted fields.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Product {
            id,
            name: new.name,
            quantity: new.quantity,
            price: new.price,
        }
    }

    /// Returns the mutable fields, without the id.
    pub fn fields(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Fields of a product that has not been stored yet.
///
/// There is no `id` field: the store picks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    /// Creates a new product record.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
