//! # inventory-core: Domain Types for the Inventory Store
//!
//! Pure types and rules shared by the database layer and the front-end.
//! Nothing in this crate performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (apps/cli, or any UI)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐        ┌───────────────────────┐        │   │
//! │  │   │      types       │        │        search         │        │   │
//! │  │   │  Product         │        │  SearchKeyword        │        │   │
//! │  │   │  NewProduct      │        │  classify()           │        │   │
//! │  │   └──────────────────┘        └───────────────────────┘        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                inventory-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `NewProduct`, `ProductId`
//! - [`search`] - Keyword classification
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{NewProduct, Product, SearchKeyword};
//!
//! let product = Product::from_new(1, NewProduct::new("Widget", 10, 2.5));
//! assert_eq!(product.id, 1);
//!
//! assert!(matches!(SearchKeyword::classify("1"), SearchKeyword::IdOrName { id: 1, .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod search;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use search::SearchKeyword;
pub use types::*;
