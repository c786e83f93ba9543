//! # Repository Module
//!
//! Database repository implementations for the inventory store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Front-end                                                              │
//! │       │                                                                 │
//! │       │  db.products().search("Wid")                                    │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── insert(&self, new_product)                                         │
//! │  ├── list_all(&self)                                                    │
//! │  ├── get_by_id(&self, id)                                               │
//! │  ├── search(&self, keyword)                                             │
//! │  ├── update(&self, product)                                             │
//! │  └── delete(&self, id)                                                  │
//! │       │                                                                 │
//! │       │  SQL Query (parameters always bound)                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search

pub mod product;
