//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with explicit not-found outcomes
//! - Dual-mode keyword search (id-or-name / name)
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Keyword Search Works                             │
//! │                                                                         │
//! │  User types: "7"                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchKeyword::classify ──► IdOrName { id: 7, text: "7" }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT ... WHERE id = ?2 OR instr(lower(name), lower(?1)) > 0          │
//! │                  ?1 = "7"   ?2 = 7      (both bound, never spliced)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                            │
//! │  │ products                                │                            │
//! │  │  7 | Gadget       │ ← MATCH (id)        │                            │
//! │  │  9 | Model 7 Fan  │ ← MATCH (name)      │                            │
//! │  │ 12 | Widget       │                     │                            │
//! │  └─────────────────────────────────────────┘                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results ordered by id, each row once                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{NewProduct, Product, ProductId, SearchKeyword};

/// How names are compared during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCase {
    /// ASCII letters match regardless of case (`"wid"` finds `"Widget"`).
    /// Non-ASCII letters compare exactly, since SQLite's `lower` folds
    /// ASCII only.
    #[default]
    Insensitive,

    /// Exact substring test (`"wid"` does not find `"Widget"`).
    Sensitive,
}

const SELECT_ALL: &str = "SELECT id, name, quantity, price FROM products ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, name, quantity, price FROM products WHERE id = ?1";

// instr rather than LIKE: no wildcard syntax and no pattern length limit
const SEARCH_NAME_FOLDED: &str = r"
    SELECT id, name, quantity, price
    FROM products
    WHERE instr(lower(name), lower(?1)) > 0
    ORDER BY id
";

const SEARCH_ID_OR_NAME_FOLDED: &str = r"
    SELECT id, name, quantity, price
    FROM products
    WHERE id = ?2 OR instr(lower(name), lower(?1)) > 0
    ORDER BY id
";

const SEARCH_NAME_INSTR: &str = r"
    SELECT id, name, quantity, price
    FROM products
    WHERE instr(name, ?1) > 0
    ORDER BY id
";

const SEARCH_ID_OR_NAME_INSTR: &str = r"
    SELECT id, name, quantity, price
    FROM products
    WHERE id = ?2 OR instr(name, ?1) > 0
    ORDER BY id
";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let added = repo.insert(&NewProduct::new("Widget", 10, 2.5)).await?;
/// let found = repo.get_by_id(added.id).await?;
/// let hits = repo.search("Wid").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
    search_case: SearchCase,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool, search_case: SearchCase) -> Self {
        ProductRepository { pool, search_case }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row: the assigned id plus the fields exactly
    ///   as given
    /// * `Err(DbError::WriteFailed)` - The INSERT could not execute
    ///
    /// Any name, quantity and finite or infinite price is stored. A NaN price
    /// is the exception: SQLite binds it as NULL, so `price NOT NULL` rejects
    /// the row with `WriteFailed`.
    ///
    /// Ids come from `AUTOINCREMENT`, so they only grow and are never reused,
    /// even after deletes.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(DbError::write)?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");

        Ok(Product::from_new(id, product.clone()))
    }

    /// Lists every product, ordered by id.
    ///
    /// An empty table yields an empty vector.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No row has this id
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Searches products by keyword.
    ///
    /// ## Matching
    /// - All-digit keyword: `id` equals its value, OR `name` contains it
    /// - Anything else: `name` contains it
    /// - Empty keyword: no results, no query issued
    ///
    /// `%`, `_`, quotes and backslashes in the keyword match literally.
    /// Results are ordered by id and never repeat a row.
    pub async fn search(&self, keyword: &str) -> DbResult<Vec<Product>> {
        let classified = SearchKeyword::classify(keyword);

        debug!(keyword = %keyword, mode = ?classified, "Searching products");

        let Some(text) = classified.text() else {
            return Ok(Vec::new());
        };

        let sql = match (&classified, self.search_case) {
            (SearchKeyword::IdOrName { .. }, SearchCase::Insensitive) => SEARCH_ID_OR_NAME_FOLDED,
            (SearchKeyword::IdOrName { .. }, SearchCase::Sensitive) => SEARCH_ID_OR_NAME_INSTR,
            (_, SearchCase::Insensitive) => SEARCH_NAME_FOLDED,
            (_, SearchCase::Sensitive) => SEARCH_NAME_INSTR,
        };

        let mut query = sqlx::query_as::<_, Product>(sql).bind(text);
        if let SearchKeyword::IdOrName { id, .. } = classified {
            query = query.bind(id);
        }

        let products = query.fetch_all(&self.pool).await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Returns the first search hit for a keyword.
    ///
    /// Lets a front-end pick an edit or delete target from whatever the user
    /// typed, id or name.
    pub async fn resolve(&self, keyword: &str) -> DbResult<Option<Product>> {
        Ok(self.search(keyword).await?.into_iter().next())
    }

    /// Overwrites name, quantity and price of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly one row changed
    /// * `Err(DbError::NotFound)` - No row has `product.id`
    /// * `Err(DbError::WriteFailed)` - The UPDATE could not execute
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                quantity = ?3,
                price = ?4
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .execute(&self.pool)
        .await
        .map_err(DbError::write)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - The row was removed
    /// * `Err(DbError::NotFound)` - No row has this id
    /// * `Err(DbError::WriteFailed)` - The DELETE could not execute
    pub async fn delete(&self, id: ProductId) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::write)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
