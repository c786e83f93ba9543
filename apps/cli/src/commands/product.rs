//! # Product Commands
//!
//! CRUD and search over the store, one JSON object per output line.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  inventory search 7                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().search("7")                                              │
//! │       │   id = 7  OR  name contains "7"                                 │
//! │       ▼                                                                 │
//! │  {"id":7,"name":"Gadget","quantity":3,"price":4.0}                      │
//! │  {"id":9,"name":"Model 7 Fan","quantity":1,"price":20.0}                │
//! │                                                                         │
//! │  No matches → no lines, exit 0                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::json;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

use super::write_json;
use crate::error::CliError;
use crate::ProductFields;
use inventory_core::{NewProduct, Product, ProductId};
use inventory_db::Database;

impl From<ProductFields> for NewProduct {
    fn from(fields: ProductFields) -> Self {
        NewProduct::new(fields.name, fields.quantity, fields.price)
    }
}

fn write_products<W: Write>(out: &mut W, products: &[Product]) -> Result<(), CliError> {
    for product in products {
        write_json(out, product)?;
    }
    Ok(())
}

/// Inserts a product and prints the stored row, id included.
pub async fn add<W: Write>(db: &Database, fields: ProductFields, out: &mut W) -> Result<(), CliError> {
    let product = db.products().insert(&fields.into()).await?;
    info!(id = product.id, "Product added");
    write_json(out, &product)
}

/// Prints every product.
pub async fn list<W: Write>(db: &Database, out: &mut W) -> Result<(), CliError> {
    let products = db.products().list_all().await?;
    write_products(out, &products)
}

/// Prints one product by id.
pub async fn get<W: Write>(db: &Database, id: ProductId, out: &mut W) -> Result<(), CliError> {
    debug!(id, "get command");
    let product = db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| CliError::not_found("Product", id))?;
    write_json(out, &product)
}

/// Prints the first product matching `keyword`.
pub async fn find<W: Write>(db: &Database, keyword: &str, out: &mut W) -> Result<(), CliError> {
    debug!(keyword = %keyword, "find command");
    let product = db
        .products()
        .resolve(keyword)
        .await?
        .ok_or_else(|| CliError::not_found("Product", format!("'{}'", keyword)))?;
    write_json(out, &product)
}

/// Prints every product matching `keyword`.
pub async fn search<W: Write>(db: &Database, keyword: &str, out: &mut W) -> Result<(), CliError> {
    let start = Instant::now();

    let products = db.products().search(keyword).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        keyword = %keyword,
        "search complete"
    );

    write_products(out, &products)
}

/// Overwrites a product's fields and prints the new row.
pub async fn update<W: Write>(
    db: &Database,
    id: ProductId,
    fields: ProductFields,
    out: &mut W,
) -> Result<(), CliError> {
    let product = Product::from_new(id, fields.into());
    db.products().update(&product).await?;
    info!(id, "Product updated");
    write_json(out, &product)
}

/// Deletes a product and prints its id.
pub async fn delete<W: Write>(db: &Database, id: ProductId, out: &mut W) -> Result<(), CliError> {
    db.products().delete(id).await?;
    info!(id, "Product deleted");
    write_json(out, &json!({ "deleted": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inventory_db::DbConfig;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn fields(name: &str, quantity: i64, price: f64) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_add_prints_assigned_id() {
        let db = db().await;
        let mut out = Vec::<u8>::new();

        add(&db, fields("Widget", 10, 2.5), &mut out).await.unwrap();

        assert_eq!(output(out), "{\"id\":1,\"name\":\"Widget\",\"quantity\":10,\"price\":2.5}\n");
    }

    #[tokio::test]
    async fn test_list_and_search_print_lines() {
        let db = db().await;
        add(&db, fields("Widget", 1, 1.0), &mut Vec::<u8>::new()).await.unwrap();
        add(&db, fields("Gadget", 2, 2.0), &mut Vec::<u8>::new()).await.unwrap();

        let mut out = Vec::<u8>::new();
        list(&db, &mut out).await.unwrap();
        assert_eq!(output(out).lines().count(), 2);

        let mut out = Vec::<u8>::new();
        search(&db, "gad", &mut out).await.unwrap();
        assert_eq!(output(out), "{\"id\":2,\"name\":\"Gadget\",\"quantity\":2,\"price\":2.0}\n");

        let mut out = Vec::<u8>::new();
        search(&db, "Sprocket", &mut out).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_find_uses_first_hit() {
        let db = db().await;
        add(&db, fields("Widget", 1, 1.0), &mut Vec::<u8>::new()).await.unwrap();
        add(&db, fields("Widgetron", 1, 1.0), &mut Vec::<u8>::new()).await.unwrap();

        let mut out = Vec::<u8>::new();
        find(&db, "widget", &mut out).await.unwrap();
        assert!(output(out).contains("\"name\":\"Widget\""));

        let err = find(&db, "nothing", &mut Vec::<u8>::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let db = db().await;

        let err = update(&db, 42, fields("Ghost", 1, 1.0), &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = delete(&db, 42, &mut Vec::<u8>::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_prints_id() {
        let db = db().await;
        add(&db, fields("Widget", 1, 1.0), &mut Vec::<u8>::new()).await.unwrap();

        let mut out = Vec::<u8>::new();
        delete(&db, 1, &mut out).await.unwrap();
        assert_eq!(output(out), "{\"deleted\":1}\n");
    }
}
