//! # Seed Data Generator
//!
//! Populates an empty store with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! inventory seed
//!
//! # Generate custom amount into a specific file
//! inventory --db ./data/dev.db seed --count 100
//! ```
//!
//! ## Generated Products
//! Names are `{item} {variant}` across a few workshop categories, e.g.
//! `"Hex Bolt M8"`. Quantities run 0-100, prices 0.99-19.99.
//!
//! Every name is unique, so at most [`capacity`] products (224) can be
//! generated. A larger `--count` is capped with a warning.

use clap::Args;
use serde_json::json;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

use super::write_json;
use crate::error::CliError;
use inventory_core::NewProduct;
use inventory_db::Database;

#[derive(Debug, Clone, Args)]
pub struct SeedArgs {
    /// Number of products to generate
    #[arg(short, long, default_value_t = 200)]
    pub count: usize,
}

/// Item names per category
const CATEGORIES: &[&[&str]] = &[
    &[
        "Hex Bolt",
        "Carriage Bolt",
        "Wood Screw",
        "Drywall Screw",
        "Wing Nut",
        "Lock Washer",
        "Anchor",
        "Rivet",
    ],
    &[
        "Claw Hammer",
        "Tape Measure",
        "Utility Knife",
        "Spirit Level",
        "Hand Saw",
        "Chisel",
        "Pliers",
        "Screwdriver",
    ],
    &[
        "Cable Tie",
        "Wire Nut",
        "Junction Box",
        "Light Switch",
        "Outlet Cover",
        "Fuse",
        "Extension Cord",
        "LED Bulb",
    ],
    &[
        "Wood Glue",
        "Sandpaper",
        "Paint Brush",
        "Masking Tape",
        "Caulk",
        "Primer",
        "Wood Stain",
        "Putty",
    ],
];

/// Variants with a price addon in cents
const VARIANTS: &[(&str, i64)] = &[
    ("M6", 0),
    ("M8", 25),
    ("M10", 50),
    ("Small", 0),
    ("Large", 300),
    ("10-Pack", 450),
    ("50-Pack", 900),
];

/// Number of distinct products the generator can produce.
pub fn capacity() -> usize {
    CATEGORIES.iter().map(|items| items.len()).sum::<usize>() * VARIANTS.len()
}

/// Inserts `args.count` products unless the store already has some.
pub async fn execute<W: Write>(db: &Database, args: SeedArgs, out: &mut W) -> Result<(), CliError> {
    let repo = db.products();

    let existing = repo.count().await?;
    if existing > 0 {
        warn!(existing, "Store already has products, skipping seed");
        return write_json(out, &json!({ "seeded": 0, "existing": existing }));
    }

    let capacity = capacity();
    if args.count > capacity {
        warn!(requested = args.count, capacity, "Seed count exceeds generator capacity, capping");
    }

    let start = Instant::now();
    let mut generated = 0;

    'outer: for (category_idx, items) in CATEGORIES.iter().enumerate() {
        for (item_idx, item) in items.iter().enumerate() {
            for (variant_idx, (variant, addon)) in VARIANTS.iter().enumerate() {
                if generated >= args.count {
                    break 'outer;
                }

                let seed = category_idx * 1000 + item_idx * 20 + variant_idx;
                let product = generate_product(item, variant, *addon, seed);
                repo.insert(&product).await?;

                generated += 1;
                if generated % 100 == 0 {
                    info!(generated, "Seeding progress");
                }
            }
        }
    }

    let elapsed = start.elapsed();
    info!(
        generated,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Seed complete"
    );

    write_json(out, &json!({ "seeded": generated }))
}

/// Generates a single product with deterministic data.
fn generate_product(item: &str, variant: &str, addon_cents: i64, seed: usize) -> NewProduct {
    // Base 0.99 - 15.49, plus variant addon
    let base_cents = 99 + ((seed * 17) % 1450) as i64;
    let price = (base_cents + addon_cents).min(1999) as f64 / 100.0;

    let quantity = (seed % 101) as i64;

    NewProduct::new(format!("{} {}", item, variant), quantity, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::DbConfig;

    #[test]
    fn test_generate_product_ranges() {
        for seed in [0, 1, 57, 999, 3142] {
            let product = generate_product("Hex Bolt", "M8", 25, seed);
            assert_eq!(product.name, "Hex Bolt M8");
            assert!((0..=100).contains(&product.quantity));
            assert!(product.price >= 0.99 && product.price <= 19.99);
        }
    }

    #[tokio::test]
    async fn test_seed_inserts_requested_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::<u8>::new();

        execute(&db, SeedArgs { count: 30 }, &mut out).await.unwrap();

        assert_eq!(db.products().count().await.unwrap(), 30);
        assert_eq!(String::from_utf8(out).unwrap(), "{\"seeded\":30}\n");
        assert!(!db.products().search("Hex Bolt").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_caps_at_capacity() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::<u8>::new();

        execute(&db, SeedArgs { count: 1000 }, &mut out).await.unwrap();

        assert_eq!(capacity(), 224);
        assert_eq!(db.products().count().await.unwrap(), 224);
        let summary: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(summary, json!({ "seeded": 224 }));
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .insert(&NewProduct::new("Widget", 1, 1.0))
            .await
            .unwrap();

        let mut out = Vec::<u8>::new();
        execute(&db, SeedArgs { count: 30 }, &mut out).await.unwrap();

        assert_eq!(db.products().count().await.unwrap(), 1);
        let summary: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(summary, json!({ "seeded": 0, "existing": 1 }));
    }
}
