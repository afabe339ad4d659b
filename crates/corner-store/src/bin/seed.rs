//! # Seed Catalog Generator
//!
//! Populates a catalog file with test products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default) into ./products.txt
//! cargo run -p corner-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p corner-store --bin seed -- --count 100
//!
//! # Specify catalog path
//! cargo run -p corner-store --bin seed -- --path ./data/products.txt
//! ```
//!
//! ## Generated Products
//! Creates realistic product data across categories:
//! - Beverages (sodas, water, juice)
//! - Snacks (chips, candy, biscuits)
//! - Dairy (milk, cheese, yogurt)
//! - Household (cleaning, paper goods)
//! - Stationery (pens, paper, tape)
//!
//! Each product has:
//! - Unique id: `{CATEGORY LETTER}{INDEX}` (B1, S7, ...)
//! - Deterministic price: 0.99 - 19.99
//! - Deterministic stock: 0 - 100 (some land at or below the
//!   replenishment threshold so the first load demonstrates the sweep)
//! - Discount: 0%, 5%, 10%, 15% or 25%, ending within ~3 months
//! - Mostly Active, an occasional Inactive record

use std::env;
use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Utc};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use corner_core::{Money, ProductRecord, LOW_STOCK_THRESHOLD};
use corner_store::FileStore;

/// Product categories for realistic test data
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "B",
        "Beverages",
        &[
            "Cola", "Diet Cola", "Lemon Soda", "Orange Soda", "Ginger Ale", "Sparkling Water",
            "Still Water", "Apple Juice", "Orange Juice", "Mango Juice", "Iced Tea", "Lemonade",
        ],
    ),
    (
        "S",
        "Snacks",
        &[
            "Salted Crisps", "Cheese Puffs", "Tortilla Chips", "Salted Peanuts", "Trail Mix",
            "Chocolate Bar", "Gummy Bears", "Digestive Biscuits", "Shortbread", "Crackers",
            "Popcorn", "Pretzels",
        ],
    ),
    (
        "D",
        "Dairy",
        &[
            "Whole Milk", "Semi-Skimmed Milk", "Butter", "Cheddar Block", "Mozzarella",
            "Greek Yogurt", "Plain Yogurt", "Sour Cream", "Double Cream", "Eggs Dozen",
            "Cottage Cheese", "Cream Cheese",
        ],
    ),
    (
        "H",
        "Household",
        &[
            "Dish Soap", "Laundry Powder", "Bleach", "Sponges", "Paper Towels", "Toilet Paper",
            "Bin Bags", "Glass Cleaner", "Air Freshener", "Matches", "Candles", "Batteries AA",
        ],
    ),
    (
        "T",
        "Stationery",
        &[
            "Ballpoint Pen", "Pencil Pack", "Notebook A5", "Sticky Notes", "Envelopes",
            "Printer Paper", "Sticky Tape", "Scissors", "Stapler", "Paper Clips", "Marker Pen",
            "Eraser",
        ],
    ),
];

/// Whole-number discount percentages; zeros keep most of the catalog at
/// full price.
const DISCOUNT_PERCENTS: &[u8] = &[0, 0, 0, 5, 10, 15, 25];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut path = PathBuf::from("./products.txt");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--path" | "-p" => {
                if i + 1 < args.len() {
                    path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Corner POS Seed Catalog Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -p, --path <PATH>  Catalog file path (default: ./products.txt)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Corner POS Seed Catalog Generator");
    println!("====================================");
    println!("Catalog:  {}", path.display());
    println!("Products: {}", count);
    println!();

    let store = FileStore::new(&path);

    // Check existing catalog
    if store.exists() {
        let existing = store.load()?;
        if !existing.is_empty() {
            println!("⚠ Catalog already has {} products", existing.len());
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the catalog file to regenerate.");
            return Ok(());
        }
    }

    // Generate products
    println!("Generating products...");

    let today = Utc::now().date_naive();
    let mut records = Vec::with_capacity(count);

    'outer: for (letter, category, names) in CATEGORIES {
        for (index, name) in names.iter().enumerate() {
            if records.len() >= count {
                break 'outer;
            }
            records.push(generate_product(
                letter,
                category,
                name,
                index + 1,
                today,
                records.len(),
            ));
        }
    }

    store.save(&records)?;

    let low = records
        .iter()
        .filter(|r| r.stock <= LOW_STOCK_THRESHOLD)
        .count();
    let inactive = records.iter().filter(|r| !r.is_active()).count();

    println!();
    println!("✓ Wrote {} products to {}", records.len(), path.display());
    println!("  {} inactive", inactive);
    println!(
        "  {} at or below the replenishment threshold (restocked on first load)",
        low
    );

    // Verify the file round-trips
    println!();
    println!("Verifying catalog file...");
    let reread = store.load()?;
    println!("  Re-read {} products", reread.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic pseudo-random data.
fn generate_product(
    letter: &str,
    category: &str,
    name: &str,
    index: usize,
    today: NaiveDate,
    seed: usize,
) -> ProductRecord {
    let id = format!("{}{}", letter, index);

    // Price 0.99 - 19.99
    let cents = 99 + ((seed * 37) % 1_901) as i64;

    // Stock 0 - 100; every few products land low on purpose
    let stock = ((seed * 13) % 101) as i64;

    let discount_percent = DISCOUNT_PERCENTS[seed % DISCOUNT_PERCENTS.len()];

    // Discounts run out over the coming weeks
    let discount_end_date = today + Duration::days((7 + (seed % 12) * 7) as i64);

    let status = if seed % 12 == 11 { "Inactive" } else { "Active" };

    ProductRecord::new(
        id,
        name,
        category,
        stock,
        Money::from_cents(cents),
        discount_percent,
        discount_end_date,
        status,
    )
}

/// Initializes logging for the seeder.
///
/// Respects `RUST_LOG` when set; otherwise INFO with store debug output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,corner_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
