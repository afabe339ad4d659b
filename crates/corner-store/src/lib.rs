//! # Corner Store
//!
//! Catalog persistence and the sales flow for Corner POS: the plain-text
//! catalog file, the inventory repository over it, and the cart-to-receipt
//! checkout pipeline.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             corner-store                                │
//! │                                                                         │
//! │  ┌────────────┐      ┌──────────────────────┐      ┌────────────────┐   │
//! │  │ CartService│─────►│      Inventory       │─────►│   FileStore    │   │
//! │  │  (sales)   │      │ (shared repository)  │      │ (atomic file   │   │
//! │  └────────────┘      │                      │      │   rewrites)    │   │
//! │        │             │  replenishment sweep │      └───────┬────────┘   │
//! │        ▼             └──────────┬───────────┘              ▼            │
//! │    Receipt                      │               line format (format.rs) │
//! │                                 ▼                id, name, category,    │
//! │                          StockEventSink          stock, price, date,    │
//! │                      (tracing / NDJSON / test)   percent, status        │
//! │                                                                         │
//! │  StoreConfig: catalog path + checkout policy, env-overridable           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//! The whole catalog lives in memory; every mutation rewrites the whole
//! file through a temp-file-then-rename so readers never observe a torn
//! write. The file format is the fixed eight-field comma layout described
//! in [`format`].
//!
//! ## Getting Started
//! ```rust,no_run
//! use corner_store::config::StoreConfig;
//! use corner_store::inventory::Inventory;
//! use corner_store::sales::CartService;
//!
//! let config = StoreConfig::from_env();
//! let inventory = Inventory::open(&config)?;
//!
//! let mut register = CartService::with_policy(inventory, config.checkout_policy);
//! register.add_item("B1", 2)?;
//! let receipt = register.checkout()?;
//! println!("{} items for {}", receipt.lines.len(), receipt.grand_total);
//! # Ok::<(), corner_store::error::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod inventory;
pub mod sales;
pub mod store;

// Re-export the main types at the crate root
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use events::{JsonLinesSink, MemorySink, StockEvent, StockEventSink, TracingSink};
pub use inventory::{Inventory, InventoryRepository};
pub use sales::{CartService, CheckoutPolicy, Receipt, ReceiptLine, SkippedLine};
pub use store::FileStore;
