//! # corner-core: Pure Business Logic for Corner POS
//!
//! This crate is the **heart** of Corner POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Corner POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (out of scope)                    │   │
//! │  │    Catalog view ──► Entry forms ──► Cart view ──► Receipt       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 corner-store (Storage Layer)                    │   │
//! │  │    catalog file codec, repository, replenishment, checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ corner-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │   │   │
//! │  │   │  Record   │  │ discounts │  │ CartLine  │  │   checks  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductRecord and its derived predicates)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart bookkeeping (ids and quantities, nothing else)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The catalog file format and all persistence live in corner-store
//! 3. **Integer Money**: Monetary values are i64 ten-thousandths, never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use corner_core::money::Money;
//! use corner_core::types::ProductRecord;
//! use chrono::NaiveDate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1099); // 10.99
//!
//! let record = ProductRecord::new(
//!     "B1", "Cola", "Beverages", 50, price,
//!     15, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(), "Active",
//! );
//!
//! // 10.99 at 15% off = 9.3415, held exactly; cents only at display
//! assert_eq!(record.selling_price().to_string(), "9.34");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use corner_core::Money` instead of
// `use corner_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::ProductRecord;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status label that makes a product sellable (compared case-insensitively).
pub const ACTIVE_STATUS: &str = "Active";

/// Stock level at or below which a product is considered low on stock.
///
/// ## Business Reason
/// The shop runs an automatic replenishment policy: the moment any product
/// is OBSERVED at or under this threshold (after a catalog load or a stock
/// adjustment), it is restocked. There is no separate reorder workflow.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Stock level a low-stock product is reset to when replenished.
///
/// ## Business Reason
/// One fixed case size keeps the policy predictable: low stock never
/// lingers, and a replenished product always lands on the same level.
pub const REPLENISH_STOCK_LEVEL: i64 = 100;
