//! # Domain Types
//!
//! Core domain types used throughout Corner POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────────┐        ┌─────────────────────┐              │
//! │  │     ProductRecord     │        │    Cart (cart.rs)   │              │
//! │  │  ───────────────────  │        │  ─────────────────  │              │
//! │  │  id (case-insens.)    │◄───────│  CartLine           │              │
//! │  │  name, category       │  by id │    product_id       │              │
//! │  │  stock                │        │    quantity         │              │
//! │  │  usual_price (Money)  │        └─────────────────────┘              │
//! │  │  discount_percent     │                                             │
//! │  │  discount_end_date    │   The cart stores ids only; prices and      │
//! │  │  status               │   stock are always re-read from the         │
//! │  └───────────────────────┘   catalog at pricing time.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Rule
//! Product ids are compared case-insensitively everywhere: `"b1"`, `"B1"` and
//! `"b1 "` (after trimming at the parse boundary) all name the same product.
//! The stored id keeps whatever casing it was created with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{ACTIVE_STATUS, LOW_STOCK_THRESHOLD};

// =============================================================================
// Product Record
// =============================================================================

/// A catalog entry: one product the shop stocks and sells.
///
/// Construction never fails; all field validation happens at the
/// deserialization and repository boundaries (see `corner-store`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Business identifier, unique case-insensitively within a catalog.
    pub id: String,

    /// Display name shown in catalog views and on receipts.
    pub name: String,

    /// Free-text grouping label (e.g. "Beverages").
    pub category: String,

    /// Units on hand. Never negative once inside a repository.
    pub stock: i64,

    /// Undiscounted unit price.
    pub usual_price: Money,

    /// Whole-number discount percentage, 0 to 100.
    pub discount_percent: u8,

    /// Last calendar day the discount applies (exclusive).
    pub discount_end_date: NaiveDate,

    /// Lifecycle label; only `"Active"` (case-insensitive) is sellable.
    pub status: String,
}

impl ProductRecord {
    /// Creates a record with every field spelled out, in catalog field order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        usual_price: Money,
        discount_percent: u8,
        discount_end_date: NaiveDate,
        status: impl Into<String>,
    ) -> Self {
        ProductRecord {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            stock,
            usual_price,
            discount_percent,
            discount_end_date,
            status: status.into(),
        }
    }

    /// Checks whether this record's id names the given id.
    ///
    /// ## Example
    /// ```rust
    /// # use corner_core::types::ProductRecord;
    /// # use corner_core::money::Money;
    /// # use chrono::NaiveDate;
    /// let record = ProductRecord::new(
    ///     "B1", "Cola", "Beverages", 50, Money::from_cents(250),
    ///     0, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), "Active",
    /// );
    /// assert!(record.id_matches("b1"));
    /// assert!(!record.id_matches("b2"));
    /// ```
    #[inline]
    pub fn id_matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }

    /// Checks whether the product is sellable.
    ///
    /// Only the literal status `"Active"`, compared case-insensitively,
    /// counts. Any other label ("Inactive", "Discontinued", a typo) makes the
    /// product invisible to shoppers while staying in the catalog file.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(ACTIVE_STATUS)
    }

    /// Returns the effective unit price: the usual price with the discount
    /// percentage applied, at full internal precision.
    ///
    /// A `discount_percent` of zero returns the usual price unchanged. The
    /// result is NOT rounded to cents; see [`Money::cents_rounded`] for the
    /// presentation boundary.
    #[inline]
    pub fn selling_price(&self) -> Money {
        self.usual_price.percent_off(self.discount_percent)
    }

    /// Checks whether a given day falls inside the discount period.
    ///
    /// The end date is exclusive: on `discount_end_date` itself the period is
    /// already over. Note that `selling_price` applies the discount
    /// unconditionally; this predicate exists for display layers that want to
    /// label expiring promotions.
    #[inline]
    pub fn in_discount_period(&self, today: NaiveDate) -> bool {
        today < self.discount_end_date
    }

    /// Checks whether stock has reached the replenishment threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
