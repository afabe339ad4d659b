//! # Cart Module
//!
//! Pure bookkeeping for the shopping cart.
//!
//! ## What the Cart Does NOT Know
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Responsibility Split                          │
//! │                                                                         │
//! │  Cart (this module)            CartService (corner-store)              │
//! │  ──────────────────            ───────────────────────────              │
//! │  product ids + quantities      stock checks against the catalog        │
//! │  replace-on-insert rule        pricing (always re-read live)           │
//! │  remove/decrement rule         checkout and receipts                   │
//! │                                                                         │
//! │  The cart never stores prices or stock. A price change between         │
//! │  adding and checkout is always reflected in the totals.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (compared case-insensitively)
//! - `insert` REPLACES the quantity of an existing line, it never accumulates
//! - A line decremented to zero quantity is retained, not dropped; only
//!   `clear` empties the cart

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product reference and a requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id as stored in the catalog.
    pub product_id: String,

    /// Requested quantity. May be zero after decrements; never negative.
    pub quantity: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of product/quantity lines.
///
/// Lines keep their insertion order, which is what receipt rendering uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Sets the quantity for a product, replacing any existing line.
    ///
    /// ## Behavior
    /// Mirrors `HashMap::insert`: if the product already has a line, its
    /// quantity is OVERWRITTEN with the new value (not added to it) and the
    /// previous quantity is returned. Re-carting three of something that
    /// already had two carted means the cart holds three, not five.
    pub fn insert(&mut self, product_id: &str, quantity: i64) -> Option<i64> {
        if let Some(line) = self.line_mut(product_id) {
            let previous = line.quantity;
            line.quantity = quantity;
            return Some(previous);
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity,
        });
        None
    }

    /// Decrements a product's carted quantity.
    ///
    /// ## Errors
    /// - [`CoreError::NotInCart`] if the product has no line (a zero-quantity
    ///   line still counts as present)
    /// - [`CoreError::InvalidQuantity`] if `quantity` is zero or less, or
    ///   greater than the carted quantity
    ///
    /// ## Returns
    /// The quantity remaining on the line. A line that reaches zero stays in
    /// the cart.
    pub fn remove(&mut self, product_id: &str, quantity: i64) -> CoreResult<i64> {
        let line = match self.line_mut(product_id) {
            Some(line) => line,
            None => {
                return Err(CoreError::NotInCart {
                    id: product_id.to_string(),
                })
            }
        };

        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
                reason: "must be greater than zero".to_string(),
            });
        }
        if quantity > line.quantity {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
                reason: format!("only {} in the cart", line.quantity),
            });
        }

        line.quantity -= quantity;
        Ok(line.quantity)
    }

    /// Returns the carted quantity for a product, if it has a line.
    pub fn quantity_of(&self, product_id: &str) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.product_id.eq_ignore_ascii_case(product_id))
            .map(|l| l.quantity)
    }

    /// Returns all cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of lines (including zero-quantity ones).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart has no lines at all.
    ///
    /// A cart whose lines were all decremented to zero is NOT empty; the
    /// entries remain until `clear` is called.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.product_id.eq_ignore_ascii_case(product_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
