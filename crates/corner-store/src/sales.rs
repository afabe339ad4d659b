//! # Sales
//!
//! The cart-to-receipt flow: one [`CartService`] per register session,
//! sharing the catalog through an [`Inventory`] handle.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartService::checkout                            │
//! │                                                                         │
//! │  cart empty? ──── yes ──► CoreError::CartEmpty                          │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  ┌─ AllOrNothing ────────────────┐  ┌─ BestEffort ──────────────────┐   │
//! │  │ 1. validate EVERY line        │  │ per line:                     │   │
//! │  │    against current stock      │  │   sellable? enough stock?     │   │
//! │  │ 2. only then commit every     │  │     yes → commit + receipt    │   │
//! │  │    line (stock deltas)        │  │     no  → SkippedLine + warn  │   │
//! │  │ any failure → error out,      │  │ receipt totals committed      │   │
//! │  │ cart kept as-is               │  │ lines only                    │   │
//! │  └───────────────────────────────┘  └───────────────────────────────┘   │
//! │       │                                       │                         │
//! │       └──────────────► Receipt ◄──────────────┘                         │
//! │                    cart cleared                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Rule
//! The cart stores ids and quantities only. Prices are re-read from the
//! catalog at totalling and checkout time, so an update to a product's
//! price or discount between carting and paying is reflected on the
//! receipt.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use corner_core::{Cart, CoreError, CoreResult, Money};

use crate::error::{StoreError, StoreResult};
use crate::inventory::Inventory;

// =============================================================================
// Checkout Policy
// =============================================================================

/// How checkout treats a line that can no longer be fulfilled.
///
/// Lines go stale between carting and paying: another register may sell
/// the remaining stock, or a manager may retire the product. The policy
/// decides whether one stale line sinks the whole sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutPolicy {
    /// Validate every line first; commit only if all of them pass. Any
    /// stale line fails the checkout and leaves the cart untouched.
    #[default]
    AllOrNothing,

    /// Commit the lines that still work, record the rest as skipped on
    /// the receipt, and charge for what went through.
    BestEffort,
}

impl fmt::Display for CheckoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutPolicy::AllOrNothing => write!(f, "all-or-nothing"),
            CheckoutPolicy::BestEffort => write!(f, "best-effort"),
        }
    }
}

/// Error returned when a checkout policy string is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown checkout policy (expected 'all-or-nothing' or 'best-effort')")]
pub struct ParsePolicyError;

impl FromStr for CheckoutPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-or-nothing" | "all_or_nothing" => Ok(CheckoutPolicy::AllOrNothing),
            "best-effort" | "best_effort" => Ok(CheckoutPolicy::BestEffort),
            _ => Err(ParsePolicyError),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One sold line on a receipt, priced at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product id in catalog casing.
    pub product_id: String,

    /// Product name at the moment of sale.
    pub name: String,

    /// Units sold.
    pub quantity: i64,

    /// Effective (discounted) unit price at the moment of sale.
    pub unit_price: Money,

    /// `unit_price` times `quantity`, at full internal precision.
    pub line_total: Money,
}

/// A cart line checkout could not fulfil under [`CheckoutPolicy::BestEffort`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// Product id as it was carted.
    pub product_id: String,

    /// Units the shopper wanted.
    pub quantity: i64,

    /// Human-readable reason the line was skipped.
    pub reason: String,
}

/// The durable record of one completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Random unique receipt identifier.
    pub id: String,

    /// When the checkout completed.
    pub created_at: DateTime<Utc>,

    /// The committed lines, in cart order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of the committed line totals. Skipped lines contribute nothing.
    pub grand_total: Money,

    /// Lines dropped by the best-effort policy; always empty under
    /// all-or-nothing.
    pub skipped: Vec<SkippedLine>,
}

impl Receipt {
    fn issue(lines: Vec<ReceiptLine>, skipped: Vec<SkippedLine>) -> Self {
        let grand_total = lines
            .iter()
            .fold(Money::zero(), |total, line| total + line.line_total);
        Receipt {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            lines,
            grand_total,
            skipped,
        }
    }
}

// =============================================================================
// Cart Service
// =============================================================================

/// One register session: a cart plus the shared catalog it sells from.
///
/// ## Usage
/// ```rust,no_run
/// use corner_store::config::StoreConfig;
/// use corner_store::inventory::Inventory;
/// use corner_store::sales::CartService;
///
/// let inventory = Inventory::open(&StoreConfig::from_env())?;
/// let mut register = CartService::new(inventory);
///
/// register.add_item("B1", 2)?;
/// let receipt = register.checkout()?;
/// println!("total {}", receipt.grand_total);
/// # Ok::<(), corner_store::error::StoreError>(())
/// ```
pub struct CartService {
    inventory: Inventory,
    cart: Cart,
    policy: CheckoutPolicy,
}

impl CartService {
    /// Creates a session with the default [`CheckoutPolicy::AllOrNothing`].
    pub fn new(inventory: Inventory) -> Self {
        CartService::with_policy(inventory, CheckoutPolicy::default())
    }

    /// Creates a session with an explicit checkout policy.
    pub fn with_policy(inventory: Inventory, policy: CheckoutPolicy) -> Self {
        CartService {
            inventory,
            cart: Cart::new(),
            policy,
        }
    }

    /// The session's checkout policy.
    pub fn policy(&self) -> CheckoutPolicy {
        self.policy
    }

    /// Read access to the cart (lines, quantities, emptiness).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Puts a product in the cart at the given quantity.
    ///
    /// This SETS the line quantity rather than accumulating: carting "B1" at
    /// 2 and then at 3 leaves one line of 3. The stored line uses the
    /// catalog's casing of the id, whatever casing the caller typed.
    ///
    /// Stock is checked against the catalog now, as a courtesy; the binding
    /// check happens again at checkout.
    ///
    /// ## Errors
    /// In precedence order:
    /// - `CoreError::NotFound` if the id is unknown OR the product is not
    ///   active (inactive products are indistinguishable from absent ones
    ///   at the register)
    /// - `CoreError::OutOfStock` if the product has zero stock
    /// - `CoreError::InvalidQuantity` if `quantity` is zero or negative
    /// - `CoreError::InsufficientStock` if `quantity` exceeds current stock
    pub fn add_item(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        let (canonical_id, stock) = self
            .inventory
            .with(|repo| {
                repo.get_active(product_id)
                    .map(|record| (record.id.clone(), record.stock))
            })
            .ok_or_else(|| CoreError::NotFound {
                id: product_id.to_string(),
            })?;

        if stock == 0 {
            return Err(CoreError::OutOfStock { id: canonical_id });
        }
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
                reason: "must be greater than zero".to_string(),
            });
        }
        if quantity > stock {
            return Err(CoreError::InsufficientStock {
                id: canonical_id,
                available: stock,
                requested: quantity,
            });
        }

        debug!(id = %canonical_id, quantity, "Carted item");
        self.cart.insert(&canonical_id, quantity);
        Ok(())
    }

    /// Takes some quantity of a product back out of the cart.
    ///
    /// A line that reaches zero stays in the cart at quantity zero; it shows
    /// up on the receipt as a zero-total line rather than disappearing.
    ///
    /// ## Errors
    /// - `CoreError::NotInCart` if the product has no cart line
    /// - `CoreError::InvalidQuantity` if `quantity` is not positive or
    ///   exceeds the carted quantity
    ///
    /// ## Returns
    /// The quantity remaining on the line.
    pub fn remove_item(&mut self, product_id: &str, quantity: i64) -> CoreResult<i64> {
        let remaining = self.cart.remove(product_id, quantity)?;
        debug!(id = %product_id, quantity, remaining, "Uncarted quantity");
        Ok(remaining)
    }

    /// Empties the cart without selling anything (the "new sale" button).
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Prices the cart against the current catalog.
    ///
    /// Every line is re-priced at its product's effective price right now;
    /// nothing is reserved or committed. Products that went inactive after
    /// being carted still price normally here.
    ///
    /// ## Errors
    /// - `CoreError::NotFound` if a carted product has vanished from the
    ///   catalog entirely
    pub fn grand_total(&self) -> CoreResult<Money> {
        self.inventory.with(|repo| {
            let mut total = Money::zero();
            for line in self.cart.lines() {
                let record =
                    repo.get(&line.product_id)
                        .ok_or_else(|| CoreError::NotFound {
                            id: line.product_id.clone(),
                        })?;
                total += checked_line_total(record.selling_price(), line.quantity)?;
            }
            Ok(total)
        })
    }

    /// Turns the cart into a sale: decrements stock, persists the catalog,
    /// and issues a [`Receipt`].
    ///
    /// Behaviour under contention follows the session's [`CheckoutPolicy`].
    /// On success the cart is cleared; under all-or-nothing a failed
    /// checkout leaves the cart exactly as it was so the shopper can fix it
    /// and retry.
    ///
    /// ## Errors
    /// - `CoreError::CartEmpty` if there is nothing at all in the cart
    /// - under all-or-nothing, the first line failure
    ///   (`NotFound`/`InsufficientStock`)
    /// - `StoreError::Storage` if persisting the sold-down catalog fails; a
    ///   failure partway through the commits can leave earlier lines sold,
    ///   and the kept cart is the operator's record for reconciling
    pub fn checkout(&mut self) -> StoreResult<Receipt> {
        if self.cart.is_empty() {
            return Err(CoreError::CartEmpty.into());
        }

        let receipt = match self.policy {
            CheckoutPolicy::AllOrNothing => self.checkout_all_or_nothing()?,
            CheckoutPolicy::BestEffort => self.checkout_best_effort()?,
        };

        self.cart.clear();
        info!(
            receipt_id = %receipt.id,
            lines = receipt.lines.len(),
            skipped = receipt.skipped.len(),
            total = %receipt.grand_total,
            "Checkout complete"
        );
        Ok(receipt)
    }

    fn checkout_all_or_nothing(&mut self) -> StoreResult<Receipt> {
        let cart_lines = self.cart.lines().to_vec();

        self.inventory.with_mut(|repo| {
            // Validate everything against current stock before touching any
            // of it. One lock scope, so no other register can interleave.
            let mut lines = Vec::with_capacity(cart_lines.len());
            for cart_line in &cart_lines {
                let record =
                    repo.get(&cart_line.product_id)
                        .ok_or_else(|| CoreError::NotFound {
                            id: cart_line.product_id.clone(),
                        })?;
                if cart_line.quantity > record.stock {
                    return Err(CoreError::InsufficientStock {
                        id: record.id.clone(),
                        available: record.stock,
                        requested: cart_line.quantity,
                    }
                    .into());
                }

                let unit_price = record.selling_price();
                let line_total = checked_line_total(unit_price, cart_line.quantity)?;
                lines.push(ReceiptLine {
                    product_id: record.id.clone(),
                    name: record.name.clone(),
                    quantity: cart_line.quantity,
                    unit_price,
                    line_total,
                });
            }

            for cart_line in &cart_lines {
                repo.adjust_stock(&cart_line.product_id, -cart_line.quantity)?;
            }

            Ok(Receipt::issue(lines, Vec::new()))
        })
    }

    fn checkout_best_effort(&mut self) -> StoreResult<Receipt> {
        let cart_lines = self.cart.lines().to_vec();

        self.inventory.with_mut(|repo| {
            let mut lines = Vec::new();
            let mut skipped = Vec::new();

            for cart_line in &cart_lines {
                let record = match repo.get(&cart_line.product_id) {
                    Some(record) => record,
                    None => {
                        warn!(id = %cart_line.product_id, "Skipping line: product not found");
                        skipped.push(SkippedLine {
                            product_id: cart_line.product_id.clone(),
                            quantity: cart_line.quantity,
                            reason: "product not found".to_string(),
                        });
                        continue;
                    }
                };

                let canonical_id = record.id.clone();
                let name = record.name.clone();
                let unit_price = record.selling_price();
                // Price before committing stock, so an unpriceable line
                // never sells anything.
                let line_total = checked_line_total(unit_price, cart_line.quantity)?;

                match repo.adjust_stock(&canonical_id, -cart_line.quantity) {
                    Ok(_) => {
                        lines.push(ReceiptLine {
                            product_id: canonical_id,
                            name,
                            quantity: cart_line.quantity,
                            unit_price,
                            line_total,
                        });
                    }
                    Err(StoreError::Core(CoreError::InsufficientStock {
                        available,
                        requested,
                        ..
                    })) => {
                        warn!(
                            id = %canonical_id,
                            available,
                            requested,
                            "Skipping line: insufficient stock"
                        );
                        skipped.push(SkippedLine {
                            product_id: canonical_id,
                            quantity: cart_line.quantity,
                            reason: format!(
                                "insufficient stock: available {available}, requested {requested}"
                            ),
                        });
                    }
                    Err(other) => return Err(other),
                }
            }

            Ok(Receipt::issue(lines, skipped))
        })
    }
}

/// Prices one receipt line, refusing totals that do not fit [`Money`].
fn checked_line_total(unit_price: Money, quantity: i64) -> CoreResult<Money> {
    unit_price
        .multiply_quantity(quantity)
        .ok_or_else(|| CoreError::InvalidQuantity {
            requested: quantity,
            reason: "line total overflows".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
