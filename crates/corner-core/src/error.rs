//! # Error Types
//!
//! Domain-specific error types for corner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  corner-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  corner-store errors (separate crate)                                   │
//! │  └── StoreError       - Catalog parse and storage failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, counts, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product with the same id (case-insensitive) already exists.
    ///
    /// ## When This Occurs
    /// - Adding a catalog entry whose id collides with an existing one
    /// - Updating a product to an id another product already holds
    #[error("Product id '{id}' already exists")]
    DuplicateId { id: String },

    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist in the catalog
    /// - Product exists but is not Active when an operation requires it
    /// - Product was removed between being carted and being priced
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// Product exists but has zero stock.
    #[error("Product {id} is out of stock")]
    OutOfStock { id: String },

    /// Requested quantity is outside the acceptable range.
    ///
    /// ## When This Occurs
    /// - Adding to the cart with a quantity of zero or less
    /// - Removing more of a product than the cart holds
    /// - A stock delta or line total that overflows its counter
    #[error("Invalid quantity {requested}: {reason}")]
    InvalidQuantity { requested: i64, reason: String },

    /// Insufficient stock to satisfy the requested quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { id: "B1", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 of B1 in stock"
    /// ```
    #[error("Insufficient stock for {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        available: i64,
        requested: i64,
    },

    /// The product has no entry in the cart.
    #[error("Product {id} is not in the cart")]
    NotInCart { id: String },

    /// Checkout was attempted on a cart with no entries.
    #[error("Cart is empty")]
    CartEmpty,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a candidate product record doesn't meet
/// requirements. Used for early validation before catalog mutations run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field contains a character the catalog file format cannot carry.
    #[error("{field} must not contain {found:?}")]
    ReservedCharacter { field: String, found: char },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
