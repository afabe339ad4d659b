//! # Validation Module
//!
//! Input validation for candidate product records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog file parse (corner-store)                             │
//! │  ├── Field count, number and date formats                               │
//! │  └── Rejects the whole file on the first bad line                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called before repository mutations)              │
//! │  ├── Required fields, ranges                                            │
//! │  └── Reserved characters the file format cannot carry                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository rules (corner-store)                               │
//! │  └── Case-insensitive id uniqueness                                     │
//! │                                                                         │
//! │  A record that passes all three layers round-trips through the          │
//! │  catalog file without corruption.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use corner_core::validation::{validate_product_id, validate_discount_percent};
//!
//! validate_product_id("B1").unwrap();
//! validate_discount_percent(15).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ProductRecord;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Characters the line-oriented catalog format cannot carry inside a field.
///
/// Commas are the field separator; carriage returns and newlines are the
/// record separator. Rejecting them here keeps every serialized field
/// parseable back into the same value.
pub const RESERVED_CHARACTERS: [char; 3] = [',', '\r', '\n'];

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must not contain reserved characters
///
/// Uniqueness against the catalog is a repository rule, not checked here.
///
/// ## Example
/// ```rust
/// use corner_core::validation::validate_product_id;
///
/// assert!(validate_product_id("B1").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("B,1").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    validate_text_field("product id", id)
}

/// Validates a free-text field (name, category, status).
///
/// ## Rules
/// - May be empty
/// - Must not contain reserved characters
pub fn validate_text_field(field: &'static str, value: &str) -> ValidationResult<()> {
    if let Some(found) = value.chars().find(|c| RESERVED_CHARACTERS.contains(c)) {
        return Err(ValidationError::ReservedCharacter {
            field: field.to_string(),
            found,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive (whole percents only)
pub fn validate_discount_percent(percent: u8) -> ValidationResult<()> {
    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use corner_core::money::Money;
/// use corner_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "usual price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be zero or greater
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates every field of a candidate catalog record.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Catalog: Add / Update Product                                          │
/// │                                                                         │
/// │  Candidate record arrives from an entry form                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_record(&record) ← THIS FUNCTION                               │
/// │       │                                                                 │
/// │       ├── id empty?          → Error: "product id is required"          │
/// │       ├── field has ','?     → Error: "name must not contain ','"       │
/// │       ├── stock < 0?         → Error: "stock must not be negative"      │
/// │       ├── price < 0?         → Error: "usual price must not be negative"│
/// │       ├── percent > 100?     → Error: "discount percent must be..."     │
/// │       │                                                                 │
/// │       └── OK → repository checks id uniqueness, then persists           │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_record(record: &ProductRecord) -> ValidationResult<()> {
    validate_product_id(&record.id)?;
    validate_text_field("name", &record.name)?;
    validate_text_field("category", &record.category)?;
    validate_text_field("status", &record.status)?;
    validate_stock(record.stock)?;
    validate_price(record.usual_price)?;
    validate_discount_percent(record.discount_percent)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
