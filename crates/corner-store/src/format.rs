//! # Catalog File Format
//!
//! Encode/decode for the line-oriented catalog file.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One product per line, eight comma-separated fields, fixed order:       │
//! │                                                                         │
//! │  id, name, category, stock, usual price, end date, percent, status      │
//! │                                                                         │
//! │  B1, Cola, Beverages, 50, 2.50, 05-Mar-2026, 10, Active                 │
//! │  S1, Salted Chips, Snacks, 8, 1.20, 01-Jan-2026, 0, Active              │
//! │                                                                         │
//! │  • Fields are trimmed on parse ("B1 , Cola" reads the same as "B1,Cola")│
//! │  • Dates are dd-MMM-yyyy with English month abbreviations               │
//! │  • Prices are written rounded to two decimals                           │
//! │  • Blank lines are ignored; any other malformed line rejects the FILE   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract With Validation
//! The serializer guards the characters that would corrupt line structure
//! (commas and line breaks inside fields). Value ranges are enforced twice:
//! here on decode, and at the repository boundary on add/update. A record
//! that passed either check round-trips through this codec.

use chrono::NaiveDate;

use corner_core::money::Money;
use corner_core::validation::{validate_product_id, validate_text_field};
use corner_core::ProductRecord;

use crate::error::{StoreError, StoreResult};

/// Number of comma-separated fields on a catalog line.
pub const FIELD_COUNT: usize = 8;

/// Date format for discount end dates ("05-Mar-2026").
pub const DATE_FORMAT: &str = "%d-%b-%Y";

// =============================================================================
// Encoding
// =============================================================================

/// Encodes one record as a catalog line (no trailing newline).
///
/// ## Errors
/// Fails if a textual field contains a comma or line break, or the id is
/// empty. Writing such a record would produce a line that parses back into
/// something else, so it is refused outright.
pub fn product_to_line(record: &ProductRecord) -> StoreResult<String> {
    validate_product_id(&record.id)?;
    validate_text_field("name", &record.name)?;
    validate_text_field("category", &record.category)?;
    validate_text_field("status", &record.status)?;

    Ok(format!(
        "{}, {}, {}, {}, {}, {}, {}, {}",
        record.id,
        record.name,
        record.category,
        record.stock,
        record.usual_price,
        record.discount_end_date.format(DATE_FORMAT),
        record.discount_percent,
        record.status,
    ))
}

/// Encodes a whole catalog, one line per record, with a trailing newline.
pub fn serialize_products(records: &[ProductRecord]) -> StoreResult<String> {
    let mut text = String::new();
    for record in records {
        text.push_str(&product_to_line(record)?);
        text.push('\n');
    }
    Ok(text)
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes one catalog line into a record.
///
/// Every field is trimmed before interpretation. Errors name the offending
/// line so a hand-edited catalog can be fixed quickly.
pub fn product_from_line(line: &str) -> StoreResult<ProductRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StoreError::parse(
            line,
            format!(
                "expected {} comma-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let stock: i64 = fields[3]
        .parse()
        .map_err(|_| StoreError::parse(line, "stock is not a whole number"))?;
    if stock < 0 {
        return Err(StoreError::parse(line, "stock must not be negative"));
    }

    let usual_price: Money = fields[4]
        .parse()
        .map_err(|e| StoreError::parse(line, format!("usual price is invalid: {e}")))?;
    if usual_price.is_negative() {
        return Err(StoreError::parse(line, "usual price must not be negative"));
    }

    let discount_end_date = NaiveDate::parse_from_str(fields[5], DATE_FORMAT)
        .map_err(|_| StoreError::parse(line, "discount end date must be dd-MMM-yyyy"))?;

    let discount_percent: u8 = fields[6].parse().map_err(|_| {
        StoreError::parse(line, "discount percent must be a whole number between 0 and 100")
    })?;
    if discount_percent > 100 {
        return Err(StoreError::parse(
            line,
            "discount percent must be a whole number between 0 and 100",
        ));
    }

    Ok(ProductRecord {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        category: fields[2].to_string(),
        stock,
        usual_price,
        discount_percent,
        discount_end_date,
        status: fields[7].to_string(),
    })
}

/// Decodes a whole catalog file.
///
/// Blank lines are skipped. The FIRST malformed line aborts the decode:
/// callers get either every record or none, never a partial catalog.
pub fn deserialize_products(text: &str) -> StoreResult<Vec<ProductRecord>> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(product_from_line(line)?);
    }
    Ok(records)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProductRecord {
        ProductRecord::new(
            "B1",
            "Cola",
            "Beverages",
            50,
            Money::from_cents(250),
            10,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            "Active",
        )
    }

    #[test]
    fn test_encode_golden_line() {
        let line = product_to_line(&sample()).unwrap();
        assert_eq!(line, "B1, Cola, Beverages, 50, 2.50, 05-Mar-2026, 10, Active");
    }

    #[test]
    fn test_decode_golden_line() {
        let record =
            product_from_line("B1, Cola, Beverages, 50, 2.50, 05-Mar-2026, 10, Active").unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_decode_trims_fields_and_accepts_tight_commas() {
        let record =
            product_from_line("  B1 ,Cola,  Beverages ,50,2.50,05-Mar-2026,10,  Active  ")
                .unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_decode_accepts_single_digit_day() {
        let record =
            product_from_line("B1, Cola, Beverages, 50, 2.50, 5-Mar-2026, 10, Active").unwrap();
        assert_eq!(
            record.discount_end_date,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let short = product_from_line("B1, Cola, Beverages").unwrap_err();
        assert!(short
            .to_string()
            .contains("expected 8 comma-separated fields, found 3"));

        // An unescaped comma in a name shows up as a ninth field
        let long =
            product_from_line("B1, Cola, Diet, Beverages, 50, 2.50, 05-Mar-2026, 10, Active")
                .unwrap_err();
        assert!(long.to_string().contains("found 9"));
    }

    #[test]
    fn test_decode_rejects_bad_numbers_and_dates() {
        let base = "B1, Cola, Beverages";

        let bad_stock = format!("{base}, lots, 2.50, 05-Mar-2026, 10, Active");
        assert!(matches!(
            product_from_line(&bad_stock).unwrap_err(),
            StoreError::Parse { .. }
        ));

        let negative_stock = format!("{base}, -3, 2.50, 05-Mar-2026, 10, Active");
        assert!(product_from_line(&negative_stock)
            .unwrap_err()
            .to_string()
            .contains("stock must not be negative"));

        let bad_price = format!("{base}, 50, 2.5x, 05-Mar-2026, 10, Active");
        assert!(product_from_line(&bad_price)
            .unwrap_err()
            .to_string()
            .contains("usual price is invalid"));

        let negative_price = format!("{base}, 50, -2.50, 05-Mar-2026, 10, Active");
        assert!(product_from_line(&negative_price)
            .unwrap_err()
            .to_string()
            .contains("usual price must not be negative"));

        let bad_date = format!("{base}, 50, 2.50, 2026-03-05, 10, Active");
        assert!(product_from_line(&bad_date)
            .unwrap_err()
            .to_string()
            .contains("dd-MMM-yyyy"));

        let bad_percent = format!("{base}, 50, 2.50, 05-Mar-2026, 150, Active");
        assert!(product_from_line(&bad_percent)
            .unwrap_err()
            .to_string()
            .contains("between 0 and 100"));
    }

    #[test]
    fn test_deserialize_skips_blank_lines() {
        let text = "\nB1, Cola, Beverages, 50, 2.50, 05-Mar-2026, 10, Active\n\n   \n";
        let records = deserialize_products(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "B1");
    }

    #[test]
    fn test_deserialize_aborts_on_first_bad_line() {
        let text = "B1, Cola, Beverages, 50, 2.50, 05-Mar-2026, 10, Active\n\
                    broken line\n\
                    S1, Chips, Snacks, 20, 1.20, 01-Jan-2026, 0, Active\n";
        let err = deserialize_products(text).unwrap_err();
        assert!(err.to_string().contains("broken line"));
    }

    #[test]
    fn test_serialize_round_trips_a_catalog() {
        let records = vec![
            sample(),
            ProductRecord::new(
                "S1",
                "Salted Chips",
                "Snacks",
                8,
                Money::from_cents(120),
                0,
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                "Inactive",
            ),
        ];

        let text = serialize_products(&records).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(deserialize_products(&text).unwrap(), records);
    }

    #[test]
    fn test_serialize_refuses_fields_the_format_cannot_carry() {
        let mut bad = sample();
        bad.name = "Cola, Diet".to_string();
        assert!(matches!(
            product_to_line(&bad).unwrap_err(),
            StoreError::Core(_)
        ));

        let mut bad = sample();
        bad.category = "Bev\nerages".to_string();
        assert!(product_to_line(&bad).is_err());

        let mut bad = sample();
        bad.id = "  ".to_string();
        assert!(product_to_line(&bad).is_err());
    }
}
