//! # Validation Module
//!
//! Parsing and validation for everything typed at a Stockroom prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt (stockroom-cli)                                       │
//! │  └── Reads one line of text                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── parse_*: text → number / Money (rejects non-numeric input)        │
//! │  └── validate_*: range and business rules                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory                                                     │
//! │  ├── Re-validates every NewItem field                                  │
//! │  └── Uniqueness and stock checks                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_price("12.5").unwrap().cents(), 1250);
//! assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
//! assert!(parse_quantity("seven").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LENGTH` characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Basmati Rice 5kg").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an on-hand quantity (zero allowed).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    validate_non_negative("quantity", qty, MAX_ITEM_QUANTITY)
}

/// Validates a low-stock threshold (zero disables the flag).
pub fn validate_threshold(threshold: i64) -> ValidationResult<()> {
    validate_non_negative("threshold", threshold, MAX_ITEM_QUANTITY)
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_ITEM_QUANTITY`
///
/// Whether the stock covers it is checked by the inventory, not here.
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "sale quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "sale quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a signed stock adjustment.
pub fn validate_delta(delta: i64) -> ValidationResult<()> {
    if !(-MAX_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(&delta) {
        return Err(ValidationError::OutOfRange {
            field: "stock change".to_string(),
            min: -MAX_ITEM_QUANTITY,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (free items are allowed)
/// - Must not exceed `MAX_PRICE_CENTS`
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_non_negative("price", price.cents(), MAX_PRICE_CENTS)
}

fn validate_non_negative(field: &str, value: i64, max: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses an on-hand quantity such as `"12"`.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let qty = parse_integer("quantity", input)?;
    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses a low-stock threshold.
pub fn parse_threshold(input: &str) -> ValidationResult<i64> {
    let threshold = parse_integer("threshold", input)?;
    validate_threshold(threshold)?;
    Ok(threshold)
}

/// Parses a sale quantity (must be positive).
pub fn parse_sale_quantity(input: &str) -> ValidationResult<i64> {
    let qty = parse_integer("sale quantity", input)?;
    validate_sale_quantity(qty)?;
    Ok(qty)
}

/// Parses a signed stock adjustment such as `"+5"` or `"-3"`.
pub fn parse_delta(input: &str) -> ValidationResult<i64> {
    let delta = parse_integer("stock change", input)?;
    validate_delta(delta)?;
    Ok(delta)
}

fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    trimmed.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        expected: "a whole number".to_string(),
        input: trimmed.to_string(),
    })
}

/// Parses a decimal price into Money without going through floating point.
///
/// ## Accepted Forms
/// ```text
/// "12"     → 1200
/// "12.5"   → 1250
/// "12.50"  → 1250
/// ".99"    → 99
/// ```
///
/// ## Rejected
/// - signs (`"-1"` reports "must not be negative")
/// - more than two fraction digits (`"1.999"`)
/// - anything that is not digits and at most one dot
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    if trimmed.starts_with('-') && trimmed.len() > 1 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    let not_a_price = || ValidationError::NotANumber {
        field: "price".to_string(),
        expected: "a decimal amount like 12.50".to_string(),
        input: trimmed.to_string(),
    };

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (trimmed, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if !all_digits(whole) {
        return Err(not_a_price());
    }

    let minor = match fraction {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 2 || !all_digits(f) => return Err(not_a_price()),
        Some(f) if f.len() == 1 => f.parse::<i64>().map_err(|_| not_a_price())? * 10,
        Some(f) => f.parse::<i64>().map_err(|_| not_a_price())?,
    };

    if whole.is_empty() && fraction.is_none() {
        return Err(not_a_price());
    }

    let too_large = || ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_PRICE_CENTS,
    };

    let major = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().map_err(|_| too_large())?
    };

    let cents = major
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor))
        .ok_or_else(too_large)?;

    let price = Money::from_cents(cents);
    validate_price(price)?;
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Basmati Rice 5kg").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);

        assert!(matches!(
            parse_quantity("ten"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_quantity("-1"),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity(&(MAX_ITEM_QUANTITY + 1).to_string()).is_err());
    }

    #[test]
    fn test_parse_sale_quantity() {
        assert_eq!(parse_sale_quantity("3").unwrap(), 3);
        assert!(matches!(
            parse_sale_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(parse_sale_quantity("-2").is_err());
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(parse_delta("+5").unwrap(), 5);
        assert_eq!(parse_delta("-3").unwrap(), -3);
        assert_eq!(parse_delta("0").unwrap(), 0);
        assert!(parse_delta("lots").is_err());
        assert!(parse_delta(&(-MAX_ITEM_QUANTITY - 1).to_string()).is_err());
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("5").unwrap(), 5);
        assert!(parse_threshold("-5").is_err());
    }

    #[test]
    fn test_parse_price_accepted_forms() {
        assert_eq!(parse_price("12").unwrap().cents(), 1200);
        assert_eq!(parse_price("12.5").unwrap().cents(), 1250);
        assert_eq!(parse_price("12.50").unwrap().cents(), 1250);
        assert_eq!(parse_price("12.05").unwrap().cents(), 1205);
        assert_eq!(parse_price(".99").unwrap().cents(), 99);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
        assert_eq!(parse_price(" 3.10 ").unwrap().cents(), 310);
    }

    #[test]
    fn test_parse_price_rejected_forms() {
        assert!(matches!(
            parse_price("-1.00"),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(parse_price("1.999").is_err());
        assert!(parse_price("1.").is_err());
        assert!(parse_price(".").is_err());
        assert!(parse_price("1.2.3").is_err());
        assert!(parse_price("+1").is_err());
        assert!(parse_price("1e3").is_err());
        assert!(matches!(parse_price(""), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_parse_price_range() {
        assert!(parse_price("1000000").is_ok());
        assert!(matches!(
            parse_price("1000000.01"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_price("99999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }
}
