//! Input normalization for catalog items and usage notes.
//!
//! Form and JSON input arrives loosely typed: text fields may be missing,
//! empty or padded with whitespace, and prices may come in as strings or
//! numbers. Everything here turns that into the typed, nullable values the
//! repository layer stores.

use serde::Deserialize;

use crate::error::CoreError;

/// Number of decimal places kept for a price.
pub const PRICE_DECIMALS: i32 = 2;

/// Maximum accepted length (in characters) of a caller-supplied item id.
pub const MAX_ID_LENGTH: usize = 128;

// ---------------------------------------------------------------------------
// Text fields
// ---------------------------------------------------------------------------

/// Trim a text field, mapping absent or blank input to `None`.
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalize a usage note. A blank note clears the annotation.
pub fn normalize_note(value: Option<&str>) -> Option<String> {
    normalize_text(value)
}

/// Validate a caller-supplied item id.
///
/// Returns `Ok(None)` when no usable id was given, so the caller can
/// generate one.
pub fn normalize_id(value: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(id) = normalize_text(value) else {
        return Ok(None);
    };
    if id.chars().count() > MAX_ID_LENGTH {
        return Err(CoreError::Validation(format!(
            "id must be at most {MAX_ID_LENGTH} characters"
        )));
    }
    if id.contains('/') {
        return Err(CoreError::Validation("id must not contain '/'".into()));
    }
    Ok(Some(id))
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// A price as submitted by a client: either a JSON number or a decimal string
/// (form inputs always submit strings).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

/// Round a price to two decimal places (half away from zero).
///
/// ```
/// use gorgina_core::catalog::round_price;
/// assert_eq!(round_price(49.999), 50.0);
/// assert_eq!(round_price(12.344), 12.34);
/// ```
pub fn round_price(value: f64) -> f64 {
    let factor = 10f64.powi(PRICE_DECIMALS);
    (value * factor).round() / factor
}

/// Parse and round a price. Absent or blank input yields `Ok(None)`.
///
/// Rejects non-numeric, non-finite and negative values.
pub fn parse_price(input: Option<&PriceInput>) -> Result<Option<f64>, CoreError> {
    let value = match input {
        None => return Ok(None),
        Some(PriceInput::Number(n)) => *n,
        Some(PriceInput::Text(raw)) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<f64>()
                .map_err(|_| CoreError::Validation(format!("Invalid price '{raw}'")))?
        }
    };

    if !value.is_finite() {
        return Err(CoreError::Validation("Price must be a finite number".into()));
    }
    if value < 0.0 {
        return Err(CoreError::Validation("Price must not be negative".into()));
    }
    // Scaling to cents overflows near f64::MAX.
    let rounded = round_price(value);
    if !rounded.is_finite() {
        return Err(CoreError::Validation("Price is too large".into()));
    }
    Ok(Some(rounded))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
