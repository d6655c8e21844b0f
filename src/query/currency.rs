//! Parsing of currency display strings.

use crate::error::CurrencyError;

/// Parse a currency display string such as `"$2,500,000"` into its number
///
/// Strips surrounding whitespace, a single `$` symbol, and comma group
/// separators. A minus sign is honored on either side of the symbol, so both
/// `-$2,000` and `$-2,000` parse to `-2000`. Anything left that is not plain
/// digits with at most one decimal point is rejected rather than silently
/// coerced, so `"N/A"` or a doubled sign comes back as an error instead of
/// a `NaN` leaking into a summary tile.
///
/// # Errors
/// Returns [`CurrencyError::Empty`] for blank input and
/// [`CurrencyError::NotNumeric`] when no clean numeric remainder exists
pub fn parse_currency(input: &str) -> Result<f64, CurrencyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CurrencyError::Empty);
    }

    let not_numeric = || CurrencyError::NotNumeric {
        input: trimmed.to_string(),
    };

    let mut rest = trimmed;
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    }
    rest = rest.strip_prefix('$').unwrap_or(rest);
    if let Some(r) = rest.strip_prefix('-') {
        if negative {
            return Err(not_numeric());
        }
        negative = true;
        rest = r;
    }

    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(not_numeric());
    }

    // Reject exponents, "inf", "NaN", stray signs: f64::parse is laxer than
    // a currency amount should be.
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return Err(not_numeric()),
        }
    }

    let value: f64 = digits.parse().map_err(|_| not_numeric())?;
    Ok(if negative { -value } else { value })
}
