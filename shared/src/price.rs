//! Price parsing
//!
//! Prices travel as display strings (`"€49"`). Catalog filtering and cart
//! totals need the numeric value.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: char = '€';

/// Parse a display price such as `"€49"`, `"€ 69.90"` or `"29"`.
///
/// Returns `None` when no number can be read.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '€' | '$' | '£' | '₽'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Format a numeric price back into its display form (`"€118"`).
pub fn format_price(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, value.normalize())
}
