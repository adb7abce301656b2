use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a component percentage as typed into the form.
///
/// Handles formats like:
/// - "12" -> 12
/// - "0.1" -> 0.1
/// - "0,1" -> 0.1 (decimal comma)
/// - "12 %" -> 12
/// - "1e-1" -> 0.1
///
/// Anything unparseable yields zero.
pub fn parse_percentage(s: &str) -> Decimal {
    let s = s.trim();
    let s = s.strip_suffix('%').unwrap_or(s).trim_end();
    let normalized = s.replace(',', ".");

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or(Decimal::ZERO)
}
