//! Normalization of free-form statement amounts

use bigdecimal::{BigDecimal, Zero};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

fn numeric_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?\d*\.?\d*(?:[eE][+-]?\d+)?").expect("invalid numeric prefix regex")
    })
}

/// Convert a free-form amount (`Rp 1.000.000,50`, `1,000,000.50`, ...) into a
/// non-negative decimal.
///
/// Separator rules:
/// - both `,` and `.` present: whichever occurs last is the decimal separator
/// - a single kind repeated: thousands separators
/// - a single occurrence followed by exactly two digits: decimal separator
/// - a single occurrence otherwise: thousands separator
///
/// Only the leading numeric part is read, so trailing text such as a
/// direction marker (`15,000.00 DB`) is ignored. Never fails; input without
/// a leading number yields zero.
pub fn parse_amount(raw: &str) -> BigDecimal {
    let cleaned: String = raw.replace("Rp", "").chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return BigDecimal::zero();
    }

    let canonical = canonicalize_separators(&cleaned);
    let number = numeric_prefix_re()
        .find(&canonical)
        .map_or("", |m| m.as_str());
    match BigDecimal::from_str(number) {
        Ok(value) => value.abs(),
        Err(_) => BigDecimal::zero(),
    }
}

fn canonicalize_separators(value: &str) -> String {
    match (value.rfind(','), value.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => value.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => value.replace(',', ""),
        (Some(_), None) => single_separator(value, ','),
        (None, Some(_)) => single_separator(value, '.'),
        (None, None) => value.to_string(),
    }
}

fn single_separator(value: &str, separator: char) -> String {
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() == 2 && parts[1].chars().count() == 2 {
        format!("{}.{}", parts[0], parts[1])
    } else {
        value.replace(separator, "")
    }
}
