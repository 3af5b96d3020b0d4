//! Numeric bounds
//!
//! Number inputs arrive as text; [`parse_number`] turns them into `f64`
//! before the bounds are compared.

use std::fmt::Display;

/// Trimmed text to a finite number
pub fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| "Must be a number".to_string())
}

/// Inclusive lower bound
pub fn validate_min<T: PartialOrd + Display>(value: T, min: T) -> Result<(), String> {
    (value >= min)
        .then_some(())
        .ok_or_else(|| format!("Must be {} or more", min))
}

/// Inclusive upper bound
pub fn validate_max<T: PartialOrd + Display>(value: T, max: T) -> Result<(), String> {
    (value <= max)
        .then_some(())
        .ok_or_else(|| format!("Must be {} or less", max))
}
