//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Scheme, then a host with at least one dot, then anything without whitespace
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+(:[0-9]{1,5})?([/?#]\S*)?$")
        .expect("URL pattern is a valid regex")
});

/// Validates minimum string length (counted in characters)
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// String matching validators
pub fn contains(s: &str, substring: &str) -> bool {
    s.contains(substring)
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// URL validation
///
/// Accepts `http` and `https` URLs whose host has at least one dot.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|a| a == value)
}
