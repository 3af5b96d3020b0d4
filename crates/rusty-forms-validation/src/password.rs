//! Password validation functions

use serde::{Deserialize, Serialize};

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// 6+ characters minimum
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
}

/// Validates password against a strength tier
pub fn validate_password(password: &str, strength: PasswordStrength) -> Result<(), String> {
    match strength {
        PasswordStrength::Basic => validate_basic(password),
        PasswordStrength::Medium => validate_medium(password),
        PasswordStrength::Strong => validate_strong(password),
    }
}

fn validate_basic(password: &str) -> Result<(), String> {
    (password.chars().count() >= 6)
        .then_some(())
        .ok_or_else(|| "Password must be at least 6 characters".to_string())
}

fn validate_medium(password: &str) -> Result<(), String> {
    let checks = [
        (password.chars().count() >= 8, "Password must be at least 8 characters"),
        (password.chars().any(|c| c.is_uppercase()), "Password must contain uppercase letter"),
        (password.chars().any(|c| c.is_lowercase()), "Password must contain lowercase letter"),
        (password.chars().any(|c| c.is_numeric()), "Password must contain digit"),
    ];

    first_failure(&checks)
}

fn validate_strong(password: &str) -> Result<(), String> {
    let checks = [
        (password.chars().count() >= 8, "Password must be at least 8 characters"),
        (
            password.chars().any(|c| c.is_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (password.chars().any(|c| c.is_numeric()), "Password must contain at least one digit"),
        (
            password.chars().any(|c| {
                matches!(c, '@' | '$' | '!' | '%' | '*' | '?' | '&' | '#' | '-' | '_' | '+' | '=' | '.' | ',')
            }),
            "Password must contain at least one special character (@$!%*?&#-_+=.,)",
        ),
    ];

    first_failure(&checks)
}

fn first_failure(checks: &[(bool, &str)]) -> Result<(), String> {
    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(msg.to_string()))
        .unwrap_or(Ok(()))
}
