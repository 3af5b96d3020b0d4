//! Email validation functions

/// Common free email providers
const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "mail.com",
    "protonmail.com",
    "yandex.com",
    "zoho.com",
];

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - A domain with at least one '.', no leading/trailing '.' or '-', no ".."
/// - A top-level domain of at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..") {
        return false;
    }

    let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+');
    let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');

    if !local.chars().all(valid_local) || !domain.chars().all(valid_domain) {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .map(|tld| tld.chars().count() >= 2)
        .unwrap_or(false)
}

/// Checks if email domain is a public provider (gmail, yahoo, etc.)
pub fn is_public_domain(email: &str) -> bool {
    email
        .split_once('@')
        .map(|(_, domain)| PUBLIC_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_public_domains() {
        assert!(is_public_domain("user@gmail.com"));
        assert!(is_public_domain("user@GMAIL.COM"));
        assert!(!is_public_domain("user@company.com"));
        assert!(!is_public_domain("not-an-email"));
    }
}
