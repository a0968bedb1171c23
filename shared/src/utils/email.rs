//! Email address validation and masking utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Validate an email address format (pragmatic check, not full RFC 5322)
///
/// # Example
///
/// ```
/// use vf_shared::utils::email::is_valid_email;
///
/// assert!(is_valid_email("learner@example.com"));
/// assert!(!is_valid_email("not-an-address"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain,
/// so log lines stay correlatable without exposing the address.
///
/// # Example
///
/// ```
/// use vf_shared::utils::email::mask_email;
///
/// assert_eq!(mask_email("learner@example.com"), "l******@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}{}@{}", first, "*".repeat(local.chars().count().saturating_sub(1)), domain)
        }
        _ => "*".repeat(email.chars().count()),
    }
}
