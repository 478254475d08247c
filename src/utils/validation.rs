use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static regex compile")
});

/// Syntactic `local@domain.tld` check with a TLD of at least two letters.
/// Says nothing about deliverability.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// `true` when the field holds something other than whitespace.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
