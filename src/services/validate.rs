use crate::domain::errors::InputIssue;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+$").expect("valid regex")
});

// One 1-63 char label that neither starts nor ends with '-', then letter-only
// segments of length >= 2.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z]{2,})+$")
        .expect("valid regex")
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain)
}

// Email first, one issue at a time.
pub fn check_input(domain: &str, email: &str) -> Result<(), InputIssue> {
    if domain.is_empty() || email.is_empty() {
        return Err(InputIssue::Empty);
    }
    if !validate_email(email) {
        return Err(InputIssue::InvalidEmail);
    }
    if !validate_domain(domain) {
        return Err(InputIssue::InvalidDomain);
    }
    Ok(())
}

pub fn validate_input(domain: &str, email: &str) -> bool {
    check_input(domain, email).is_ok()
}
