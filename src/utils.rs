use std::sync::LazyLock;

use regex::Regex;

pub mod error;

static EMAIL_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex is valid"));

/// Basic `local@domain.tld` shape check. Deliberately far looser than RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_SHAPE.is_match(email)
}
