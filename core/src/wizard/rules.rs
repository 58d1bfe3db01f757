// orderdesk/src/wizard/rules.rs

//! Field-level checks shared by the wizard and the user forms.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::FieldErrors;

static EMAIL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

pub fn is_email(value: &str) -> bool {
  EMAIL_RE.is_match(value)
}

/// Absolute URL with a host.
pub fn is_url(value: &str) -> bool {
  Url::parse(value).map(|u| u.has_host()).unwrap_or(false)
}

/// Pushes `message` when `value` is blank. Returns whether the value was present.
pub fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> bool {
  if value.trim().is_empty() {
    errors.push(field, message);
    false
  } else {
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn email_shapes() {
    assert!(is_email("ops@acme.io"));
    assert!(!is_email("ops@acme"));
    assert!(!is_email("ops acme@x.io"));
    assert!(!is_email(""));
  }

  #[test]
  fn url_shapes() {
    assert!(is_url("https://acme.io"));
    assert!(is_url("http://localhost:8080/path"));
    assert!(!is_url("acme.io"));
    assert!(!is_url("mailto:ops@acme.io"));
  }
}
