//! Field rules used by the submission form

use std::borrow::Cow;

use shared::models::Seats;
use url::{Host, Url};
use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Rejects values that are empty once trimmed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

/// Web link the catalogue can render: `http://` or `https://` with a host
///
/// The raw value must spell out `scheme://` and contain no backslashes, so
/// forms the URL parser would silently repair are rejected. Domain hosts
/// need non-empty, well-formed labels and a top-level domain. Blank values
/// pass so that `required` reports them instead.
pub fn web_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let invalid = || error("url", "Invalid URL.");

    let (scheme, _) = value.split_once("://").ok_or_else(invalid)?;
    let scheme_ok = !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic());
    if !scheme_ok || value.contains('\\') {
        return Err(invalid());
    }

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if valid_domain(domain) => Ok(()),
        _ => Err(invalid()),
    }
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() || !labels.iter().all(|label| valid_label(label)) {
        return false;
    }
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn max_chars(value: &str, limit: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > limit {
        return Err(error("length", message));
    }
    Ok(())
}

/// At most 250 characters once trimmed
pub fn max_250(value: &str) -> Result<(), ValidationError> {
    max_chars(value, 250, "Field cannot be longer than 250 characters.")
}

/// At most 500 characters once trimmed
pub fn max_500(value: &str) -> Result<(), ValidationError> {
    max_chars(value, 500, "Field cannot be longer than 500 characters.")
}

/// Must be one of the offered seat ranges
pub fn seat_choice(value: &str) -> Result<(), ValidationError> {
    value
        .trim()
        .parse::<Seats>()
        .map(|_| ())
        .map_err(|_| error("choice", "Not a valid choice."))
}
