// src/extract/url.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Optional scheme, optional leading `www.`, then everything up to the first `/`.
static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://)?(?:www\.)?([^/]+)").unwrap());

/// Reduce a URL to its domain. Inputs that do not look like a URL at all
/// (empty, or starting with `/`) come back unchanged.
pub fn shorten_url(url: &str) -> String {
    match DOMAIN_RE.captures(url).and_then(|c| c.get(1)) {
        Some(domain) => domain.as_str().to_owned(),
        None => url.to_owned(),
    }
}
