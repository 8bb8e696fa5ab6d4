// src/extract/user_agent.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel for a user-agent the patterns cannot account for.
pub const UNKNOWN: &str = "Unknown";

// First whitespace-delimited token directly preceding a `/1.2.3` version tail.
static BROWSER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\s]+)/[\d.]+").unwrap());
// Contents of the first parenthesized group, e.g. `(Windows NT 6.1; WOW64)`.
static OS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Pull the browser name and operating system out of a raw user-agent string.
/// Either side falls back to `"Unknown"` when its pattern is absent.
pub fn extract_browser_and_os(user_agent: &str) -> (String, String) {
    let browser = BROWSER_RE
        .captures(user_agent)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_else(|| UNKNOWN.to_owned());

    let operating_system = OS_RE
        .captures(user_agent)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_else(|| UNKNOWN.to_owned());

    (browser, operating_system)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_and_parenthesized_group() {
        let ua = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.11 (KHTML, like Gecko)";
        let (browser, os) = extract_browser_and_os(ua);
        assert_eq!(browser, "Mozilla");
        assert_eq!(os, "Windows NT 6.1; WOW64");
    }

    #[test]
    fn empty_input_yields_sentinels() {
        assert_eq!(
            extract_browser_and_os(""),
            (UNKNOWN.to_owned(), UNKNOWN.to_owned())
        );
    }

    #[test]
    fn version_without_digits_is_not_a_browser() {
        // seen in the wild: a slash followed by a place name, not a version
        let (browser, os) = extract_browser_and_os("GoogleMaps/RochesterNY");
        assert_eq!(browser, UNKNOWN);
        assert_eq!(os, UNKNOWN);
    }

    #[test]
    fn missing_parens_leaves_os_unknown() {
        let (browser, os) = extract_browser_and_os("Dalvik/1.6.0");
        assert_eq!(browser, "Dalvik");
        assert_eq!(os, UNKNOWN);
    }
}
