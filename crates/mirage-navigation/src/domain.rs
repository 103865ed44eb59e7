//! Display domain and favicon derivation

use url::Url;

/// Shown when an address has no usable host.
pub const UNKNOWN_DOMAIN: &str = "Unknown";

const GOOGLE_FAVICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"><path fill="#4285F4" d="M12 11v2h2v2H9v-4h3zm10 4.5c0 4.142-3.358 7.5-7.5 7.5S7 19.642 7 15.5c0-4.142 3.358-7.5 7.5-7.5h7.5v7.5z"/><path fill="#34A853" d="M12 7.5c-4.142 0-7.5 3.358-7.5 7.5H9v-3h3V7.5z"/><path fill="#FBBC05" d="M4.5 12c0-4.142 3.358-7.5 7.5-7.5V9H9v3H4.5z"/><path fill="#EA4335" d="M12 4.5v3h3v3h-3V7.5H9v-3h3z"/></svg>"##;

const KNOWN_FAVICONS: &[(&str, &str)] = &[("google.com", GOOGLE_FAVICON)];

/// Bare host of `url` with a leading `www.` removed.
pub fn extract_domain(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string));

    match host {
        Some(host) if !host.is_empty() => host
            .strip_prefix("www.")
            .map(str::to_string)
            .unwrap_or(host),
        _ => UNKNOWN_DOMAIN.to_string(),
    }
}

/// Icon markup for a domain: a bundled icon when one exists, otherwise a
/// generic tile carrying the domain's initial.
pub fn favicon_for(domain: &str) -> String {
    KNOWN_FAVICONS
        .iter()
        .find(|(known, _)| *known == domain)
        .map(|(_, svg)| svg.to_string())
        .unwrap_or_else(|| letter_favicon(domain))
}

/// Generic 16x16 tile showing the first letter of `text`, uppercased.
pub fn letter_favicon(text: &str) -> String {
    let initial: String = text
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    format!(
        r##"<svg width="16" height="16" viewBox="0 0 16 16"><rect width="16" height="16" rx="2" fill="#888"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" fill="white" font-size="10">{}</text></svg>"##,
        initial
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://www.github.com/x"), "github.com");
        assert_eq!(extract_domain("https://docs.rs/url"), "docs.rs");
        assert_eq!(extract_domain("http://sub.www.example.com"), "sub.www.example.com");
        assert_eq!(extract_domain("https://Example.COM"), "example.com");
    }

    #[test]
    fn test_extract_domain_unknown() {
        assert_eq!(extract_domain("not a url"), UNKNOWN_DOMAIN);
        assert_eq!(extract_domain(""), UNKNOWN_DOMAIN);
        // Parses, but carries no host
        assert_eq!(extract_domain("data:text/plain,hi"), UNKNOWN_DOMAIN);
    }

    #[test]
    fn test_known_favicon() {
        let icon = favicon_for("google.com");
        assert!(icon.contains("#4285F4"));
    }

    #[test]
    fn test_letter_favicon_fallback() {
        let icon = favicon_for("github.com");
        assert!(icon.contains(">G</text>"));
        assert!(icon.contains("fill=\"#888\""));

        assert!(letter_favicon("N").contains(">N</text>"));
        assert!(letter_favicon("").contains("></text>"));
    }
}
