//! Canned page content shown after back/forward/reload

use serde::Serialize;
use url::Url;

pub const BLANK_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub content: String,
    pub background_color: String,
}

struct MockPage {
    title: &'static str,
    content: &'static str,
    color: &'static str,
}

/// Matched against the host by substring, first hit wins.
const MOCK_PAGES: &[(&str, MockPage)] = &[
    (
        "youtube.com",
        MockPage {
            title: "YouTube",
            content: "Watch videos, subscribe to channels, and more.",
            color: "#FF0000",
        },
    ),
    (
        "wikipedia.org",
        MockPage {
            title: "Wikipedia",
            content: "The free encyclopedia that anyone can edit.",
            color: "#333333",
        },
    ),
    (
        "github.com",
        MockPage {
            title: "GitHub",
            content: "Where the world builds software.",
            color: "#24292e",
        },
    ),
    (
        "reddit.com",
        MockPage {
            title: "Reddit",
            content: "The front page of the internet.",
            color: "#FF4500",
        },
    ),
    (
        "twitter.com",
        MockPage {
            title: "Twitter",
            content: "See what's happening in the world right now.",
            color: "#1DA1F2",
        },
    ),
    (
        "netflix.com",
        MockPage {
            title: "Netflix",
            content: "Watch TV shows and movies online.",
            color: "#E50914",
        },
    ),
    (
        "amazon.com",
        MockPage {
            title: "Amazon",
            content: "Shop online for electronics, computers, clothing, and more.",
            color: "#232F3E",
        },
    ),
    (
        "linkedin.com",
        MockPage {
            title: "LinkedIn",
            content: "Manage your professional identity and build your network.",
            color: "#0077B5",
        },
    ),
];

/// Resolve the page shown for `url`.
pub fn resolve_page_content(url: &str) -> PageContent {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Cannot resolve page content");
            None
        }
    };

    let Some(host) = host.filter(|h| !h.is_empty()) else {
        return PageContent {
            title: "Error".to_string(),
            content: "Invalid URL".to_string(),
            background_color: BLANK_BACKGROUND.to_string(),
        };
    };

    match MOCK_PAGES.iter().find(|(key, _)| host.contains(key)) {
        Some((_, page)) => PageContent {
            title: page.title.to_string(),
            content: page.content.to_string(),
            background_color: page.color.to_string(),
        },
        None => PageContent {
            content: format!("Welcome to {}", host),
            title: host,
            background_color: BLANK_BACKGROUND.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_site() {
        let page = resolve_page_content("https://www.github.com/rust-lang");
        assert_eq!(page.title, "GitHub");
        assert_eq!(page.content, "Where the world builds software.");
        assert_eq!(page.background_color, "#24292e");
    }

    #[test]
    fn test_substring_match_on_host() {
        let page = resolve_page_content("https://en.wikipedia.org/wiki/Rust");
        assert_eq!(page.title, "Wikipedia");

        // The path is not consulted
        let page = resolve_page_content("https://example.com/youtube.com");
        assert_eq!(page.title, "example.com");
    }

    #[test]
    fn test_first_match_wins() {
        let page = resolve_page_content("https://youtube.com.github.com");
        assert_eq!(page.title, "YouTube");
    }

    #[test]
    fn test_unknown_site() {
        let page = resolve_page_content("https://www.example.com/");
        assert_eq!(page.title, "www.example.com");
        assert_eq!(page.content, "Welcome to www.example.com");
        assert_eq!(page.background_color, BLANK_BACKGROUND);
    }

    #[test]
    fn test_invalid_url() {
        let page = resolve_page_content("not a url");
        assert_eq!(page.title, "Error");
        assert_eq!(page.content, "Invalid URL");
        assert_eq!(page.background_color, BLANK_BACKGROUND);
    }
}
