//! Input resolution for the address bar
//!
//! Resolution order:
//! 1. `http://` / `https://` input → used as is
//! 2. Bare domain (`example.com`, `docs.rs`) → `https://` prefixed
//! 3. Anything else → search engine query URL

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Bing,
    Google,
    DuckDuckGo,
}

impl SearchEngine {
    /// Query URL prefix; the encoded query is appended verbatim.
    pub fn query_prefix(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
            SearchEngine::Google => "google",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bing" => Ok(SearchEngine::Bing),
            "google" => Ok(SearchEngine::Google),
            "duckduckgo" => Ok(SearchEngine::DuckDuckGo),
            _ => Err(format!("Unknown search engine: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputResolver {
    engine: SearchEngine,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_engine(engine: SearchEngine) -> Self {
        Self { engine }
    }

    pub fn set_search_engine(&mut self, engine: SearchEngine) {
        self.engine = engine;
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.engine
    }

    /// Rewrite raw address bar input into a navigable address.
    ///
    /// The input is not trimmed here; callers decide what blank input means.
    pub fn normalize(&self, input: &str) -> String {
        if has_http_scheme(input) {
            return input.to_string();
        }

        if is_bare_domain(input) {
            return format!("https://{}", input);
        }

        self.search_url(input)
    }

    /// Build a search URL for `query`, whatever it looks like.
    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.engine.query_prefix(), encoded)
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// One or more `label.` segments followed by an alphabetic TLD of two or
/// more letters. Labels are ASCII alphanumeric runs joined by single hyphens.
fn is_bare_domain(input: &str) -> bool {
    let Some((labels, tld)) = input.rsplit_once('.') else {
        return false;
    };

    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    labels.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .split('-')
            .all(|run| !run.is_empty() && run.chars().all(|c| c.is_ascii_alphanumeric()))
}
