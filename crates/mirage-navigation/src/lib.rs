//! Mirage Navigation
//!
//! Pure helpers used by the navigation controller:
//! - Address bar input resolution (full URL, bare domain or search query)
//! - Display domain and favicon derivation
//! - Canned page content for a handful of well-known sites
//!
//! Every function here is total. Bad input degrades to a search URL,
//! `"Unknown"`, or an error page instead of failing.

mod content;
mod domain;
mod input;

pub use content::{resolve_page_content, PageContent, BLANK_BACKGROUND};
pub use domain::{extract_domain, favicon_for, letter_favicon, UNKNOWN_DOMAIN};
pub use input::{InputResolver, SearchEngine};
