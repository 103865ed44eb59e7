//! Bookmark commands

use mirage_core::{extract_domain, favicon_for, Bookmark};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_params;
use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookmarkChange {
    /// Whether the bookmark set changed
    pub changed: bool,
    pub bookmarked: bool,
}

#[derive(Debug, Deserialize)]
struct AddParams {
    url: String,
    title: String,
    #[serde(default)]
    favicon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoveParams {
    url: String,
}

pub fn toggle_bookmark(state: &AppState) -> CommandResult<BookmarkChange> {
    match state.with_browser_mut(|browser| browser.toggle_bookmark()) {
        Some(bookmarked) => CommandResult::ok(BookmarkChange {
            changed: true,
            bookmarked,
        }),
        None => CommandResult::err("No page to bookmark".to_string()),
    }
}

pub fn list_bookmarks(state: &AppState) -> CommandResult<Vec<Bookmark>> {
    CommandResult::ok(state.with_browser(|browser| browser.bookmarks().all().to_vec()))
}

pub fn add_bookmark(state: &AppState, params: &Value) -> CommandResult<BookmarkChange> {
    let AddParams {
        url,
        title,
        favicon,
    } = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    if url.trim().is_empty() {
        return CommandResult::err("Bookmark URL cannot be empty".to_string());
    }

    let favicon = favicon.unwrap_or_else(|| favicon_for(&extract_domain(&url)));
    let changed =
        state.with_browser_mut(|browser| browser.bookmarks_mut().add(&url, &title, &favicon));

    CommandResult::ok(BookmarkChange {
        changed,
        bookmarked: true,
    })
}

pub fn remove_bookmark(state: &AppState, params: &Value) -> CommandResult<BookmarkChange> {
    let RemoveParams { url } = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return CommandResult::err(e),
    };

    let changed = state.with_browser_mut(|browser| browser.bookmarks_mut().remove(&url));

    CommandResult::ok(BookmarkChange {
        changed,
        bookmarked: false,
    })
}
