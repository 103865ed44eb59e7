//! Bookmark store
//!
//! The whole set is serialized as one JSON array into a single key-value
//! slot and rewritten on every mutation.

use chrono::{DateTime, Utc};
use mirage_storage::KeyValueStore;
use serde::{Deserialize, Serialize};

pub const BOOKMARKS_SLOT: &str = "browser_bookmarks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub date_added: DateTime<Utc>,
}

pub struct BookmarkStore {
    store: Box<dyn KeyValueStore>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Load the persisted set. Missing, unreadable or corrupt data yields an
    /// empty set.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let bookmarks = load(store.as_ref());
        tracing::debug!(count = bookmarks.len(), "Loaded bookmarks");
        Self { store, bookmarks }
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    /// Returns false if `url` is already bookmarked.
    pub fn add(&mut self, url: &str, title: &str, favicon: &str) -> bool {
        if self.is_bookmarked(url) {
            return false;
        }

        self.bookmarks.push(Bookmark {
            url: url.to_string(),
            title: title.to_string(),
            favicon: favicon.to_string(),
            date_added: Utc::now(),
        });
        tracing::info!(url = %url, "Added bookmark");
        self.persist();
        true
    }

    pub fn remove(&mut self, url: &str) -> bool {
        let Some(index) = self.bookmarks.iter().position(|b| b.url == url) else {
            return false;
        };

        self.bookmarks.remove(index);
        tracing::info!(url = %url, "Removed bookmark");
        self.persist();
        true
    }

    /// All bookmarks in insertion order.
    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.bookmarks) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize bookmarks");
                return;
            }
        };

        if let Err(e) = self.store.write(BOOKMARKS_SLOT, &serialized) {
            tracing::error!(error = %e, "Failed to persist bookmarks");
        }
    }
}

fn load(store: &dyn KeyValueStore) -> Vec<Bookmark> {
    let raw = match store.read(BOOKMARKS_SLOT) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read bookmarks, starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Corrupt bookmark data, starting empty");
        Vec::new()
    })
}
