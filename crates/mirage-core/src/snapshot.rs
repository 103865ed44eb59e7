//! Render snapshot handed to the UI layer

use mirage_tabs::{LoadState, Tab};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TabSnapshot {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: String,
    pub loading: bool,
    pub progress: u8,
    pub message: String,
    pub content: String,
    pub background_color: String,
    pub use_embedded: bool,
    /// `-1` when the tab has no history yet
    pub history_position: i64,
    pub history_len: usize,
    pub state: LoadState,
}

impl From<&Tab> for TabSnapshot {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            title: tab.title.clone(),
            url: tab.url.clone(),
            favicon: tab.favicon.clone(),
            loading: tab.is_loading(),
            progress: tab.progress,
            message: tab.message.clone(),
            content: tab.content.clone(),
            background_color: tab.background_color.clone(),
            use_embedded: tab.use_embedded,
            history_position: tab.history_position(),
            history_len: tab.history.len(),
            state: tab.state,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserSnapshot {
    pub tabs: Vec<TabSnapshot>,
    pub active_index: Option<usize>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Whether the active tab's URL is bookmarked
    pub is_bookmarked: bool,
    pub show_landing_page: bool,
    pub menu_open: bool,
    pub context_menu_open: bool,
}
