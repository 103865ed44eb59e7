//! Tab data structure
//!
//! A tab carries what the tab strip and the page area display (title,
//! favicon, mock page content, load progress) plus its own history stack.

use chrono::{DateTime, Utc};
use mirage_navigation::{letter_favicon, PageContent, BLANK_BACKGROUND};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::state::LoadState;
use crate::Result;

pub const NEW_TAB_TITLE: &str = "New Tab";
pub const CONNECTING_MESSAGE: &str = "Connecting to website...";
pub const COMPLETED_MESSAGE: &str = "Completed";

/// Intermediate progress shown while a load is simulated, in display order.
pub const PROGRESS_STEPS: [(u8, &str); 4] = [
    (20, "Establishing connection..."),
    (40, "Retrieving content..."),
    (60, "Loading resources..."),
    (80, "Rendering page..."),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// Current URL, empty until the first navigation
    pub url: String,
    /// Icon markup for the current domain
    pub favicon: String,
    /// Visited URLs, oldest first
    pub history: Vec<String>,
    /// Position in `history`; `None` iff `history` is empty
    pub history_index: Option<usize>,
    pub state: LoadState,
    pub progress: u8,
    pub message: String,
    /// Mock page body
    pub content: String,
    pub background_color: String,
    /// Whether the page area should show the embedded frame
    pub use_embedded: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Bumped every time a load starts; stale load callbacks compare against it
    pub nav_token: u64,
    pub created_at: DateTime<Utc>,
}

impl Tab {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: NEW_TAB_TITLE.to_string(),
            url: String::new(),
            favicon: letter_favicon("N"),
            history: Vec::new(),
            history_index: None,
            state: LoadState::Empty,
            progress: 0,
            message: String::new(),
            content: String::new(),
            background_color: BLANK_BACKGROUND.to_string(),
            use_embedded: false,
            can_go_back: false,
            can_go_forward: false,
            nav_token: 0,
            created_at: Utc::now(),
        }
    }

    /// History position as displayed by the UI: `-1` for an empty history.
    pub fn history_position(&self) -> i64 {
        self.history_index.map(|i| i as i64).unwrap_or(-1)
    }

    pub fn current_entry(&self) -> Option<&str> {
        self.history_index
            .and_then(|i| self.history.get(i))
            .map(String::as_str)
    }

    pub fn has_back(&self) -> bool {
        matches!(self.history_index, Some(i) if i > 0)
    }

    pub fn has_forward(&self) -> bool {
        matches!(self.history_index, Some(i) if i + 1 < self.history.len())
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Record a new visit, dropping any forward entries first.
    pub fn push_history(&mut self, url: String) {
        if let Some(index) = self.history_index {
            self.history.truncate(index + 1);
        }
        self.history.push(url);
        self.history_index = Some(self.history.len() - 1);
    }

    /// Move one entry back and make it the current URL.
    /// Returns `None` without touching the tab when already at the oldest entry.
    pub fn step_back(&mut self) -> Option<&str> {
        let index = self.history_index.filter(|i| *i > 0)? - 1;
        self.move_to(index)
    }

    /// Move one entry forward and make it the current URL.
    pub fn step_forward(&mut self) -> Option<&str> {
        if !self.has_forward() {
            return None;
        }
        let index = self.history_index? + 1;
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> Option<&str> {
        let url = self.history.get(index)?.clone();
        self.history_index = Some(index);
        self.url = url;
        Some(&self.url)
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: LoadState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
        Ok(())
    }

    /// Enter `Navigating` and reset progress. Returns the new navigation token.
    pub fn begin_load(&mut self) -> Result<u64> {
        self.transition_to(LoadState::Navigating)?;
        self.nav_token += 1;
        self.progress = 0;
        self.message = CONNECTING_MESSAGE.to_string();
        Ok(self.nav_token)
    }

    pub fn apply_progress(&mut self, progress: u8, message: &str) {
        self.progress = progress;
        self.message = message.to_string();
    }

    /// Enter `Loaded` and refresh the back/forward flags.
    pub fn finish_load(&mut self) -> Result<()> {
        self.transition_to(LoadState::Loaded)?;
        self.apply_progress(100, COMPLETED_MESSAGE);
        self.refresh_navigation_flags();
        Ok(())
    }

    pub fn apply_page_content(&mut self, page: &PageContent) {
        self.title = page.title.clone();
        self.content = page.content.clone();
        self.background_color = page.background_color.clone();
    }

    pub fn refresh_navigation_flags(&mut self) {
        self.can_go_back = self.has_back();
        self.can_go_forward = self.has_forward();
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::new()
    }
}
