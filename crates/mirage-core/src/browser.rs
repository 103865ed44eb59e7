//! Main browser state container
//!
//! [`Browser`] is the navigation controller: it resolves address bar input,
//! records history, schedules simulated loads and applies them when the
//! host advances the clock. Every operation is total; failures inside the
//! tab model are logged and reported as "nothing happened".

use mirage_navigation::{
    extract_domain, favicon_for, resolve_page_content, InputResolver, SearchEngine,
};
use mirage_storage::{Database, KeyValueStore, MemoryStore};
use mirage_tabs::{Tab, TabCollection, PROGRESS_STEPS};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::achievements::Achievements;
use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::scheduler::{LoadKind, LoadScheduler, LoadStep, LoadTask};
use crate::snapshot::{BrowserSnapshot, TabSnapshot};
use crate::Result;

/// Message posted into the shell by embedded content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundMessage {
    Navigate { url: String },
}

/// Progress update produced when a scheduled load step fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadEvent {
    pub tab_id: String,
    pub progress: u8,
    pub message: String,
    pub completed: bool,
}

pub struct Browser {
    config: Config,
    resolver: InputResolver,
    tabs: TabCollection,
    bookmarks: BookmarkStore,
    achievements: Achievements,
    scheduler: LoadScheduler,
    show_landing_page: bool,
}

impl Browser {
    /// Build a browser around an already-open bookmark slot store.
    pub fn new(config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let resolver = InputResolver::with_search_engine(config.search_engine);

        Self {
            config,
            resolver,
            tabs: TabCollection::new(),
            bookmarks: BookmarkStore::new(store),
            achievements: Achievements::new(),
            scheduler: LoadScheduler::new(),
            show_landing_page: true,
        }
    }

    /// Open the SQLite database named by the config, creating its directory.
    pub fn open(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        tracing::info!(path = %config.database_path.display(), "Browser opened");

        Ok(Self::new(config, Box::new(db)))
    }

    /// Browser whose bookmarks live only for the lifetime of the process.
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Box::new(MemoryStore::new()))
    }

    // === Landing page ===

    /// Leave the landing page and open the first tab.
    pub fn start(&mut self) {
        self.show_landing_page = false;
        self.tabs.open_tab();
        tracing::info!("Browser started");
    }

    pub fn show_landing_page(&self) -> bool {
        self.show_landing_page
    }

    // === Tabs ===

    pub fn open_tab(&mut self) -> usize {
        self.tabs.open_tab()
    }

    /// Close the tab at `index`, dropping its pending load steps.
    pub fn close_tab(&mut self, index: usize) -> bool {
        match self.tabs.close_tab(index) {
            Ok(removed) => {
                let cancelled = self.scheduler.cancel_tab(&removed.id);
                if cancelled > 0 {
                    tracing::debug!(tab_id = %removed.id, cancelled, "Cancelled pending load");
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring close request");
                false
            }
        }
    }

    pub fn switch_tab(&mut self, index: usize) -> bool {
        match self.tabs.switch_tab(index) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring switch request");
                false
            }
        }
    }

    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.active()
    }

    // === Navigation ===

    /// Navigate the active tab (opening one if needed) to `input`.
    ///
    /// Blank input becomes an empty search. Input that does not resolve to a
    /// parseable URL leaves everything untouched.
    pub fn navigate(&mut self, input: &str) -> bool {
        let url = self.resolver.normalize(input.trim());
        if let Err(e) = Url::parse(&url) {
            tracing::debug!(url = %url, error = %e, "Ignoring unparseable navigation");
            return false;
        }

        let domain = extract_domain(&url);
        let favicon = favicon_for(&domain);

        self.tabs.ensure_active();
        let Some(tab) = self.tabs.active_mut() else {
            return false;
        };

        tab.push_history(url.clone());
        tab.url = url;
        tab.title = domain;
        tab.favicon = favicon;

        self.start_load(LoadKind::Navigate)
    }

    /// Navigate to the search engine results for `query`.
    pub fn search(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }

        self.tabs.ensure_active();
        if let Some(tab) = self.tabs.active_mut() {
            tab.use_embedded = true;
        }

        let url = self.resolver.search_url(query);
        self.navigate(&url)
    }

    pub fn navigate_to_shortcut(&mut self, url: &str) -> bool {
        self.tabs.ensure_active();
        self.navigate(url)
    }

    pub fn go_back(&mut self) -> bool {
        let stepped = self
            .tabs
            .active_mut()
            .is_some_and(|tab| tab.step_back().is_some());

        stepped && self.start_load(LoadKind::Traverse)
    }

    pub fn go_forward(&mut self) -> bool {
        let stepped = self
            .tabs
            .active_mut()
            .is_some_and(|tab| tab.step_forward().is_some());

        stepped && self.start_load(LoadKind::Traverse)
    }

    /// Reload the active tab's current URL without touching its history.
    pub fn reload(&mut self) -> bool {
        let has_url = self.tabs.active().is_some_and(|tab| !tab.url.is_empty());
        has_url && self.start_load(LoadKind::Reload)
    }

    /// Handle a message posted by embedded content.
    pub fn handle_message(&mut self, message: InboundMessage) -> bool {
        match message {
            InboundMessage::Navigate { url } => {
                self.tabs.ensure_active();
                self.navigate(&url)
            }
        }
    }

    /// Parse and handle a raw message. Malformed or unknown messages are ignored.
    pub fn handle_message_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<InboundMessage>(raw) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring inbound message");
                false
            }
        }
    }

    pub fn resolver(&self) -> &InputResolver {
        &self.resolver
    }

    fn start_load(&mut self, kind: LoadKind) -> bool {
        let Some(tab) = self.tabs.active_mut() else {
            return false;
        };

        let token = match tab.begin_load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(tab_id = %tab.id, error = %e, "Cannot start load");
                return false;
            }
        };

        self.scheduler.cancel_tab(&tab.id);
        self.scheduler.schedule_load(
            &tab.id,
            token,
            kind,
            self.config.load_latency(),
            self.config.progress_interval(),
        );

        tracing::info!(tab_id = %tab.id, url = %tab.url, %kind, token, "Load started");
        true
    }

    // === Load clock ===

    /// Advance the load clock and apply every step that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<LoadEvent> {
        self.scheduler
            .advance(elapsed)
            .into_iter()
            .filter_map(|task| self.apply(task))
            .collect()
    }

    /// Advance until no load steps remain.
    pub fn run_until_idle(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Some(wait) = self.scheduler.next_due() {
            events.extend(self.advance(wait));
        }
        events
    }

    pub fn pending_loads(&self) -> usize {
        self.scheduler.pending()
    }

    fn apply(&mut self, task: LoadTask) -> Option<LoadEvent> {
        let tab = match self.tabs.get_by_id_mut(&task.tab_id) {
            Ok(tab) => tab,
            Err(_) => {
                tracing::debug!(tab_id = %task.tab_id, "Dropping load step for closed tab");
                return None;
            }
        };

        if tab.nav_token != task.token {
            tracing::debug!(
                tab_id = %tab.id,
                current = tab.nav_token,
                stale = task.token,
                "Dropping stale load step"
            );
            return None;
        }

        match task.step {
            LoadStep::Progress(step) => {
                let (progress, message) = PROGRESS_STEPS.get(step)?;
                tab.apply_progress(*progress, message);
            }
            LoadStep::Complete(kind) => {
                if let Err(e) = tab.finish_load() {
                    tracing::warn!(tab_id = %tab.id, error = %e, "Cannot complete load");
                    return None;
                }

                match kind {
                    LoadKind::Navigate => tab.use_embedded = true,
                    LoadKind::Traverse | LoadKind::Reload => {
                        let page = resolve_page_content(&tab.url);
                        tab.apply_page_content(&page);
                    }
                }

                tracing::info!(tab_id = %tab.id, url = %tab.url, %kind, "Load completed");
            }
        }

        Some(LoadEvent {
            tab_id: tab.id.clone(),
            progress: tab.progress,
            message: tab.message.clone(),
            completed: matches!(task.step, LoadStep::Complete(_)),
        })
    }

    // === Bookmarks ===

    /// Bookmark or un-bookmark the active tab's URL.
    /// Returns `Some(true)` when added, `Some(false)` when removed, and
    /// `None` when there is nothing to bookmark.
    pub fn toggle_bookmark(&mut self) -> Option<bool> {
        let tab = self.tabs.active().filter(|tab| !tab.url.is_empty())?;

        if self.bookmarks.is_bookmarked(&tab.url) {
            self.bookmarks.remove(&tab.url);
            Some(false)
        } else {
            self.bookmarks.add(&tab.url, &tab.title, &tab.favicon);
            Some(true)
        }
    }

    pub fn is_current_url_bookmarked(&self) -> bool {
        self.tabs
            .active()
            .is_some_and(|tab| self.bookmarks.is_bookmarked(&tab.url))
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn bookmarks_mut(&mut self) -> &mut BookmarkStore {
        &mut self.bookmarks
    }

    // === Achievements ===

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn achievements_mut(&mut self) -> &mut Achievements {
        &mut self.achievements
    }

    // === Snapshot ===

    pub fn snapshot(&self) -> BrowserSnapshot {
        let active = self.tabs.active();

        BrowserSnapshot {
            tabs: self.tabs.tabs().iter().map(TabSnapshot::from).collect(),
            active_index: self.tabs.active_index(),
            can_go_back: active.is_some_and(|tab| tab.can_go_back),
            can_go_forward: active.is_some_and(|tab| tab.can_go_forward),
            is_bookmarked: self.is_current_url_bookmarked(),
            show_landing_page: self.show_landing_page,
            menu_open: self.achievements.is_menu_open(),
            context_menu_open: self.achievements.is_context_menu_open(),
        }
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch the engine used for address bar fallbacks and the search box.
    pub fn set_search_engine(&mut self, engine: SearchEngine) {
        self.config.search_engine = engine;
        self.resolver.set_search_engine(engine);
        tracing::info!(engine = %engine, "Search engine changed");
    }
}
