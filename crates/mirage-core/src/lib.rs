//! Mirage Core
//!
//! Central coordination layer for the Mirage browser shell. [`Browser`] owns
//! every piece of state; the UI layer sends it commands and re-renders from
//! [`BrowserSnapshot`].

mod achievements;
mod bookmarks;
mod browser;
mod config;
mod error;
mod scheduler;
mod snapshot;

pub use achievements::{Achievement, AchievementKind, Achievements};
pub use bookmarks::{Bookmark, BookmarkStore, BOOKMARKS_SLOT};
pub use browser::{Browser, InboundMessage, LoadEvent};
pub use config::{Config, InterfaceConfig, Shortcut};
pub use error::CoreError;
pub use scheduler::{LoadKind, LoadScheduler, LoadStep, LoadTask};
pub use snapshot::{BrowserSnapshot, TabSnapshot};

// Re-export core components
pub use mirage_navigation::{
    extract_domain, favicon_for, resolve_page_content, InputResolver, PageContent, SearchEngine,
};
pub use mirage_storage::{Database, KeyValueStore, MemoryStore, StorageError};
pub use mirage_tabs::{LoadState, Tab, TabCollection, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Output goes to stderr so stdout stays free for the shell protocol.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
