//! Mirage Tab Management
//!
//! Each tab owns an independent back/forward history stack and a small load
//! state machine (`Empty -> Navigating -> Loaded`). The [`TabCollection`]
//! keeps the ordered tab strip and the active tab pointer.

mod collection;
mod error;
mod state;
mod tab;

pub use collection::TabCollection;
pub use error::TabError;
pub use state::LoadState;
pub use tab::{Tab, COMPLETED_MESSAGE, CONNECTING_MESSAGE, NEW_TAB_TITLE, PROGRESS_STEPS};

pub type Result<T> = std::result::Result<T, TabError>;
