//! Mirage Storage Layer
//!
//! SQLite-backed persistence for browser state. Everything the shell keeps
//! between runs lives in named key-value slots (see [`KeyValueStore`]).

mod database;
mod error;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use store::{KeyValueStore, MemoryStore};

pub type Result<T> = std::result::Result<T, StorageError>;
