//! Error types for the sidebar engine
//!
//! Traversal and state transitions never fail. These errors only cover the
//! edges around the engine: loading a menu tree, validating it, and parsing
//! configuration values.

use thiserror::Error;

/// Top-level error type for sidenav
#[derive(Debug, Error)]
pub enum SidenavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu tree parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Duplicate menu item id: {id}")]
    DuplicateItemId { id: String },

    #[error("Duplicate menu id: {id}")]
    DuplicateMenuId { id: i64 },
}

/// Result type alias using [`SidenavError`]
pub type Result<T> = std::result::Result<T, SidenavError>;
