//! # Sidenav Core
//!
//! Navigation state engine for collapsible, multi-level sidebars.
//!
//! The engine keeps expand/collapse and "active" state in step with the
//! current location. It is pure in-memory logic with no UI dependency; a
//! presentation layer feeds it the menu tree and events, then draws what it
//! reports.
//!
//! ## Key Types
//!
//! - [`Menu`] / [`MenuItem`]: the read-only menu tree
//! - [`SidebarState`]: active path, expansion set, and open menu group
//! - [`SelectionController`]: state plus navigation dispatch (callback or [`Router`])
//! - [`Locale`] / [`Localized`]: bilingual display labels
//!
//! ## Lookup Semantics
//!
//! Lookups are depth-first pre-order and the first match wins, both for
//! duplicate hrefs and duplicate ids. Use [`validate_tree`] to detect
//! duplicates up front.

pub mod config;
pub mod controller;
pub mod error;
pub mod expansion;
pub mod history;
pub mod loader;
pub mod locale;
pub mod model;
pub mod rail;
pub mod resolver;
pub mod sample;
pub mod state;
pub mod view;

// Re-export main types
pub use config::*;
pub use controller::*;
pub use error::*;
pub use expansion::*;
pub use history::*;
pub use loader::*;
pub use locale::*;
pub use model::*;
pub use rail::*;
pub use resolver::*;
pub use sample::*;
pub use state::*;
pub use view::*;
