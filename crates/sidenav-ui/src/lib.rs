//! Dioxus components for multi-level sidebars.
//!
//! Everything here is presentation: state lives in a
//! [`sidenav_core::SelectionController`] owned by the host and passed in as a
//! signal. Components read its projection and feed clicks back into it.

pub mod icons;
pub mod layout;
pub mod menu_tree;
pub mod nav_rail;
pub mod navigation_log;

pub use icons::icon_glyph;
pub use layout::SidebarLayout;
pub use menu_tree::MultiLevelMenu;
pub use nav_rail::NavRail;
pub use navigation_log::NavigationLogPanel;

/// Shared CSS for the sidebar components.
pub const SIDEBAR_CSS: &str = include_str!("../assets/sidenav.css");
