//! Sidebar viewer
//!
//! Desktop shell around the sidebar components: owns the engine state,
//! records navigation events, and switches locale.

pub mod app;
pub mod setup;

use std::sync::OnceLock;

use sidenav_core::{Menu, SidebarConfig};

pub use app::RootApp;
pub use setup::{build_controller, viewer_config, RecordingRouter};

/// Startup settings resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct ViewerSettings {
    pub menus: Vec<Menu>,
    pub config: SidebarConfig,
    pub active_path: String,
}

/// Global storage for the startup settings.
pub static SETTINGS: OnceLock<ViewerSettings> = OnceLock::new();
