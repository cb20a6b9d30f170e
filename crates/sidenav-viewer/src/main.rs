//! Entry point for the sidebar viewer.
//!
//! This Dioxus desktop application renders a menu tree (from a JSON file or
//! the built-in sample) with the full sidebar layout and a navigation log.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use sidenav_core::{load_menus_from_path, sample_menus, validate_tree, Locale};
use sidenav_ui::SIDEBAR_CSS;
use sidenav_viewer::{viewer_config, RootApp, ViewerSettings, SETTINGS};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "sidenav-viewer")]
#[command(about = "Multi-level sidebar viewer")]
struct Args {
    /// Path to a JSON menu tree (uses the built-in sample if not provided)
    #[arg(short, long)]
    menus: Option<PathBuf>,

    /// Display language: en or kh
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Initially active path
    #[arg(short, long, default_value = "/user-management/roles/list")]
    active: String,

    /// Header title
    #[arg(short, long)]
    title: Option<String>,

    /// Report navigations through the callback only, without a router
    #[arg(long)]
    no_router: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Sidebar Viewer");

    let locale: Locale = args.locale.parse()?;

    let menus = match &args.menus {
        Some(path) => load_menus_from_path(path)
            .with_context(|| format!("failed to load menus from {}", path.display()))?,
        None => sample_menus(),
    };

    // Duplicates are tolerated (first match wins), but worth a warning
    if let Err(e) = validate_tree(&menus) {
        tracing::warn!("Menu tree has duplicates: {}", e);
    }

    let config = viewer_config(locale, !args.no_router, args.title);
    tracing::info!(
        "Router integration {}",
        if config.enable_router_integration { "enabled" } else { "disabled" }
    );

    SETTINGS
        .set(ViewerSettings {
            menus,
            config,
            active_path: args.active,
        })
        .ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Sidebar Viewer")
                        .with_inner_size(LogicalSize::new(1400, 900)),
                )
                .with_custom_head(format!("<style>{}</style>", SIDEBAR_CSS)),
        )
        .launch(RootApp);

    Ok(())
}
