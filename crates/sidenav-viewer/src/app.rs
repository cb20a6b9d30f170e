//! Root application component for the sidebar viewer.

use dioxus::prelude::*;

use sidenav_core::{Locale, NavigationLog, RailState};
use sidenav_ui::{icon_glyph, MultiLevelMenu, NavigationLogPanel, SidebarLayout};

use crate::setup::build_controller;
use crate::SETTINGS;

/// Root component: builds the controller once and lays out the demo.
#[component]
pub fn RootApp() -> Element {
    let settings = SETTINGS.get().cloned().unwrap_or_default();

    let mut nav_log = use_signal(NavigationLog::new);

    let mut controller = use_signal(|| {
        build_controller(&settings, move |href, item| {
            tracing::info!("Navigated to {} ({})", href, item.name_en);
            nav_log.write().record(href, item);
        })
    });

    let rail = use_signal(|| {
        RailState::new(
            settings.config.nav_items.clone(),
            settings.config.active_nav_code.clone(),
        )
    });

    let render_icon = Callback::new(|(token, active): (String, bool)| {
        let glyph_class = if active { "menu-glyph active" } else { "menu-glyph" };
        rsx! {
            span { class: "{glyph_class}", "{icon_glyph(&token)}" }
        }
    });

    let locale = controller.read().locale();
    let switch_label = match locale {
        Locale::En => "🇰🇭 Switch to Khmer",
        Locale::Kh => "🇬🇧 Switch to English",
    };
    let title = settings.config.header_title.clone();

    rsx! {
        SidebarLayout {
            title,
            rail,
            on_nav_change: move |code: String| {
                tracing::info!("Rail section changed to {}", code);
            },
            render_nav_icon: render_icon,

            div {
                class: "viewer-grid",

                // Menu tree with language switch
                div {
                    class: "viewer-menu",
                    button {
                        class: "locale-switch",
                        onclick: move |_| {
                            let next = controller.read().locale().toggled();
                            tracing::info!("Switching locale to {}", next);
                            controller.write().set_locale(next);
                        },
                        "{switch_label}"
                    }
                    MultiLevelMenu {
                        menus: settings.menus.clone(),
                        controller,
                        render_icon,
                    }
                }

                // Navigation log
                NavigationLogPanel { log: nav_log }
            }
        }
    }
}
