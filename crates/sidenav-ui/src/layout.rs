//! Full sidebar layout: rail on the left, header and content on the right.

use dioxus::prelude::*;
use sidenav_core::RailState;

use crate::nav_rail::NavRail;

/// Application frame around the menu (or any other content).
#[component]
pub fn SidebarLayout(
    title: String,
    rail: Signal<RailState>,
    on_nav_change: Option<EventHandler<String>>,
    render_nav_icon: Option<Callback<(String, bool), Element>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "sidebar-layout",

            NavRail { rail, on_nav_change, render_nav_icon }

            div {
                class: "sidebar-content",

                // Header
                header {
                    class: "sidebar-header",
                    div { class: "sidebar-header-brand",
                        div { class: "sidebar-header-logo" }
                        h1 { class: "sidebar-header-title", "{title}" }
                    }
                    button { class: "sidebar-header-search", title: "Search", "⌕" }
                }

                main {
                    class: "sidebar-main",
                    {children}
                }
            }
        }
    }
}
