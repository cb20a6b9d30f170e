//! Primary navigation rail: the narrow section switcher left of the menu.

use dioxus::prelude::*;
use sidenav_core::RailState;

/// Vertical rail of sections. The active entry is highlighted.
///
/// `render_nav_icon` receives each entry's icon token and whether it is active.
#[component]
pub fn NavRail(
    rail: Signal<RailState>,
    on_nav_change: Option<EventHandler<String>>,
    render_nav_icon: Option<Callback<(String, bool), Element>>,
) -> Element {
    let mut rail = rail;
    let rail_read = rail.read().clone();

    rsx! {
        div {
            class: "nav-rail",

            // --- BRAND ---
            div { class: "nav-rail-brand",
                div { class: "nav-rail-logo" }
            }

            // --- SECTIONS ---
            nav {
                class: "nav-rail-items",
                for item in rail_read.items.iter() {
                    {
                        let is_active = rail_read.is_active(item);
                        let item_class = if is_active { "nav-rail-item active" } else { "nav-rail-item" };
                        let code = item.code.clone();
                        let icon = match render_nav_icon {
                            Some(render) => render.call((item.icon.clone(), is_active)),
                            None => rsx! { "{item.icon}" },
                        };
                        rsx! {
                            button {
                                key: "{item.id}",
                                class: "{item_class}",
                                onclick: move |_| {
                                    rail.write().select(&code);
                                    if let Some(handler) = &on_nav_change {
                                        handler.call(code.clone());
                                    }
                                },
                                if is_active {
                                    div { class: "nav-rail-indicator" }
                                }
                                div { class: "nav-rail-icon", {icon} }
                                span { class: "nav-rail-label", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
