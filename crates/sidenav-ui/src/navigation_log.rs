//! Navigation log panel showing recent leaf navigations.

use dioxus::prelude::*;
use sidenav_core::NavigationLog;

/// Newest-first list of navigation events.
#[component]
pub fn NavigationLogPanel(log: Signal<NavigationLog>) -> Element {
    let log_read = log.read();

    rsx! {
        section {
            class: "nav-log-panel",

            div {
                class: "panel-header",
                h3 { class: "panel-title", "Navigation Log" }
            }

            if log_read.is_empty() {
                p {
                    class: "nav-log-empty",
                    "Click any menu item to see navigation events..."
                }
            } else {
                div {
                    class: "nav-log-list",
                    for (i, entry) in log_read.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "nav-log-entry",
                            "{entry.describe()}"
                        }
                    }
                }
            }
        }
    }
}
