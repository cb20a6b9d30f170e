//! Multi-level menu: collapsible group cards with an indented item tree.

use std::rc::Rc;

use dioxus::prelude::*;
use sidenav_core::{project, Menu, MenuGroupView, RowView, SelectionController, SidebarEvent};

/// Renders `menus` from the controller's current state.
///
/// Clicks are fed back into the controller, which toggles branches and
/// dispatches navigation for leaves. `render_icon` receives the icon token
/// and whether the row is active; without it no icons are drawn.
#[component]
pub fn MultiLevelMenu(
    menus: Vec<Menu>,
    controller: Signal<SelectionController>,
    render_icon: Option<Callback<(String, bool), Element>>,
) -> Element {
    let (groups, class_name) = {
        let ctrl = controller.read();
        (
            project(&menus, ctrl.state(), ctrl.locale()),
            ctrl.config().class_name.clone(),
        )
    };
    let menus = Rc::new(menus);

    rsx! {
        div {
            class: "menu-groups {class_name}",
            for group in groups.into_iter() {
                MenuGroupCard {
                    key: "{group.id}",
                    group,
                    menus: menus.clone(),
                    controller,
                    render_icon,
                }
            }
        }
    }
}

/// One top-level group: header button plus its visible rows.
#[component]
fn MenuGroupCard(
    group: MenuGroupView,
    menus: Rc<Vec<Menu>>,
    controller: Signal<SelectionController>,
    render_icon: Option<Callback<(String, bool), Element>>,
) -> Element {
    let mut controller = controller;
    let menu_id = group.id;
    let header_icon = render_icon.map(|render| render.call((group.icon.clone(), false)));
    let chevron = if group.expanded { "▾" } else { "▸" };
    let header_menus = menus.clone();

    rsx! {
        div {
            class: "menu-group",
            button {
                class: "menu-group-header",
                onclick: move |_| {
                    controller
                        .write()
                        .apply(&header_menus, SidebarEvent::MenuClicked(menu_id));
                },
                div { class: "menu-group-marker" }
                if let Some(icon) = header_icon {
                    div { class: "menu-icon", {icon} }
                }
                h2 { class: "menu-group-title", "{group.label}" }
                if group.has_items {
                    div { class: "menu-chevron", "{chevron}" }
                }
            }

            if group.has_items && group.expanded {
                div {
                    class: "menu-group-items",
                    for row in group.rows.iter() {
                        MenuRow {
                            key: "{row.id}",
                            row: row.clone(),
                            menus: menus.clone(),
                            controller,
                            render_icon,
                        }
                    }
                }
            }
        }
    }
}

/// A single tree row, indented by depth.
#[component]
fn MenuRow(
    row: RowView,
    menus: Rc<Vec<Menu>>,
    controller: Signal<SelectionController>,
    render_icon: Option<Callback<(String, bool), Element>>,
) -> Element {
    let mut controller = controller;
    let active_class = if row.active { " active" } else { "" };
    let depth_class = if row.depth == 0 { " top-level" } else { "" };
    let padding = row.depth * 16 + 16;
    let icon = render_icon.map(|render| render.call((row.icon.clone(), row.active)));
    let chevron = if row.expanded { "▾" } else { "▸" };
    let row_id = row.id.clone();

    rsx! {
        div {
            class: "menu-row{active_class}{depth_class}",
            style: "padding-left: {padding}px",
            onclick: move |_| {
                let request = controller
                    .write()
                    .apply(&menus, SidebarEvent::ItemClicked(row_id.clone()));
                if let Some(request) = request {
                    tracing::debug!("Row {} requested {}", request.item_id, request.href);
                }
            },
            div {
                class: "menu-row-main",
                if row.has_children {
                    div { class: "menu-branch-marker" }
                }
                if let Some(icon) = icon {
                    div { class: "menu-icon", {icon} }
                }
                span { class: "menu-label", "{row.label}" }
                if row.is_new {
                    span { class: "menu-new", "NEW" }
                }
                if row.show_badge {
                    span { class: "menu-badge" }
                }
            }
            if row.has_children {
                div { class: "menu-chevron", "{chevron}" }
            }
        }
    }
}
