//! Path resolution over the menu tree.
//!
//! All lookups are depth-first pre-order: a node is checked before its
//! children. When several nodes share an `href` (or an `id`), the first one
//! in document order wins. Nothing is deduplicated or rejected here; see
//! [`crate::loader::validate_tree`] for an opt-in duplicate check.

use std::collections::HashSet;

use tracing::trace;

use crate::model::{Menu, MenuItem};

/// Finds the first node whose `href` equals `href`.
pub fn find_node_by_href<'a>(items: &'a [MenuItem], href: &str) -> Option<&'a MenuItem> {
    for item in items {
        if item.href == href {
            return Some(item);
        }
        if let Some(found) = find_node_by_href(&item.children, href) {
            return Some(found);
        }
    }
    None
}

/// Finds the first node whose `id` equals `id`.
pub fn find_node_by_id<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_node_by_id(&item.children, id) {
            return Some(found);
        }
    }
    None
}

/// Returns the ids of the strict ancestors of `target_id`, root first.
///
/// The target itself is excluded. The result is empty when the target is
/// missing or sits directly in `items`.
pub fn ancestor_chain(items: &[MenuItem], target_id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_ancestors(items, target_id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_ancestors(items: &[MenuItem], target_id: &str, path: &mut Vec<String>) -> bool {
    for item in items {
        if item.id == target_id {
            return true;
        }
        if item.is_branch() {
            path.push(item.id.clone());
            if collect_ancestors(&item.children, target_id, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}

/// Returns the first menu (input order) whose items contain a node at `href`.
pub fn owning_menu<'a>(menus: &'a [Menu], href: &str) -> Option<&'a Menu> {
    menus
        .iter()
        .find(|menu| find_node_by_href(&menu.items, href).is_some())
}

/// Computes the set of ids that must be open for the node at `active_href`
/// to be visible.
///
/// For every menu containing a match, the ancestor chain of the matched node
/// is added along with the menu's own id as text. A path matching nothing
/// yields an empty set.
pub fn compute_expansion_for_active_path(menus: &[Menu], active_href: &str) -> HashSet<String> {
    let mut expanded = HashSet::new();

    for menu in menus {
        let Some(active) = find_node_by_href(&menu.items, active_href) else {
            continue;
        };
        let ancestors = ancestor_chain(&menu.items, &active.id);
        trace!(
            menu = %menu.id,
            node = %active.id,
            depth = ancestors.len(),
            "Resolved active node"
        );
        expanded.extend(ancestors);
        expanded.insert(menu.id.to_string());
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuItem> {
        vec![
            MenuItem::leaf("a", "A", "/a"),
            MenuItem::branch(
                "b",
                "B",
                vec![MenuItem::branch(
                    "c",
                    "C",
                    vec![MenuItem::leaf("d", "D", "/b/c/d")],
                )],
            ),
        ]
    }

    #[test]
    fn test_find_by_href_pre_order() {
        let items = tree();
        assert_eq!(find_node_by_href(&items, "/a").map(|n| n.id.as_str()), Some("a"));
        assert_eq!(find_node_by_href(&items, "/b/c/d").map(|n| n.id.as_str()), Some("d"));
        assert!(find_node_by_href(&items, "/missing").is_none());
    }

    #[test]
    fn test_find_by_href_first_match_wins() {
        let items = vec![
            MenuItem::branch("p", "P", vec![MenuItem::leaf("deep", "Deep", "/dup")]),
            MenuItem::leaf("shallow", "Shallow", "/dup"),
        ];
        // The nested match comes first in document order
        assert_eq!(find_node_by_href(&items, "/dup").map(|n| n.id.as_str()), Some("deep"));
    }

    #[test]
    fn test_parent_checked_before_children() {
        let items = vec![MenuItem::branch(
            "parent",
            "Parent",
            vec![MenuItem::leaf("child", "Child", "/same")],
        )
        .with_href("/same")];
        assert_eq!(find_node_by_href(&items, "/same").map(|n| n.id.as_str()), Some("parent"));
    }

    #[test]
    fn test_ancestor_chain() {
        let items = tree();
        assert_eq!(ancestor_chain(&items, "d"), vec!["b", "c"]);
        assert_eq!(ancestor_chain(&items, "c"), vec!["b"]);
        assert!(ancestor_chain(&items, "a").is_empty());
        assert!(ancestor_chain(&items, "missing").is_empty());
    }

    #[test]
    fn test_ancestor_chain_does_not_leak_siblings() {
        let items = vec![
            MenuItem::branch("x", "X", vec![MenuItem::leaf("x1", "X1", "/x1")]),
            MenuItem::branch("y", "Y", vec![MenuItem::leaf("y1", "Y1", "/y1")]),
        ];
        assert_eq!(ancestor_chain(&items, "y1"), vec!["y"]);
    }

    #[test]
    fn test_compute_expansion() {
        let menus = vec![
            Menu::new(1, "ONE", "One").with_items(tree()),
            Menu::new(2, "TWO", "Two").with_items(vec![MenuItem::leaf("e", "E", "/e")]),
        ];

        let expanded = compute_expansion_for_active_path(&menus, "/b/c/d");
        let expected: HashSet<String> = ["b", "c", "1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(expanded, expected);

        let expanded = compute_expansion_for_active_path(&menus, "/e");
        assert_eq!(expanded, HashSet::from(["2".to_string()]));

        assert!(compute_expansion_for_active_path(&menus, "/nowhere").is_empty());
    }

    #[test]
    fn test_owning_menu_uses_input_order() {
        let menus = vec![
            Menu::new(7, "LATE", "Late")
                .with_order(9)
                .with_items(vec![MenuItem::leaf("l", "L", "/shared")]),
            Menu::new(3, "EARLY", "Early")
                .with_order(1)
                .with_items(vec![MenuItem::leaf("e", "E", "/shared")]),
        ];
        assert_eq!(owning_menu(&menus, "/shared").map(|m| m.id.0), Some(7));
    }
}
