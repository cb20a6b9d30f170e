//! Menu tree model: top-level menus, nested items, and rail entries.
//!
//! The tree is read-only input. The engine never reorders or mutates it;
//! sorting happens on borrowed views produced by [`sorted_by_order`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a top-level menu group.
///
/// Stringified (plain integer text) when stored in the expansion set, so a
/// group and its items share one id space there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub i64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MenuId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque action payload attached to a menu item.
///
/// Carried through untouched; the engine never interprets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuFunction {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A node at any depth below a top-level menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_kh: String,
    /// Navigation target. May be empty for pure branch nodes.
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub show_badge: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub order_sort: i32,
    #[serde(default)]
    pub children: Vec<MenuItem>,
    #[serde(default)]
    pub functions: Vec<MenuFunction>,
}

impl MenuItem {
    /// Creates a leaf item (no children) pointing at `href`.
    pub fn leaf(id: impl Into<String>, name_en: impl Into<String>, href: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            code: id.to_uppercase(),
            id,
            name_en: name_en.into(),
            name_kh: String::new(),
            href: href.into(),
            icon: String::new(),
            show_badge: false,
            is_new: false,
            order_sort: 0,
            children: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Creates a branch item holding `children`.
    pub fn branch(
        id: impl Into<String>,
        name_en: impl Into<String>,
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            children,
            ..Self::leaf(id, name_en, "")
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn with_name_kh(mut self, name_kh: impl Into<String>) -> Self {
        self.name_kh = name_kh.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_order(mut self, order_sort: i32) -> Self {
        self.order_sort = order_sort;
        self
    }

    pub fn with_badge(mut self) -> Self {
        self.show_badge = true;
        self
    }

    pub fn marked_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// A branch has children; clicking it toggles expansion.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// A leaf has no children; clicking it navigates.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A top-level menu group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub code: String,
    pub name_en: String,
    pub name_kh: String,
    #[serde(default)]
    pub short_name_en: String,
    #[serde(default)]
    pub short_name_kh: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_kh: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub order_sort: i32,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(id: i64, code: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            id: MenuId(id),
            code: code.into(),
            name_en: name_en.into(),
            name_kh: String::new(),
            short_name_en: String::new(),
            short_name_kh: String::new(),
            description_en: String::new(),
            description_kh: String::new(),
            icon: String::new(),
            href: String::new(),
            order_sort: 0,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_name_kh(mut self, name_kh: impl Into<String>) -> Self {
        self.name_kh = name_kh.into();
        self
    }

    pub fn with_short_names(mut self, en: impl Into<String>, kh: impl Into<String>) -> Self {
        self.short_name_en = en.into();
        self.short_name_kh = kh.into();
        self
    }

    pub fn with_descriptions(mut self, en: impl Into<String>, kh: impl Into<String>) -> Self {
        self.description_en = en.into();
        self.description_kh = kh.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn with_order(mut self, order_sort: i32) -> Self {
        self.order_sort = order_sort;
        self
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// An entry of the primary navigation rail shown beside the menu tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl NavItem {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            id: code.to_lowercase(),
            code,
            label: label.into(),
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Anything with a sibling display-order hint.
pub trait OrderSort {
    fn order_sort(&self) -> i32;
}

impl OrderSort for Menu {
    fn order_sort(&self) -> i32 {
        self.order_sort
    }
}

impl OrderSort for MenuItem {
    fn order_sort(&self) -> i32 {
        self.order_sort
    }
}

/// Returns the siblings in ascending `order_sort`, ties kept in input order.
///
/// The input slice is left untouched.
pub fn sorted_by_order<T: OrderSort>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| item.order_sort());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_and_leaf() {
        let leaf = MenuItem::leaf("a", "A", "/a");
        let branch = MenuItem::branch("b", "B", vec![leaf.clone()]);

        assert!(leaf.is_leaf());
        assert!(!leaf.is_branch());
        assert!(branch.is_branch());
        assert!(branch.href.is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![
            MenuItem::leaf("x", "X", "/x").with_order(2),
            MenuItem::leaf("y", "Y", "/y").with_order(1),
            MenuItem::leaf("z", "Z", "/z").with_order(2),
            MenuItem::leaf("w", "W", "/w").with_order(1),
        ];

        let first: Vec<&str> = sorted_by_order(&items).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(first, vec!["y", "w", "x", "z"]);

        // Sorting again yields the same order, and the input is untouched
        let second: Vec<&str> = sorted_by_order(&items).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(items[0].id, "x");
    }

    #[test]
    fn test_menu_id_display() {
        assert_eq!(MenuId(42).to_string(), "42");
        assert_eq!(MenuId(-1).to_string(), "-1");
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let json = r#"{"id":"a","code":"A","name_en":"Alpha","name_kh":"អា"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert!(item.href.is_empty());
        assert!(item.children.is_empty());
        assert!(!item.show_badge);
        assert!(!item.is_new);
        assert_eq!(item.order_sort, 0);
    }

    #[test]
    fn test_function_payload_is_preserved() {
        let json = r#"{"id":"f1","code":"EXPORT","name":"Export","scope":"all","level":3}"#;
        let function: MenuFunction = serde_json::from_str(json).unwrap();

        assert_eq!(function.code, "EXPORT");
        assert_eq!(function.extra.get("scope"), Some(&serde_json::json!("all")));
        assert_eq!(function.extra.get("level"), Some(&serde_json::json!(3)));
    }
}
