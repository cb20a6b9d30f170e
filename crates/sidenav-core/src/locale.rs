//! Locale selection and per-node display labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SidenavError;
use crate::model::{Menu, MenuItem};

/// Display language for node labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Kh,
}

impl Locale {
    /// Returns the short language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Kh => "kh",
        }
    }

    /// Returns the other supported locale.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Kh,
            Locale::Kh => Locale::En,
        }
    }

    /// Returns all supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Kh]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = SidenavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "kh" => Ok(Locale::Kh),
            _ => Err(SidenavError::UnknownLocale(s.to_string())),
        }
    }
}

/// Nodes carrying bilingual names.
///
/// The Khmer field is returned for [`Locale::Kh`], the English field
/// otherwise. An empty field is returned as-is; there is no fallback.
pub trait Localized {
    fn name_en(&self) -> &str;
    fn name_kh(&self) -> &str;

    fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Kh => self.name_kh(),
            _ => self.name_en(),
        }
    }
}

impl Localized for MenuItem {
    fn name_en(&self) -> &str {
        &self.name_en
    }

    fn name_kh(&self) -> &str {
        &self.name_kh
    }
}

impl Localized for Menu {
    fn name_en(&self) -> &str {
        &self.name_en
    }

    fn name_kh(&self) -> &str {
        &self.name_kh
    }
}

impl Menu {
    pub fn short_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Kh => &self.short_name_kh,
            _ => &self.short_name_en,
        }
    }

    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::Kh => &self.description_kh,
            _ => &self.description_en,
        }
    }
}

/// Free-function form of [`Localized::display_name`].
pub fn display_name<N: Localized + ?Sized>(node: &N, locale: Locale) -> &str {
    node.display_name(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_switches_field() {
        let item = MenuItem::leaf("r", "Roles", "/roles").with_name_kh("តួនាទី");
        assert_eq!(display_name(&item, Locale::En), "Roles");
        assert_eq!(display_name(&item, Locale::Kh), "តួនាទី");
    }

    #[test]
    fn test_empty_field_has_no_fallback() {
        let item = MenuItem::leaf("r", "Roles", "/roles");
        assert_eq!(item.display_name(Locale::Kh), "");

        let menu = Menu::new(1, "M", "").with_name_kh("ម");
        assert_eq!(menu.display_name(Locale::En), "");
        assert_eq!(menu.display_name(Locale::Kh), "ម");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("KH".parse::<Locale>().unwrap(), Locale::Kh);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(SidenavError::UnknownLocale(tag)) if tag == "fr"
        ));
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&Locale::Kh).unwrap(), "\"kh\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Locale::En.toggled(), Locale::Kh);
        assert_eq!(Locale::Kh.toggled(), Locale::En);
    }
}
