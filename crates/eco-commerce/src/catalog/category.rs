//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label that stands for "every category" in a category selection.
pub const ALL_CATEGORIES: &str = "all";

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Accessories,
    Electronics,
    Beauty,
    Home,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Clothing,
        Category::Accessories,
        Category::Electronics,
        Category::Beauty,
        Category::Home,
    ];

    /// The category label as used by filters and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
            Category::Electronics => "electronics",
            Category::Beauty => "beauty",
            Category::Home => "home",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Electronics => "Electronics",
            Category::Beauty => "Beauty",
            Category::Home => "Home",
        }
    }

    /// Labels offered by the category picker: the "all" sentinel first,
    /// then every category.
    pub fn picker_labels() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(Self::ALL.iter().map(Category::as_str))
            .collect()
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!(" Beauty ".parse::<Category>().unwrap(), Category::Beauty);
        assert!("garden".parse::<Category>().is_err());
        assert!(ALL_CATEGORIES.parse::<Category>().is_err());
    }

    #[test]
    fn test_picker_labels() {
        assert_eq!(
            Category::picker_labels(),
            vec!["all", "clothing", "accessories", "electronics", "beauty", "home"]
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"electronics\"");
        let back: Category = serde_json::from_str("\"clothing\"").unwrap();
        assert_eq!(back, Category::Clothing);
    }
}
