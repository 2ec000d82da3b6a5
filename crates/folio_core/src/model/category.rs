//! Skill/technology categories attached to portfolio projects.
//!
//! # Responsibility
//! - Name the closed set of filterable categories.
//! - Map the content API's boolean flag fields into an explicit flag set.
//!
//! # Invariants
//! - `Category::name()` equals the wire field name of the flag.
//! - A missing or `null` flag on the wire is `false`.

use serde::{Deserialize, Deserializer, Serialize};

/// Filterable project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Html,
    Css,
    Javascript,
    Photoshop,
    Illustrator,
    Gsap,
    Adobe,
}

impl Category {
    /// Every category in declaration (display) order.
    pub const ALL: [Category; 7] = [
        Category::Html,
        Category::Css,
        Category::Javascript,
        Category::Photoshop,
        Category::Illustrator,
        Category::Gsap,
        Category::Adobe,
    ];

    /// Lowercase wire field name, e.g. `javascript`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Javascript => "javascript",
            Self::Photoshop => "photoshop",
            Self::Illustrator => "illustrator",
            Self::Gsap => "gsap",
            Self::Adobe => "adobe",
        }
    }

    /// Human-facing label used by filter controls and cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Javascript => "Javascript",
            Self::Photoshop => "Photoshop",
            Self::Illustrator => "Illustrator",
            Self::Gsap => "GSAP",
            Self::Adobe => "Adobe",
        }
    }

    /// Parses a category name case-insensitively.
    ///
    /// Returns `None` for names outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
    }
}

/// Explicit category membership for one project.
///
/// Serialized flattened into the project record so the wire shape stays
/// `{"html": true, "css": false, ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFlags {
    #[serde(default, deserialize_with = "null_as_false")]
    pub html: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub css: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub javascript: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub photoshop: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub illustrator: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub gsap: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub adobe: bool,
}

impl CategoryFlags {
    /// Builds a flag set with exactly the given categories enabled.
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut flags = Self::default();
        for category in categories {
            flags.set(*category, true);
        }
        flags
    }

    pub fn is_set(&self, category: Category) -> bool {
        match category {
            Category::Html => self.html,
            Category::Css => self.css,
            Category::Javascript => self.javascript,
            Category::Photoshop => self.photoshop,
            Category::Illustrator => self.illustrator,
            Category::Gsap => self.gsap,
            Category::Adobe => self.adobe,
        }
    }

    pub fn set(&mut self, category: Category, value: bool) {
        let slot = match category {
            Category::Html => &mut self.html,
            Category::Css => &mut self.css,
            Category::Javascript => &mut self.javascript,
            Category::Photoshop => &mut self.photoshop,
            Category::Illustrator => &mut self.illustrator,
            Category::Gsap => &mut self.gsap,
            Category::Adobe => &mut self.adobe,
        };
        *slot = value;
    }

    /// Enabled categories in declaration order.
    pub fn active(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.is_set(*category))
            .collect()
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryFlags};

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Category::parse("HTML"), Some(Category::Html));
        assert_eq!(Category::parse(" JavaScript "), Some(Category::Javascript));
        assert_eq!(Category::parse("react"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.name()), Some(category));
        }
    }

    #[test]
    fn active_lists_enabled_flags_in_declaration_order() {
        let flags = CategoryFlags::from_categories(&[Category::Gsap, Category::Html]);
        assert_eq!(flags.active(), vec![Category::Html, Category::Gsap]);

        let mut cleared = flags;
        cleared.set(Category::Html, false);
        assert_eq!(cleared.active(), vec![Category::Gsap]);
    }
}
