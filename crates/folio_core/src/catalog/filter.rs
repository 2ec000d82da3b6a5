//! Category filter selector.

use crate::model::category::Category;
use std::fmt::{Display, Formatter};

/// Sentinel selector label meaning "no filter".
pub const ALL_FILTER_LABEL: &str = "All";

/// Typed form of the filter control's selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Keep projects flagged with this category.
    Only(Category),
    /// A name outside the known category set. Matches nothing.
    Unmatched(String),
}

impl CategoryFilter {
    /// Parses an optional selector value.
    ///
    /// - `None`, blank or `All` (any case) -> [`CategoryFilter::All`].
    /// - A known category name (any case) -> [`CategoryFilter::Only`].
    /// - Anything else -> [`CategoryFilter::Unmatched`] with lowercase text.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::All;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_FILTER_LABEL) {
            return Self::All;
        }
        match Category::parse(trimmed) {
            Some(category) => Self::Only(category),
            None => Self::Unmatched(trimmed.to_lowercase()),
        }
    }

    /// Label shown as the control's current value.
    ///
    /// Unknown names are shown with their first character upper-cased.
    pub fn label(&self) -> String {
        match self {
            Self::All => ALL_FILTER_LABEL.to_string(),
            Self::Only(category) => category.label().to_string(),
            Self::Unmatched(name) => capitalize(name),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category.name()),
            Self::Unmatched(name) => write!(f, "{name}"),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
