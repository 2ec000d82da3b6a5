//! Project record model.
//!
//! # Responsibility
//! - Mirror the project shape served by the headless content API.
//! - Provide timestamp parsing and slug validation helpers.
//!
//! # Invariants
//! - `slug` is non-empty, route-safe and unique within one catalog.
//! - Records are read-only snapshots; core derives views and never mutates them.
//! - A missing or unparseable `createdAt` yields no timestamp (sorted as earliest).

use crate::model::category::{Category, CategoryFlags};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid slug regex"));

/// Image reference attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// One portfolio entry as fetched from the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Opaque CMS identifier. Only detail queries request it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Routing and iteration key.
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Raw timestamp text as served. Use [`ProjectRecord::created_at`] to order.
    ///
    /// Numeric epoch milliseconds are normalized to RFC 3339 text; any other
    /// non-string value decodes as `None`.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub full_image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(flatten)]
    pub flags: CategoryFlags,
}

impl ProjectRecord {
    /// Creates a record with no timestamp, image or categories.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            created_at: None,
            full_image: None,
            github_url: None,
            site: None,
            flags: CategoryFlags::default(),
        }
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.flags.set(category, true);
        self
    }

    /// Parsed creation timestamp.
    ///
    /// Returns `None` when `createdAt` is missing or cannot be parsed.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.flags.is_set(category)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.full_image.as_ref().map(|image| image.url.as_str())
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.slug.trim().is_empty() {
            return Err(ProjectValidationError::EmptySlug);
        }
        if !SLUG_RE.is_match(&self.slug) {
            return Err(ProjectValidationError::InvalidSlug(self.slug.clone()));
        }
        Ok(())
    }
}

/// Validation error for project records and catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptySlug,
    InvalidSlug(String),
    DuplicateSlug(String),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "project slug cannot be empty"),
            Self::InvalidSlug(slug) => write!(
                f,
                "project slug `{slug}` must only contain letters, digits, `-` or `_`"
            ),
            Self::DuplicateSlug(slug) => write!(f, "duplicate project slug `{slug}`"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Validates every record and slug uniqueness across the catalog.
pub fn validate_catalog(projects: &[ProjectRecord]) -> Result<(), ProjectValidationError> {
    let mut seen = BTreeSet::<&str>::new();
    for project in projects {
        project.validate()?;
        if !seen.insert(project.slug.as_str()) {
            return Err(ProjectValidationError::DuplicateSlug(project.slug.clone()));
        }
    }
    Ok(())
}

/// Parses RFC 3339 timestamps, falling back to bare `YYYY-MM-DD` dates at
/// midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|timestamp| timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
