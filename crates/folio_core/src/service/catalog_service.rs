//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide list/detail/filter-option APIs for portfolio pages.
//! - Project records into render-ready cards.
//!
//! # Invariants
//! - Listing never mutates the fetched snapshot.
//! - List items follow `arrange_projects` ordering.
//! - Unknown filters and missing slugs are empty results, not errors.

use crate::catalog::filter::{CategoryFilter, ALL_FILTER_LABEL};
use crate::catalog::transform::arrange_projects;
use crate::content::source::{ContentError, ContentSource};
use crate::model::category::Category;
use crate::model::project::ProjectRecord;
use crate::routes::project_path;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Detail lookup with a blank slug.
    InvalidSlug(String),
    /// Content source failure.
    Content(ContentError),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlug(value) => write!(f, "invalid project slug: `{value}`"),
            Self::Content(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Content(err) => Some(err),
            Self::InvalidSlug(_) => None,
        }
    }
}

impl From<ContentError> for CatalogServiceError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

/// Render-ready projection of one project for the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Alt text for the card image. The slug, matching the listing page.
    pub image_alt: String,
    /// Detail page path built from the slug.
    pub path: String,
    /// Enabled categories, shown as skill badges.
    pub categories: Vec<Category>,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url().map(str::to_string),
            image_alt: project.slug.clone(),
            path: project_path(&project.slug),
            categories: project.flags.active(),
        }
    }
}

/// List result envelope used by presentation callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResult {
    /// Cards ordered by `createdAt` descending.
    pub items: Vec<ProjectCard>,
    /// Selector the list was derived with.
    pub applied_filter: CategoryFilter,
    /// Size of the fetched snapshot before filtering.
    pub total: usize,
}

/// One entry of the filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub filter: CategoryFilter,
}

/// Catalog service facade over a content source.
pub struct CatalogService<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> CatalogService<S> {
    /// Creates a service using the provided content source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Lists project cards for the listing page.
    ///
    /// `filter` follows [`CategoryFilter::parse`]: absent, blank or `All`
    /// lists every project.
    pub fn list_projects(
        &self,
        filter: Option<&str>,
    ) -> Result<ProjectListResult, CatalogServiceError> {
        let applied_filter = CategoryFilter::parse(filter);
        let projects = self.source.fetch_projects().inspect_err(|err| {
            warn!("event=catalog_list module=service status=error error={err}");
        })?;
        let items = arrange_projects(&projects, &applied_filter)
            .iter()
            .map(ProjectCard::from)
            .collect::<Vec<_>>();

        info!(
            "event=catalog_list module=service status=ok filter={} total={} shown={}",
            applied_filter,
            projects.len(),
            items.len()
        );

        Ok(ProjectListResult {
            items,
            applied_filter,
            total: projects.len(),
        })
    }

    /// Gets one project for the detail page.
    ///
    /// Returns `Ok(None)` when no project has this slug.
    pub fn project_detail(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectRecord>, CatalogServiceError> {
        let normalized = slug.trim();
        if normalized.is_empty() {
            return Err(CatalogServiceError::InvalidSlug(slug.to_string()));
        }

        let found = self.source.fetch_project(normalized)?.into_iter().next();
        info!(
            "event=catalog_detail module=service status=ok slug={} found={}",
            normalized,
            found.is_some()
        );
        Ok(found)
    }

    /// Filter control entries: `All` followed by every category label.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        filter_options()
    }
}

/// Filter control entries independent of any content source.
pub fn filter_options() -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        label: ALL_FILTER_LABEL,
        filter: CategoryFilter::All,
    })
    .chain(Category::ALL.into_iter().map(|category| FilterOption {
        label: category.label(),
        filter: CategoryFilter::Only(category),
    }))
    .collect()
}
