//! Sorting and filtering of fetched project collections.
//!
//! # Invariants
//! - Output is ordered by `createdAt` descending; ties keep input order.
//! - Records without a parseable `createdAt` sort after all dated records.
//! - The input slice is never mutated.

use crate::catalog::filter::CategoryFilter;
use crate::model::project::ProjectRecord;
use std::cmp::Reverse;

/// Returns the display sequence for `projects` under `filter`.
pub fn arrange_projects(projects: &[ProjectRecord], filter: &CategoryFilter) -> Vec<ProjectRecord> {
    if matches!(filter, CategoryFilter::Unmatched(_)) {
        return Vec::new();
    }

    let mut keyed = projects
        .iter()
        .map(|project| (project.created_at(), project))
        .collect::<Vec<_>>();
    // `Option` orders `None` first, so reversing puts undated records last.
    keyed.sort_by_key(|(created_at, _)| Reverse(*created_at));

    keyed
        .into_iter()
        .map(|(_, project)| project)
        .filter(|project| matches(project, filter))
        .cloned()
        .collect()
}

/// Parses a raw selector value and arranges `projects` with it.
pub fn arrange_projects_by(projects: &[ProjectRecord], filter: Option<&str>) -> Vec<ProjectRecord> {
    arrange_projects(projects, &CategoryFilter::parse(filter))
}

/// Whether one record belongs in the view selected by `filter`.
pub fn matches(project: &ProjectRecord, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => project.has_category(*category),
        CategoryFilter::Unmatched(_) => false,
    }
}
