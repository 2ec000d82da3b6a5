//! Core domain logic for the Folio portfolio catalog.
//! Front ends render what this crate derives; they own no catalog rules.

pub mod catalog;
pub mod content;
pub mod logging;
pub mod model;
pub mod routes;
pub mod service;

pub use catalog::filter::{CategoryFilter, ALL_FILTER_LABEL};
pub use catalog::transform::{arrange_projects, arrange_projects_by, matches};
pub use content::graphql::{
    decode_projects_response, GraphQlRequest, PROJECTS_QUERY, PROJECT_BY_SLUG_QUERY,
};
pub use content::source::{
    ContentError, ContentResult, ContentSource, JsonFileContentSource, StaticContentSource,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryFlags};
pub use model::project::{
    parse_timestamp, validate_catalog, ImageRef, ProjectRecord, ProjectValidationError,
};
pub use routes::{project_path, Route, BRAND, NAVIGATION};
pub use service::catalog_service::{
    filter_options, CatalogService, CatalogServiceError, FilterOption, ProjectCard,
    ProjectListResult,
};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
