//! Content source contracts and local implementations.
//!
//! # Responsibility
//! - Abstract where project snapshots come from.
//! - Provide in-memory and saved-response (file) sources.
//!
//! # Invariants
//! - Every fetch returns a fresh snapshot; callers own the returned records.
//! - Snapshots are validated before they leave the source.

use crate::content::graphql::decode_projects_response;
use crate::model::project::{validate_catalog, ProjectRecord, ProjectValidationError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ContentResult<T> = Result<T, ContentError>;

/// Error for fetching or decoding project content.
#[derive(Debug)]
pub enum ContentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
    /// Messages from a GraphQL `errors` array.
    GraphQl(Vec<String>),
    Validation(ProjectValidationError),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "invalid content payload: {err}"),
            Self::GraphQl(messages) => write!(f, "content API error: {}", messages.join("; ")),
            Self::Validation(err) => write!(f, "invalid project content: {err}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::GraphQl(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<ProjectValidationError> for ContentError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Source of project snapshots.
pub trait ContentSource {
    /// Fetches the full, unordered project collection.
    fn fetch_projects(&self) -> ContentResult<Vec<ProjectRecord>>;

    /// Fetches the projects whose slug equals `slug`.
    ///
    /// Mirrors the detail query, which returns a list filtered by slug.
    fn fetch_project(&self, slug: &str) -> ContentResult<Vec<ProjectRecord>> {
        Ok(self
            .fetch_projects()?
            .into_iter()
            .filter(|project| project.slug == slug)
            .collect())
    }
}

/// In-memory snapshot source.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    projects: Vec<ProjectRecord>,
}

impl StaticContentSource {
    /// Creates a source after validating the snapshot.
    pub fn try_new(projects: Vec<ProjectRecord>) -> ContentResult<Self> {
        validate_catalog(&projects)?;
        Ok(Self { projects })
    }
}

impl ContentSource for StaticContentSource {
    fn fetch_projects(&self) -> ContentResult<Vec<ProjectRecord>> {
        Ok(self.projects.clone())
    }
}

/// Source backed by a saved content API response on disk.
///
/// The file is re-read on every fetch so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for JsonFileContentSource {
    fn fetch_projects(&self) -> ContentResult<Vec<ProjectRecord>> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let projects = decode_projects_response(&body).inspect_err(|err| {
            warn!(
                "event=content_decode module=content status=error path={} error={}",
                self.path.display(),
                err
            );
        })?;
        validate_catalog(&projects)?;
        debug!(
            "event=content_fetch module=content status=ok path={} count={}",
            self.path.display(),
            projects.len()
        );
        Ok(projects)
    }
}
