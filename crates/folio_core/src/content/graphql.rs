//! GraphQL documents, request bodies and response decoding.

use crate::content::source::{ContentError, ContentResult};
use crate::model::project::ProjectRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query for the project listing page.
pub const PROJECTS_QUERY: &str = r#"query Projects {
    projects {
        slug
        title
        description
        createdAt
        fullImage {
            url
            fileName
        }
        css
        adobe
        html
        illustrator
        javascript
        photoshop
        gsap
    }
}"#;

/// Query for one project detail page, keyed by `$slug`.
pub const PROJECT_BY_SLUG_QUERY: &str = r#"query Projects($slug: String!) {
    projects(where: { slug: $slug }) {
        description
        id
        title
        githubUrl
        site
        slug
        fullImage {
            url
            fileName
        }
        css
        adobe
        html
        illustrator
        javascript
        photoshop
        gsap
    }
}"#;

/// JSON body posted to a GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl GraphQlRequest {
    pub fn projects() -> Self {
        Self {
            query: PROJECTS_QUERY,
            variables: Map::new(),
        }
    }

    pub fn project_by_slug(slug: &str) -> Self {
        let mut variables = Map::new();
        variables.insert("slug".to_string(), Value::String(slug.to_string()));
        Self {
            query: PROJECT_BY_SLUG_QUERY,
            variables,
        }
    }

    /// Serializes the request into its wire body.
    pub fn to_body(&self) -> ContentResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<ProjectsData>,
    #[serde(default)]
    errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Deserialize)]
struct ProjectsData {
    #[serde(default)]
    projects: Option<Vec<ProjectRecord>>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

/// Decodes a saved content API response into project records.
///
/// Accepts either a GraphQL envelope (`{"data": {"projects": [...]}}`) or a
/// bare JSON array of records. Records are returned in wire order.
///
/// # Errors
/// - `ContentError::Decode` when the text is not valid JSON of either shape.
/// - `ContentError::GraphQl` when the envelope carries a non-empty `errors`.
pub fn decode_projects_response(body: &str) -> ContentResult<Vec<ProjectRecord>> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: ResponseEnvelope = serde_json::from_value(value)?;
    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        return Err(ContentError::GraphQl(
            errors.into_iter().map(|error| error.message).collect(),
        ));
    }

    Ok(envelope
        .data
        .and_then(|data| data.projects)
        .unwrap_or_default())
}
