//! Content API boundary.
//!
//! # Responsibility
//! - Hold the GraphQL documents the presentation layer sends to the content API.
//! - Decode GraphQL response envelopes into project records.
//! - Define the `ContentSource` seam that services fetch snapshots through.
//!
//! # Invariants
//! - Missing `data` or `data.projects` decodes to an empty collection.
//! - A non-empty `errors` array is surfaced as an error, never dropped.
//! - Snapshots returned by a source pass `validate_catalog`.

pub mod graphql;
pub mod source;
