//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the project record shape returned by the content API.
//! - Decide category membership at the data-model boundary, not at filter time.
//!
//! # Invariants
//! - Every project is identified by a unique, route-safe `slug`.
//! - Only the closed [`category::Category`] set is filterable.

pub mod category;
pub mod project;
