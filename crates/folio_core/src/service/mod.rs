//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate content fetches and catalog derivation into use-case APIs.
//! - Keep presentation layers decoupled from content source details.

pub mod catalog_service;
