//! Project catalog views.
//!
//! # Responsibility
//! - Parse the user's filter selection into a typed selector.
//! - Derive the ordered, optionally filtered project list for display.
//!
//! # Invariants
//! - Catalog derivation is a pure function of its inputs.
//! - No input shape produces an error; "nothing to show" is an empty list.

pub mod filter;
pub mod transform;
