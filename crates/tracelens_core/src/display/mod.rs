//! Display lookups and view projections.
//!
//! # Responsibility
//! - Map categories and severities to stable display tokens.
//! - Project one result set into list, graph and sidebar shapes.
//!
//! # Invariants
//! - Projections are read-only; they never mutate findings or relationships.

pub mod descriptor;
pub mod views;
