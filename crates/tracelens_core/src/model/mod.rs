//! Investigation domain model.
//!
//! # Responsibility
//! - Define the records produced and consumed by one investigation run.
//! - Keep one flat finding list plus an edge list as the only shape.
//!
//! # Invariants
//! - Every relationship endpoint exists in the finding list of the same run.
//! - Records are immutable once a run has produced them.

pub mod finding;
pub mod query;
pub mod summary;
