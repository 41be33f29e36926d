//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate generator, summary and view projections into dashboard
//!   use-cases.
//! - Keep UI/FFI layers free of lifecycle rules.

pub mod investigation;
