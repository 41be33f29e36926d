//! Core domain logic for TraceLens.
//! This crate is the single source of truth for investigation invariants.

pub mod catalog;
pub mod config;
pub mod display;
pub mod export;
pub mod generator;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::guidelines::{guideline_sections, render_guidelines, GuidelineSection};
pub use catalog::sources::{source_catalog, sources_for, SourceEntry, SourceInput};
pub use config::{ConfigError, DashboardConfig};
pub use display::descriptor::{CategoryDescriptor, ConfidenceBand, Palette};
pub use display::views::{
    ConnectionDirection, ConnectionLine, FindingCard, FindingDetails, GraphNode, GraphView,
    SidebarView,
};
pub use export::trace_report::TraceReport;
pub use generator::mock::{generate_findings, Discovery};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::finding::{
    validate_graph, Finding, FindingCategory, FindingId, FindingValidationError, Relationship,
    Severity,
};
pub use model::query::{classify_query, InvestigationQuery, QueryKind};
pub use model::summary::{InvestigationId, InvestigationSummary, SeverityCounts};
pub use service::investigation::{
    now_epoch_ms, ControllerError, InvestigationController, Phase, SubmitOutcome,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
