//! Machine-readable exports of finished investigations.

pub mod trace_report;
