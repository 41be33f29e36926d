//! Flutter-facing bridge over `tracelens_core`.

pub mod api;
