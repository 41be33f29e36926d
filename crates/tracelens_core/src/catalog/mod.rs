//! Static text and source tables consumed by the dashboard views.

pub mod guidelines;
pub mod sources;
