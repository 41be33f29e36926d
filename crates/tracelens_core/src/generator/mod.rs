//! Simulated discovery.
//!
//! All findings are mock constants; source names are display strings only
//! and no lookup leaves the process.

pub mod mock;
