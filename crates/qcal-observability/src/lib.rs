//! # qcal-observability
//!
//! Subscriber installation and span definitions shared by the engine crates.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
