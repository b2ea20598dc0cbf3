//! Tonal Core
//!
//! Logging and profiling shared by the Tonal crates.

pub mod logging;
pub mod profiling;
