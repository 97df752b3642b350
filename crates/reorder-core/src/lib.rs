//! Reorder Core
//!
//! Geometry, box model math and the shared plumbing (logging, profiling,
//! configuration, collections) used by the reorder dimension crates.

pub mod alloc;
pub mod box_model;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod position;
pub mod profiling;
pub mod style;
