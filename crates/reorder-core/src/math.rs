//! Vector math backed by `glam`.
//!
//! Everything in this workspace measures in CSS pixels as `f32`, so only the
//! 2D single precision types are re-exported.
//!
//! ```
//! use reorder_core::math::Vec2;
//!
//! let scroll = Vec2::new(0.0, 120.0);
//! let drift = Vec2::new(0.0, 20.0);
//! assert_eq!(scroll - drift, Vec2::new(0.0, 100.0));
//! ```

pub use glam::{Vec2, vec2};

/// A 2D point or displacement in pixels.
pub type Position = Vec2;
