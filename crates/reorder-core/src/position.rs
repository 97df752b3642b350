//! Component-wise helpers for [`Position`].
//!
//! These mirror the `glam` operators but read better at call sites that
//! describe drag math (`negate(offset)` rather than `-offset`).

use crate::math::Position;

/// The origin, `{ x: 0, y: 0 }`.
pub const ORIGIN: Position = Position::ZERO;

#[inline]
pub fn add(a: Position, b: Position) -> Position {
    a + b
}

#[inline]
pub fn subtract(a: Position, b: Position) -> Position {
    a - b
}

#[inline]
pub fn negate(point: Position) -> Position {
    -point
}

#[inline]
pub fn is_equal(a: Position, b: Position) -> bool {
    a == b
}
