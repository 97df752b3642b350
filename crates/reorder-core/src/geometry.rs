use std::ops::Add;

use crate::math::{Position, Vec2};

/// Offsets for the four edges of a box.
///
/// Used both for edge thicknesses (margin, border, padding) and for the
/// absolute edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing::all(0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: f32) -> Self {
        Spacing::new(value, value, value, value)
    }

    /// Translate every edge by `point`.
    pub fn offset_by_position(self, point: Position) -> Self {
        Spacing {
            top: self.top + point.y,
            right: self.right + point.x,
            bottom: self.bottom + point.y,
            left: self.left + point.x,
        }
    }

    /// Grow the rectangle outwards by `by` on every side.
    pub fn expand(self, by: Spacing) -> Self {
        Spacing {
            top: self.top - by.top,
            right: self.right + by.right,
            bottom: self.bottom + by.bottom,
            left: self.left - by.left,
        }
    }

    /// Pull the rectangle inwards by `by` on every side.
    pub fn shrink(self, by: Spacing) -> Self {
        Spacing {
            top: self.top + by.top,
            right: self.right - by.right,
            bottom: self.bottom - by.bottom,
            left: self.left + by.left,
        }
    }
}

impl Add for Spacing {
    type Output = Spacing;

    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

/// An absolute rectangle with its derived measurements precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub center: Vec2,
}

impl Rect {
    pub fn from_spacing(spacing: Spacing) -> Self {
        let width = spacing.right - spacing.left;
        let height = spacing.bottom - spacing.top;

        Rect {
            top: spacing.top,
            right: spacing.right,
            bottom: spacing.bottom,
            left: spacing.left,
            width,
            height,
            x: spacing.left,
            y: spacing.top,
            center: Vec2::new(
                (spacing.right + spacing.left) / 2.0,
                (spacing.bottom + spacing.top) / 2.0,
            ),
        }
    }

    /// The edges of this rectangle.
    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.top, self.right, self.bottom, self.left)
    }

    /// A copy of this rectangle moved by `point`.
    pub fn translate(&self, point: Position) -> Rect {
        Rect::from_spacing(self.spacing().offset_by_position(point))
    }

    /// The overlapping region, or `None` if the rectangles do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let spacing = Spacing {
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
            left: self.left.max(other.left),
        };

        if spacing.right <= spacing.left || spacing.bottom <= spacing.top {
            return None;
        }

        Some(Rect::from_spacing(spacing))
    }
}

impl From<Spacing> for Rect {
    fn from(spacing: Spacing) -> Self {
        Rect::from_spacing(spacing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}
