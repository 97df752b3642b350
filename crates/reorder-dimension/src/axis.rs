//! Main and cross axis helpers for droppable lists.

use reorder_core::geometry::{Rect, Spacing};

/// Anything with four edges the axis accessors can read.
pub trait Edges {
    fn top(&self) -> f32;
    fn right(&self) -> f32;
    fn bottom(&self) -> f32;
    fn left(&self) -> f32;
}

macro_rules! impl_edges {
    ($($ty:ty),*) => {
        $(
            impl Edges for $ty {
                fn top(&self) -> f32 {
                    self.top
                }

                fn right(&self) -> f32 {
                    self.right
                }

                fn bottom(&self) -> f32 {
                    self.bottom
                }

                fn left(&self) -> f32 {
                    self.left
                }
            }
        )*
    };
}

impl_edges!(Rect, Spacing);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items stack left to right.
    Horizontal,
}

/// The axis a droppable orders its draggables along.
///
/// The main axis runs in the list direction; the cross axis is perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Axis::Vertical,
            Direction::Horizontal => Axis::Horizontal,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Axis::Vertical => Direction::Vertical,
            Axis::Horizontal => Direction::Horizontal,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Vertical)
    }

    pub fn start(&self, edges: &impl Edges) -> f32 {
        match self {
            Axis::Vertical => edges.top(),
            Axis::Horizontal => edges.left(),
        }
    }

    pub fn end(&self, edges: &impl Edges) -> f32 {
        match self {
            Axis::Vertical => edges.bottom(),
            Axis::Horizontal => edges.right(),
        }
    }

    pub fn size(&self, edges: &impl Edges) -> f32 {
        self.end(edges) - self.start(edges)
    }

    pub fn cross_axis_start(&self, edges: &impl Edges) -> f32 {
        match self {
            Axis::Vertical => edges.left(),
            Axis::Horizontal => edges.top(),
        }
    }

    pub fn cross_axis_end(&self, edges: &impl Edges) -> f32 {
        match self {
            Axis::Vertical => edges.right(),
            Axis::Horizontal => edges.bottom(),
        }
    }

    pub fn cross_axis_size(&self, edges: &impl Edges) -> f32 {
        self.cross_axis_end(edges) - self.cross_axis_start(edges)
    }

    /// Build edges from main axis and cross axis coordinates.
    pub fn spacing(&self, start: f32, end: f32, cross_start: f32, cross_end: f32) -> Spacing {
        match self {
            Axis::Vertical => Spacing::new(start, cross_end, end, cross_start),
            Axis::Horizontal => Spacing::new(cross_start, end, cross_end, start),
        }
    }
}
