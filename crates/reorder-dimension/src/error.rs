//! Error types for dimension capture.

use std::fmt;

use reorder_core::style::StyleError;

use crate::id::{DraggableId, DroppableId};

/// Errors that can occur while capturing or reading dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// Capture was requested while the draggable has no live element.
    NotAttached {
        /// The draggable whose element is missing.
        draggable_id: DraggableId,
    },

    /// Capture was requested while no descriptor is published.
    NotPublished {
        /// The draggable the capture belongs to.
        draggable_id: DraggableId,
    },

    /// The droppable has no scrollable frame.
    NoClosestScrollable {
        /// The droppable that was queried.
        droppable_id: DroppableId,
    },

    /// The element reported a computed style that is not usable geometry.
    InvalidStyle(StyleError),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::NotAttached { draggable_id } => write!(
                f,
                "Cannot calculate a dimension for draggable '{}' when it is not attached",
                draggable_id
            ),
            DimensionError::NotPublished { draggable_id } => write!(
                f,
                "Cannot get dimension for unpublished draggable '{}'",
                draggable_id
            ),
            DimensionError::NoClosestScrollable { droppable_id } => write!(
                f,
                "Droppable '{}' does not have a closest scrollable",
                droppable_id
            ),
            DimensionError::InvalidStyle(err) => write!(f, "Invalid computed style: {}", err),
        }
    }
}

impl std::error::Error for DimensionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimensionError::InvalidStyle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StyleError> for DimensionError {
    fn from(err: StyleError) -> Self {
        DimensionError::InvalidStyle(err)
    }
}

/// Result type for dimension operations.
pub type DimensionResult<T> = Result<T, DimensionError>;
