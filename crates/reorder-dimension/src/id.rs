//! Identifiers and descriptors for draggables and droppables.

use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Globally unique, stable for the lifetime of a draggable.
    DraggableId
);
string_id!(DroppableId);
string_id!(
    /// Compatibility group. Draggables may only be dropped into droppables of the same type.
    DroppableType
);

/// Identity and placement of a draggable.
///
/// Two descriptors describe the same placement exactly when they are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraggableDescriptor {
    pub id: DraggableId,
    /// Zero-based position within the owning droppable. Signed so that
    /// shifting can pass through positions before the start of the list.
    pub index: isize,
    pub droppable_id: DroppableId,
    pub drag_type: DroppableType,
}

/// Identity of a droppable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DroppableDescriptor {
    pub id: DroppableId,
    pub drag_type: DroppableType,
}
