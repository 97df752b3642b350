//! Reorder Dimension - geometry snapshots for drag-and-drop reordering
//!
//! This crate captures and republishes the box geometry of draggable items
//! and the droppable containers that hold them:
//! - [`DraggableDimension`] / [`DroppableDimension`] snapshots in client and page coordinates
//! - [`DimensionPublisher`], the per-draggable registration state machine
//! - [`shift`], which moves sibling geometry after a reorder without re-measuring
//!
//! ## Publishing a draggable
//!
//! ```rust,ignore
//! let publisher = DimensionPublisher::new(marshal, element_accessor, config.clone());
//!
//! publisher.on_attach(config);          // registerDraggable
//! publisher.on_config_change(config);   // updateDraggable, or nothing if unchanged
//! publisher.on_detach();                // unregisterDraggable
//! ```
//!
//! The marshal pulls geometry when it needs it by calling
//! [`DimensionCapture::capture`] on the capability it was handed at registration.

pub mod axis;
pub mod draggable;
pub mod droppable;
pub mod element;
pub mod error;
pub mod id;
pub mod map;
pub mod marshal;
pub mod publisher;
pub mod shift;

pub use axis::{Axis, Direction, Edges};
pub use draggable::{BoxSizing, DraggableDimension, Placeholder};
pub use droppable::{ClosestScrollable, DroppableDimension, DroppableViewport, ScrollableFrame};
pub use element::{ElementAccessor, LiveElement};
pub use error::{DimensionError, DimensionResult};
pub use id::{DraggableDescriptor, DraggableId, DroppableDescriptor, DroppableId, DroppableType};
pub use map::{DimensionMap, DraggableDimensionMap, DroppableDimensionMap};
pub use marshal::{DimensionCapture, DimensionMarshal};
pub use publisher::{DimensionPublisher, PublishState, PublisherConfig};
pub use shift::shift;
