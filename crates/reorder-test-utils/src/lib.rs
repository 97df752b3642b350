//! Test utilities for the reorder workspace.
//!
//! - [`MockMarshal`] - records every registration call and keeps the captures it was handed
//! - [`MockElement`] / [`ElementSlot`] - a fake live element that can be attached and detached
//! - [`fixtures`] - ready-made draggable and droppable layouts
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use reorder_core::geometry::Spacing;
//! use reorder_core::math::Position;
//! use reorder_dimension::{DimensionPublisher, PublisherConfig};
//! use reorder_test_utils::{ElementSlot, MockElement, MockMarshal};
//!
//! let marshal = Rc::new(MockMarshal::new());
//! let slot = ElementSlot::attached(MockElement::new(Spacing::new(10.0, 100.0, 20.0, 0.0)));
//! let config = PublisherConfig {
//!     draggable_id: "item".into(),
//!     droppable_id: "list".into(),
//!     drag_type: "TYPE".into(),
//!     index: 0,
//!     is_dragging: false,
//!     offset: Position::ZERO,
//! };
//!
//! let publisher = DimensionPublisher::new(marshal.clone(), slot.accessor(), config.clone());
//! publisher.on_attach(config);
//!
//! let dimension = marshal.capture("item", Position::ZERO, Position::ZERO).unwrap();
//! assert_eq!(dimension.client.border_box.top, 10.0);
//! ```
//!
//! Mocks use `RefCell` for interior mutability: the marshal protocol is
//! single-threaded and its methods take `&self`.

pub mod fixtures;
pub mod mock_element;
pub mod mock_marshal;

pub use mock_element::{ElementSlot, MockElement};
pub use mock_marshal::{MarshalCall, MockMarshal};
