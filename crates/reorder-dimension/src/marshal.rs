//! The boundary to the marshal that collects dimensions.

use std::fmt;
use std::rc::Rc;

use reorder_core::math::Position;

use crate::draggable::DraggableDimension;
use crate::error::DimensionResult;
use crate::id::DraggableDescriptor;
use crate::publisher::PublisherShared;

/// A pull-based geometry source handed to the marshal on registration.
///
/// Each call measures the live element from scratch; nothing is cached.
#[derive(Clone)]
pub struct DimensionCapture {
    pub(crate) shared: Rc<PublisherShared>,
}

impl DimensionCapture {
    /// Measure the draggable now.
    ///
    /// `window_scroll_diff` is how far the window has scrolled since the drag
    /// started. It is only applied to the item being dragged.
    pub fn capture(
        &self,
        window_scroll: Position,
        window_scroll_diff: Position,
    ) -> DimensionResult<DraggableDimension> {
        self.shared.capture(window_scroll, window_scroll_diff)
    }
}

impl fmt::Debug for DimensionCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionCapture")
            .field("draggable_id", &self.shared.draggable_id())
            .finish()
    }
}

/// Registry coordinating dimension collection across all draggables.
///
/// Calls for a given draggable arrive in register, update*, unregister order.
pub trait DimensionMarshal {
    fn register_draggable(&self, descriptor: DraggableDescriptor, capture: DimensionCapture);

    fn update_draggable(
        &self,
        previous: &DraggableDescriptor,
        descriptor: DraggableDescriptor,
        capture: DimensionCapture,
    );

    fn unregister_draggable(&self, descriptor: &DraggableDescriptor);
}
