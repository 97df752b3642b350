//! Mock marshal that records calls for verification in tests.

use std::cell::RefCell;

use reorder_core::alloc::HashMap;
use reorder_core::math::Position;
use reorder_dimension::{
    DimensionCapture, DimensionMarshal, DimensionResult, DraggableDescriptor, DraggableDimension,
    DraggableId,
};

/// A marshal call, recorded in the order it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum MarshalCall {
    Register {
        descriptor: DraggableDescriptor,
    },
    Update {
        previous: DraggableDescriptor,
        descriptor: DraggableDescriptor,
    },
    Unregister {
        descriptor: DraggableDescriptor,
    },
}

/// Records registrations and holds on to the latest capture per draggable.
#[derive(Debug, Default)]
pub struct MockMarshal {
    calls: RefCell<Vec<MarshalCall>>,
    captures: RefCell<HashMap<DraggableId, DimensionCapture>>,
}

impl MockMarshal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<MarshalCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn count_registers(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, MarshalCall::Register { .. }))
            .count()
    }

    pub fn count_updates(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, MarshalCall::Update { .. }))
            .count()
    }

    pub fn count_unregisters(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, MarshalCall::Unregister { .. }))
            .count()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.captures.borrow().contains_key(id)
    }

    /// The capture last handed over for `id`.
    pub fn capture_for(&self, id: &str) -> Option<DimensionCapture> {
        self.captures.borrow().get(id).cloned()
    }

    /// Pull a dimension the way a marshal does at drag start.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never registered.
    pub fn capture(
        &self,
        id: &str,
        window_scroll: Position,
        window_scroll_diff: Position,
    ) -> DimensionResult<DraggableDimension> {
        let capture = self
            .capture_for(id)
            .unwrap_or_else(|| panic!("draggable '{}' is not registered", id));
        capture.capture(window_scroll, window_scroll_diff)
    }
}

impl DimensionMarshal for MockMarshal {
    fn register_draggable(&self, descriptor: DraggableDescriptor, capture: DimensionCapture) {
        self.captures
            .borrow_mut()
            .insert(descriptor.id.clone(), capture);
        self.calls
            .borrow_mut()
            .push(MarshalCall::Register { descriptor });
    }

    fn update_draggable(
        &self,
        previous: &DraggableDescriptor,
        descriptor: DraggableDescriptor,
        capture: DimensionCapture,
    ) {
        let mut captures = self.captures.borrow_mut();
        captures.remove(&previous.id);
        captures.insert(descriptor.id.clone(), capture);

        self.calls.borrow_mut().push(MarshalCall::Update {
            previous: previous.clone(),
            descriptor,
        });
    }

    fn unregister_draggable(&self, descriptor: &DraggableDescriptor) {
        self.captures.borrow_mut().remove(&descriptor.id);
        self.calls.borrow_mut().push(MarshalCall::Unregister {
            descriptor: descriptor.clone(),
        });
    }
}
