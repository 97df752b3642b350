//! The dimension snapshot a single drag operates on.

use reorder_core::alloc::HashMap;

use crate::draggable::DraggableDimension;
use crate::droppable::DroppableDimension;
use crate::id::{DraggableId, DroppableId};

pub type DraggableDimensionMap = HashMap<DraggableId, DraggableDimension>;
pub type DroppableDimensionMap = HashMap<DroppableId, DroppableDimension>;

/// Every collected dimension for one drag.
///
/// Built once when the drag starts, then patched entry by entry as geometry changes.
#[derive(Debug, Clone, Default)]
pub struct DimensionMap {
    pub draggables: DraggableDimensionMap,
    pub droppables: DroppableDimensionMap,
}

impl DimensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a draggable, keyed by its descriptor id.
    pub fn add_draggable(&mut self, dimension: DraggableDimension) {
        self.draggables
            .insert(dimension.descriptor.id.clone(), dimension);
    }

    /// Insert or replace a droppable, keyed by its descriptor id.
    pub fn add_droppable(&mut self, dimension: DroppableDimension) {
        self.droppables
            .insert(dimension.descriptor.id.clone(), dimension);
    }

    pub fn draggable(&self, id: &str) -> Option<&DraggableDimension> {
        self.draggables.get(id)
    }

    pub fn droppable(&self, id: &str) -> Option<&DroppableDimension> {
        self.droppables.get(id)
    }

    /// Draggables owned by `droppable_id`, ordered by index.
    pub fn draggables_in(&self, droppable_id: &DroppableId) -> Vec<&DraggableDimension> {
        let mut list: Vec<&DraggableDimension> = self
            .draggables
            .values()
            .filter(|dimension| &dimension.descriptor.droppable_id == droppable_id)
            .collect();
        list.sort_by_key(|dimension| dimension.descriptor.index);
        list
    }
}
