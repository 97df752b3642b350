//! Moving sibling geometry after a reorder without re-measuring.

use reorder_core::math::Position;
use reorder_core::profiling::profile_function;

use crate::draggable::{DraggableDimension, Placeholder};
use crate::id::DraggableDescriptor;
use crate::map::DraggableDimensionMap;

/// Translate every draggable's border box by `amount` and move its index by `index_change`.
///
/// Page boxes are rebuilt from the new client boxes and `window_scroll`. Indices
/// move by exactly `index_change` and may go negative. The owning droppable is
/// left untouched, so callers that push items past its end must grow it themselves.
pub fn shift(
    draggables: &DraggableDimensionMap,
    amount: Position,
    index_change: isize,
    window_scroll: Position,
) -> DraggableDimensionMap {
    profile_function!();
    draggables
        .iter()
        .map(|(id, dimension)| {
            (
                id.clone(),
                shift_dimension(dimension, amount, index_change, window_scroll),
            )
        })
        .collect()
}

fn shift_dimension(
    dimension: &DraggableDimension,
    amount: Position,
    index_change: isize,
    window_scroll: Position,
) -> DraggableDimension {
    let client = dimension.client.offset(amount);
    let page = client.with_scroll(window_scroll);

    DraggableDimension {
        descriptor: DraggableDescriptor {
            index: dimension.descriptor.index + index_change,
            ..dimension.descriptor.clone()
        },
        client,
        page,
        box_sizing: dimension.box_sizing,
        placeholder: Placeholder {
            client,
            ..dimension.placeholder.clone()
        },
    }
}
