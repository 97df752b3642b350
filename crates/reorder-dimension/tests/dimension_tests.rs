//! Droppable construction and dimension map tests using the preset layout.

use reorder_core::geometry::{Size, Spacing};
use reorder_core::math::Position;
use reorder_dimension::{Axis, DimensionError, DroppableDescriptor};
use reorder_test_utils::fixtures::{
    DroppableArgs, FrameArgs, droppable_dimension, make_scrollable, preset, with_assorted_spacing,
};

#[test]
fn test_preset_layout() {
    let preset = preset(Axis::Vertical);

    assert_eq!(preset.dimensions.draggables.len(), 8);
    assert_eq!(preset.dimensions.droppables.len(), 3);

    let in_home1 = preset.in_home1();
    assert_eq!(in_home1.client.border_box.spacing(), Spacing::new(10.0, 100.0, 20.0, 0.0));
    assert_eq!(in_home1.page.border_box.spacing(), Spacing::new(110.0, 150.0, 120.0, 50.0));
    assert_eq!(in_home1.descriptor.droppable_id, preset.home.descriptor.id);

    let in_foreign1 = preset.in_foreign1();
    assert_eq!(in_foreign1.client.border_box.left, 100.0);
}

#[test]
fn test_horizontal_preset_swaps_axes() {
    let preset = preset(Axis::Horizontal);

    let in_home2 = preset.in_home2();
    assert_eq!(in_home2.client.border_box.spacing(), Spacing::new(0.0, 50.0, 100.0, 30.0));
    assert_eq!(preset.home.axis, Axis::Horizontal);
}

#[test]
fn test_draggables_in_are_ordered() {
    let preset = preset(Axis::Vertical);

    let in_home: Vec<isize> = preset
        .dimensions
        .draggables_in(&preset.home.descriptor.id)
        .iter()
        .map(|dimension| dimension.descriptor.index)
        .collect();
    assert_eq!(in_home, vec![0, 1, 2, 3]);

    assert!(preset
        .dimensions
        .draggables_in(&preset.empty_foreign.descriptor.id)
        .is_empty());
}

#[test]
fn test_add_draggable_replaces() {
    let mut preset = preset(Axis::Vertical);
    let mut moved = preset.in_home1().clone();
    moved.descriptor.index = 9;

    preset.dimensions.add_draggable(moved);

    assert_eq!(preset.dimensions.draggables.len(), 8);
    assert_eq!(preset.dimensions.draggable("inhome1").unwrap().descriptor.index, 9);
}

#[test]
fn test_add_droppable_replaces() {
    let mut preset = preset(Axis::Vertical);
    let disabled = preset.home.with_enabled(false);

    preset.dimensions.add_droppable(disabled);

    assert_eq!(preset.dimensions.droppables.len(), 3);
    assert!(!preset.dimensions.droppable("home").unwrap().is_enabled);
}

#[test]
fn test_make_scrollable() {
    let preset = preset(Axis::Vertical);
    let scrollable = make_scrollable(&preset.home, 20.0, preset.window_scroll);

    assert_eq!(scrollable.client.border_box.bottom, preset.home.client.border_box.bottom + 20.0);
    assert_eq!(scrollable.client.border_box.right, preset.home.client.border_box.right);

    let frame = scrollable.closest_scrollable().unwrap();
    assert_eq!(frame.client, preset.home.client);
    assert_eq!(frame.page, preset.home.page);
    assert_eq!(frame.scroll, Position::ZERO);
    assert_eq!(frame.scroll_size, Size::new(100.0, 210.0));
    assert!(frame.should_clip_subject);

    // The grown subject is clipped back to the old border box.
    assert_eq!(
        scrollable.viewport.clipped.map(|rect| rect.spacing()),
        Some(preset.home.page.border_box.spacing())
    );
}

#[test]
fn test_make_scrollable_horizontal() {
    let preset = preset(Axis::Horizontal);
    let scrollable = make_scrollable(&preset.home, 20.0, preset.window_scroll);

    assert_eq!(scrollable.client.border_box.right, preset.home.client.border_box.right + 20.0);
    assert_eq!(scrollable.client.border_box.bottom, preset.home.client.border_box.bottom);
}

#[test]
fn test_frame_boxes_are_independent() {
    let droppable = droppable_dimension(DroppableArgs {
        window_scroll: Position::new(0.0, 100.0),
        spacing: with_assorted_spacing(),
        frame: Some(FrameArgs {
            border_box: Spacing::new(0.0, 200.0, 100.0, 0.0),
            spacing: Default::default(),
            scroll_size: Size::new(200.0, 400.0),
            scroll: Position::new(0.0, 50.0),
            should_clip_subject: false,
        }),
        ..DroppableArgs::new(
            DroppableDescriptor {
                id: "list".into(),
                drag_type: "TYPE".into(),
            },
            Spacing::new(20.0, 180.0, 380.0, 20.0),
        )
    });

    let frame = droppable.closest_scrollable().unwrap();
    assert_eq!(frame.client.border_box.spacing(), Spacing::new(0.0, 200.0, 100.0, 0.0));
    assert_eq!(frame.page.border_box.top, 100.0);
    assert_eq!(frame.max_scroll, Position::new(0.0, 300.0));
    assert_eq!(droppable.client.margin, with_assorted_spacing().margin);
    assert_eq!(frame.client.margin, Spacing::ZERO);
}

#[test]
fn test_missing_frame_is_an_error() {
    let preset = preset(Axis::Vertical);

    assert!(matches!(
        preset.foreign.closest_scrollable(),
        Err(DimensionError::NoClosestScrollable { droppable_id }) if droppable_id.as_str() == "foreign"
    ));
}
