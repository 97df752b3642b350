//! Ready-made dimensions for tests.
//!
//! [`preset`] lays out three droppables side by side on the cross axis, each
//! 10..200 on the main axis:
//!
//! ```text
//! home (0..100)        foreign (100..200)    empty-foreign (200..300)
//!   inhome1   10..20     inforeign1 10..20
//!   inhome2   30..50     inforeign2 30..50
//!   inhome3   60..90     inforeign3 60..90
//!   inhome4  100..140    inforeign4 100..140
//! ```
//!
//! Every box uses [`with_assorted_spacing`] and the window is scrolled by `{50, 100}`.

use reorder_core::box_model::{BoxSpacing, create_box};
use reorder_core::geometry::{Size, Spacing};
use reorder_core::math::Position;
use reorder_dimension::{
    Axis, BoxSizing, DimensionMap, DraggableDescriptor, DraggableDimension, DroppableDescriptor,
    DroppableDimension, Placeholder, ScrollableFrame,
};

/// Margin, border and padding that differ on every edge, to catch mixed-up sides.
pub fn with_assorted_spacing() -> BoxSpacing {
    BoxSpacing {
        margin: Spacing::new(10.0, 5.0, 5.0, 10.0),
        border: Spacing::new(1.0, 4.0, 3.0, 2.0),
        padding: Spacing::all(2.0),
    }
}

/// A draggable measured at `border_box` with a `div` / `block` / `border-box` placeholder.
pub fn draggable_dimension(
    descriptor: DraggableDescriptor,
    border_box: Spacing,
    window_scroll: Position,
    spacing: BoxSpacing,
) -> DraggableDimension {
    let client = create_box(border_box, spacing);

    DraggableDimension {
        descriptor,
        client,
        page: client.with_scroll(window_scroll),
        box_sizing: BoxSizing::BorderBox,
        placeholder: Placeholder {
            client,
            tag_name: "div".to_string(),
            display: "block".to_string(),
            box_sizing: BoxSizing::BorderBox,
        },
    }
}

/// The parts of a scrollable frame a test needs to pick.
#[derive(Debug, Clone)]
pub struct FrameArgs {
    pub border_box: Spacing,
    pub spacing: BoxSpacing,
    pub scroll_size: Size<f32>,
    pub scroll: Position,
    pub should_clip_subject: bool,
}

#[derive(Debug, Clone)]
pub struct DroppableArgs {
    pub descriptor: DroppableDescriptor,
    pub border_box: Spacing,
    pub axis: Axis,
    pub spacing: BoxSpacing,
    pub window_scroll: Position,
    pub frame: Option<FrameArgs>,
    pub is_enabled: bool,
}

impl DroppableArgs {
    /// An enabled vertical droppable with no spacing, scroll or frame.
    pub fn new(descriptor: DroppableDescriptor, border_box: Spacing) -> Self {
        Self {
            descriptor,
            border_box,
            axis: Axis::Vertical,
            spacing: BoxSpacing::default(),
            window_scroll: Position::ZERO,
            frame: None,
            is_enabled: true,
        }
    }
}

pub fn droppable_dimension(args: DroppableArgs) -> DroppableDimension {
    let frame = args.frame.map(|frame| ScrollableFrame {
        client: create_box(frame.border_box, frame.spacing),
        scroll_size: frame.scroll_size,
        scroll: frame.scroll,
        should_clip_subject: frame.should_clip_subject,
    });

    DroppableDimension::new(
        args.descriptor,
        args.axis.direction(),
        create_box(args.border_box, args.spacing),
        args.window_scroll,
        frame,
    )
    .with_enabled(args.is_enabled)
}

/// Grow a droppable by `amount` on its main axis and put it inside a frame
/// the size of its old box, leaving `amount` pixels to scroll.
///
/// Both boxes are placed on the page with `window_scroll`.
pub fn make_scrollable(
    droppable: &DroppableDimension,
    amount: f32,
    window_scroll: Position,
) -> DroppableDimension {
    let axis = droppable.axis;
    let border_box = droppable.client.border_box;

    let (horizontal_growth, vertical_growth) = if axis.is_vertical() {
        (0.0, amount)
    } else {
        (amount, 0.0)
    };

    let grown = Spacing {
        right: border_box.right + horizontal_growth,
        bottom: border_box.bottom + vertical_growth,
        ..border_box.spacing()
    };
    let scroll_size = Size::new(
        border_box.width + horizontal_growth,
        border_box.height + vertical_growth,
    );

    DroppableDimension::new(
        droppable.descriptor.clone(),
        axis.direction(),
        create_box(grown, droppable.client.spacing()),
        window_scroll,
        Some(ScrollableFrame {
            client: droppable.client,
            scroll_size,
            scroll: Position::ZERO,
            should_clip_subject: true,
        }),
    )
    .with_enabled(droppable.is_enabled)
}

/// The standard three-list layout described in the module docs.
#[derive(Debug, Clone)]
pub struct Preset {
    pub window_scroll: Position,
    pub home: DroppableDimension,
    pub foreign: DroppableDimension,
    pub empty_foreign: DroppableDimension,
    pub in_home: [DraggableDimension; 4],
    pub in_foreign: [DraggableDimension; 4],
    pub dimensions: DimensionMap,
}

impl Preset {
    pub fn in_home1(&self) -> &DraggableDimension {
        &self.in_home[0]
    }

    pub fn in_home2(&self) -> &DraggableDimension {
        &self.in_home[1]
    }

    pub fn in_foreign1(&self) -> &DraggableDimension {
        &self.in_foreign[0]
    }
}

/// Main axis extents of the four draggables in every populated list.
const ITEM_EXTENTS: [(f32, f32); 4] = [(10.0, 20.0), (30.0, 50.0), (60.0, 90.0), (100.0, 140.0)];

pub fn preset(axis: Axis) -> Preset {
    let window_scroll = Position::new(50.0, 100.0);

    let list = |id: &str, cross_start: f32, cross_end: f32| {
        droppable_dimension(DroppableArgs {
            axis,
            spacing: with_assorted_spacing(),
            window_scroll,
            ..DroppableArgs::new(
                DroppableDescriptor {
                    id: id.into(),
                    drag_type: "TYPE".into(),
                },
                axis.spacing(10.0, 200.0, cross_start, cross_end),
            )
        })
    };

    let items = |prefix: &str, droppable: &DroppableDimension, cross_start: f32, cross_end: f32| {
        std::array::from_fn::<_, 4, _>(|index| {
            let (start, end) = ITEM_EXTENTS[index];
            draggable_dimension(
                DraggableDescriptor {
                    id: format!("{}{}", prefix, index + 1).into(),
                    index: index as isize,
                    droppable_id: droppable.descriptor.id.clone(),
                    drag_type: droppable.descriptor.drag_type.clone(),
                },
                axis.spacing(start, end, cross_start, cross_end),
                window_scroll,
                with_assorted_spacing(),
            )
        })
    };

    let home = list("home", 0.0, 100.0);
    let foreign = list("foreign", 100.0, 200.0);
    let empty_foreign = list("empty-foreign", 200.0, 300.0);

    let in_home = items("inhome", &home, 0.0, 100.0);
    let in_foreign = items("inforeign", &foreign, 100.0, 200.0);

    let mut dimensions = DimensionMap::new();
    for droppable in [&home, &foreign, &empty_foreign] {
        dimensions.add_droppable(droppable.clone());
    }
    for draggable in in_home.iter().chain(in_foreign.iter()) {
        dimensions.add_draggable(draggable.clone());
    }

    Preset {
        window_scroll,
        home,
        foreign,
        empty_foreign,
        in_home,
        in_foreign,
        dimensions,
    }
}
