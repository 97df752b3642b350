//! Droppable geometry and the scrollable frame around it.

use reorder_core::box_model::BoxModel;
use reorder_core::geometry::{Rect, Size};
use reorder_core::math::Position;

use crate::axis::{Axis, Direction};
use crate::error::{DimensionError, DimensionResult};
use crate::id::DroppableDescriptor;

/// A measured scroll container, as supplied when building a droppable.
///
/// `client` is measured independently of the droppable's own box; the frame is
/// typically an ancestor that clips and scrolls the droppable.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollableFrame {
    pub client: BoxModel,
    pub scroll_size: Size<f32>,
    pub scroll: Position,
    pub should_clip_subject: bool,
}

/// The nearest scrollable ancestor of a droppable.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestScrollable {
    pub client: BoxModel,
    pub page: BoxModel,
    /// Total scrollable content size (`scrollWidth` x `scrollHeight`).
    pub scroll_size: Size<f32>,
    /// Current scroll offset of the frame.
    pub scroll: Position,
    /// Largest scroll offset the frame can reach on each axis.
    pub max_scroll: Position,
    /// Whether visible content must be clipped to the frame for collision checks.
    pub should_clip_subject: bool,
}

impl ClosestScrollable {
    fn from_frame(frame: ScrollableFrame, window_scroll: Position) -> Self {
        let visible = &frame.client.padding_box;
        let max_scroll = Position::new(
            (frame.scroll_size.width - visible.width).max(0.0),
            (frame.scroll_size.height - visible.height).max(0.0),
        );

        ClosestScrollable {
            page: frame.client.with_scroll(window_scroll),
            client: frame.client,
            scroll_size: frame.scroll_size,
            scroll: frame.scroll,
            max_scroll,
            should_clip_subject: frame.should_clip_subject,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DroppableViewport {
    pub closest_scrollable: Option<ClosestScrollable>,
    /// The droppable's page margin box.
    pub subject: Rect,
    /// The visible part of the subject; `None` when it is clipped away entirely.
    pub clipped: Option<Rect>,
}

impl DroppableViewport {
    fn new(page: &BoxModel, closest_scrollable: Option<ClosestScrollable>) -> Self {
        let subject = page.margin_box;
        let clipped = match &closest_scrollable {
            Some(frame) if frame.should_clip_subject => {
                subject.intersection(&frame.page.border_box)
            }
            _ => Some(subject),
        };

        DroppableViewport {
            closest_scrollable,
            subject,
            clipped,
        }
    }
}

/// A snapshot of a droppable's geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppableDimension {
    pub descriptor: DroppableDescriptor,
    pub is_enabled: bool,
    pub axis: Axis,
    pub client: BoxModel,
    pub page: BoxModel,
    pub viewport: DroppableViewport,
}

impl DroppableDimension {
    /// Build a droppable from its client box.
    ///
    /// The page box, and the frame's page box if there is one, are derived by
    /// adding `window_scroll`.
    pub fn new(
        descriptor: DroppableDescriptor,
        direction: Direction,
        client: BoxModel,
        window_scroll: Position,
        frame: Option<ScrollableFrame>,
    ) -> Self {
        let page = client.with_scroll(window_scroll);
        let closest = frame.map(|frame| ClosestScrollable::from_frame(frame, window_scroll));
        let viewport = DroppableViewport::new(&page, closest);

        DroppableDimension {
            descriptor,
            is_enabled: true,
            axis: Axis::from_direction(direction),
            client,
            page,
            viewport,
        }
    }

    /// A copy with the enabled flag replaced.
    pub fn with_enabled(&self, is_enabled: bool) -> Self {
        DroppableDimension {
            is_enabled,
            ..self.clone()
        }
    }

    pub fn closest_scrollable(&self) -> DimensionResult<&ClosestScrollable> {
        self.viewport
            .closest_scrollable
            .as_ref()
            .ok_or_else(|| DimensionError::NoClosestScrollable {
                droppable_id: self.descriptor.id.clone(),
            })
    }
}
