//! Registers a draggable's geometry with the marshal across its lifecycle.
//!
//! ```text
//!              on_attach / on_config_change        on_detach
//! Unpublished ─────────────────────────────▶ Published ──────────▶ Unpublished
//!                                              │   ▲
//!                                              └───┘ on_config_change
//!                                         (update only if the descriptor changed)
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use reorder_core::box_model::calculate_box;
use reorder_core::math::Position;
use reorder_core::position::{add, negate};
use reorder_core::profiling::profile_function;

use crate::draggable::{BoxSizing, DraggableDimension, Placeholder};
use crate::element::ElementAccessor;
use crate::error::{DimensionError, DimensionResult};
use crate::id::{DraggableDescriptor, DraggableId, DroppableId, DroppableType};
use crate::marshal::{DimensionCapture, DimensionMarshal};

/// Inputs from the rendering layer for one draggable.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherConfig {
    pub draggable_id: DraggableId,
    pub droppable_id: DroppableId,
    pub drag_type: DroppableType,
    pub index: isize,
    pub is_dragging: bool,
    /// The visual transform currently applied to the element.
    pub offset: Position,
}

impl PublisherConfig {
    pub fn descriptor(&self) -> DraggableDescriptor {
        DraggableDescriptor {
            id: self.draggable_id.clone(),
            index: self.index,
            droppable_id: self.droppable_id.clone(),
            drag_type: self.drag_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishState {
    Unpublished,
    Published(DraggableDescriptor),
}

impl PublishState {
    pub fn descriptor(&self) -> Option<&DraggableDescriptor> {
        match self {
            PublishState::Unpublished => None,
            PublishState::Published(descriptor) => Some(descriptor),
        }
    }
}

struct PublisherInner {
    config: PublisherConfig,
    state: PublishState,
}

/// State shared between a publisher and the captures it hands out.
pub(crate) struct PublisherShared {
    inner: RefCell<PublisherInner>,
    element: ElementAccessor,
}

impl PublisherShared {
    pub(crate) fn draggable_id(&self) -> DraggableId {
        self.inner.borrow().config.draggable_id.clone()
    }

    pub(crate) fn capture(
        &self,
        window_scroll: Position,
        window_scroll_diff: Position,
    ) -> DimensionResult<DraggableDimension> {
        profile_function!();
        let inner = self.inner.borrow();

        let Some(element) = (self.element)() else {
            return Err(DimensionError::NotAttached {
                draggable_id: inner.config.draggable_id.clone(),
            });
        };
        let Some(descriptor) = inner.state.descriptor() else {
            return Err(DimensionError::NotPublished {
                draggable_id: inner.config.draggable_id.clone(),
            });
        };

        let style = element.computed_style()?;
        let border_box = element.bounding_client_rect();

        let change = drag_change(&inner.config, window_scroll_diff);

        let client = calculate_box(border_box, &style).offset(change);
        let page = client.with_scroll(window_scroll);

        let box_sizing = BoxSizing::from_css(&style.box_sizing);

        let placeholder = Placeholder {
            client,
            tag_name: element.tag_name().to_lowercase(),
            display: style.display.clone(),
            box_sizing,
        };

        Ok(DraggableDimension {
            descriptor: descriptor.clone(),
            client,
            page,
            box_sizing,
            placeholder,
        })
    }
}

/// The displacement that takes the measured element back to its resting position.
///
/// The visual transform is always undone. While dragging, the element is
/// pinned in the viewport so window scroll since the drag started is undone too.
fn drag_change(config: &PublisherConfig, window_scroll_diff: Position) -> Position {
    let undo_transform = negate(config.offset);
    if !config.is_dragging {
        return undo_transform;
    }

    let change = add(undo_transform, negate(window_scroll_diff));
    tracing::trace!(
        draggable_id = %config.draggable_id,
        x = change.x,
        y = change.y,
        "Offsetting dragging item"
    );
    change
}

/// Keeps the marshal's registration for one draggable in sync with its config.
pub struct DimensionPublisher {
    marshal: Rc<dyn DimensionMarshal>,
    shared: Rc<PublisherShared>,
}

impl DimensionPublisher {
    /// Create an unpublished publisher for the element behind `element`.
    pub fn new(
        marshal: Rc<dyn DimensionMarshal>,
        element: ElementAccessor,
        config: PublisherConfig,
    ) -> Self {
        Self {
            marshal,
            shared: Rc::new(PublisherShared {
                inner: RefCell::new(PublisherInner {
                    config,
                    state: PublishState::Unpublished,
                }),
                element,
            }),
        }
    }

    /// The element has been mounted.
    pub fn on_attach(&self, config: PublisherConfig) {
        self.set_config(config);
        self.publish();
    }

    /// The rendering layer supplied new inputs.
    pub fn on_config_change(&self, config: PublisherConfig) {
        self.set_config(config);
        self.publish();
    }

    /// The element is being unmounted.
    pub fn on_detach(&self) {
        // Unregister with the descriptor that was published, not the current
        // config, in case the id changed underneath us.
        let previous = std::mem::replace(
            &mut self.shared.inner.borrow_mut().state,
            PublishState::Unpublished,
        );

        match previous {
            PublishState::Published(descriptor) => {
                tracing::debug!(draggable_id = %descriptor.id, "Unregistering draggable");
                self.marshal.unregister_draggable(&descriptor);
            }
            PublishState::Unpublished => {
                tracing::error!("Cannot unpublish descriptor when none is published");
            }
        }
    }

    pub fn state(&self) -> PublishState {
        self.shared.inner.borrow().state.clone()
    }

    pub fn is_published(&self) -> bool {
        matches!(self.shared.inner.borrow().state, PublishState::Published(_))
    }

    /// A capture for this publisher, as handed to the marshal.
    pub fn capture(&self) -> DimensionCapture {
        DimensionCapture {
            shared: Rc::clone(&self.shared),
        }
    }

    fn set_config(&self, config: PublisherConfig) {
        self.shared.inner.borrow_mut().config = config;
    }

    fn publish(&self) {
        let descriptor = self.shared.inner.borrow().config.descriptor();

        // The state is updated before calling out so the marshal may capture
        // from inside the call.
        let previous = {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.state.descriptor() == Some(&descriptor) {
                return;
            }
            std::mem::replace(
                &mut inner.state,
                PublishState::Published(descriptor.clone()),
            )
        };

        match previous {
            PublishState::Unpublished => {
                tracing::debug!(
                    draggable_id = %descriptor.id,
                    index = descriptor.index,
                    "Registering draggable"
                );
                self.marshal.register_draggable(descriptor, self.capture());
            }
            PublishState::Published(previous) => {
                tracing::debug!(
                    draggable_id = %descriptor.id,
                    from = previous.index,
                    to = descriptor.index,
                    "Updating draggable"
                );
                self.marshal
                    .update_draggable(&previous, descriptor, self.capture());
            }
        }
    }
}
