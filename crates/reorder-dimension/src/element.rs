//! Access to the live element behind a draggable.

use std::rc::Rc;

use reorder_core::geometry::Spacing;
use reorder_core::style::{ComputedStyle, StyleError};

/// A rendered element whose geometry can be read.
pub trait LiveElement {
    /// The border box relative to the viewport.
    fn bounding_client_rect(&self) -> Spacing;

    /// The resolved style of the element.
    fn computed_style(&self) -> Result<ComputedStyle, StyleError>;

    fn tag_name(&self) -> String;
}

/// Returns the element currently rendered for a draggable, or `None` when unattached.
pub type ElementAccessor = Rc<dyn Fn() -> Option<Rc<dyn LiveElement>>>;
