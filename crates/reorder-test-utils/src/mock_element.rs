//! A fake rendered element with settable geometry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reorder_core::geometry::Spacing;
use reorder_core::style::{ComputedStyle, StyleError};
use reorder_dimension::{ElementAccessor, LiveElement};

#[derive(Debug)]
pub struct MockElement {
    border_box: Cell<Spacing>,
    style: RefCell<Result<ComputedStyle, StyleError>>,
    tag_name: String,
}

impl MockElement {
    /// A `DIV` with the given border box and no margin, border or padding.
    pub fn new(border_box: Spacing) -> Self {
        Self {
            border_box: Cell::new(border_box),
            style: RefCell::new(Ok(ComputedStyle::default())),
            tag_name: "DIV".to_string(),
        }
    }

    pub fn with_style(self, style: ComputedStyle) -> Self {
        self.style.replace(Ok(style));
        self
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Move the element, as a layout pass would.
    pub fn set_border_box(&self, border_box: Spacing) {
        self.border_box.set(border_box);
    }

    pub fn set_style(&self, style: ComputedStyle) {
        self.style.replace(Ok(style));
    }

    /// Make the next style reads fail.
    pub fn set_style_error(&self, error: StyleError) {
        self.style.replace(Err(error));
    }
}

impl LiveElement for MockElement {
    fn bounding_client_rect(&self) -> Spacing {
        self.border_box.get()
    }

    fn computed_style(&self) -> Result<ComputedStyle, StyleError> {
        self.style.borrow().clone()
    }

    fn tag_name(&self) -> String {
        self.tag_name.clone()
    }
}

/// Where a draggable's element is mounted. Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct ElementSlot(Rc<RefCell<Option<Rc<MockElement>>>>);

impl ElementSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn attached(element: MockElement) -> Self {
        let slot = Self::empty();
        slot.attach(element);
        slot
    }

    pub fn attach(&self, element: MockElement) -> Rc<MockElement> {
        let element = Rc::new(element);
        self.0.replace(Some(Rc::clone(&element)));
        element
    }

    pub fn detach(&self) {
        self.0.replace(None);
    }

    pub fn element(&self) -> Option<Rc<MockElement>> {
        self.0.borrow().clone()
    }

    pub fn accessor(&self) -> ElementAccessor {
        let slot = Rc::clone(&self.0);
        Rc::new(move || {
            slot.borrow()
                .clone()
                .map(|element| element as Rc<dyn LiveElement>)
        })
    }
}
