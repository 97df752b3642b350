use reorder_core::box_model::BoxModel;

use crate::id::DraggableDescriptor;

/// How an element's declared size relates to its border box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

impl BoxSizing {
    /// Read a computed `box-sizing` value. Anything but `border-box` is content-box.
    pub fn from_css(value: &str) -> Self {
        if value.trim() == "border-box" {
            BoxSizing::BorderBox
        } else {
            BoxSizing::ContentBox
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            BoxSizing::ContentBox => "content-box",
            BoxSizing::BorderBox => "border-box",
        }
    }
}

/// What is needed to render a same-sized stand-in while the original is dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub client: BoxModel,
    /// Lower-cased tag name of the original element.
    pub tag_name: String,
    pub display: String,
    pub box_sizing: BoxSizing,
}

/// A snapshot of a draggable's geometry. Replaced wholesale, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableDimension {
    pub descriptor: DraggableDescriptor,
    pub client: BoxModel,
    pub page: BoxModel,
    pub box_sizing: BoxSizing,
    pub placeholder: Placeholder,
}
