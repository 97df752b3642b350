//! The CSS box model in both client and page coordinates.
//!
//! A [`BoxModel`] is always built from a border box plus the margin, border
//! and padding thicknesses around it. The other three rectangles are derived:
//!
//! ```text
//! margin box  = border box expanded by margin
//! padding box = border box shrunk by border
//! content box = padding box shrunk by padding
//! ```
//!
//! No rounding happens here. Values stay as the fractional pixels the
//! layout engine reported.

use crate::geometry::{Rect, Spacing};
use crate::math::Position;
use crate::profiling::profile_function;
use crate::style::ComputedStyle;

/// Edge thicknesses around a border box. Every edge defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSpacing {
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

/// The four nested rectangles of a box: margin ⊇ border ⊇ padding ⊇ content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

/// Build a box from its border rectangle and edge thicknesses.
pub fn create_box(border_box: Spacing, spacing: BoxSpacing) -> BoxModel {
    let BoxSpacing {
        margin,
        border,
        padding,
    } = spacing;

    let padding_box = border_box.shrink(border);

    BoxModel {
        margin_box: Rect::from_spacing(border_box.expand(margin)),
        border_box: Rect::from_spacing(border_box),
        padding_box: Rect::from_spacing(padding_box),
        content_box: Rect::from_spacing(padding_box.shrink(padding)),
        margin,
        border,
        padding,
    }
}

/// Build a box from a measured border rectangle and the element's computed style.
pub fn calculate_box(border_box: Spacing, style: &ComputedStyle) -> BoxModel {
    profile_function!();
    create_box(
        border_box,
        BoxSpacing {
            margin: style.margin,
            border: style.border,
            padding: style.padding,
        },
    )
}

impl BoxModel {
    /// The edge thicknesses this box was built with.
    pub fn spacing(&self) -> BoxSpacing {
        BoxSpacing {
            margin: self.margin,
            border: self.border,
            padding: self.padding,
        }
    }

    /// Move the border box by `change` and rebuild every nested rectangle from it.
    pub fn offset(&self, change: Position) -> BoxModel {
        create_box(
            self.border_box.spacing().offset_by_position(change),
            self.spacing(),
        )
    }

    /// Convert a client box into page coordinates by adding the window scroll.
    pub fn with_scroll(&self, scroll: Position) -> BoxModel {
        BoxModel {
            margin_box: self.margin_box.translate(scroll),
            border_box: self.border_box.translate(scroll),
            padding_box: self.padding_box.translate(scroll),
            content_box: self.content_box.translate(scroll),
            margin: self.margin,
            border: self.border,
            padding: self.padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn assorted() -> BoxSpacing {
        BoxSpacing {
            margin: Spacing::new(10.0, 5.0, 5.0, 10.0),
            border: Spacing::new(1.0, 4.0, 3.0, 2.0),
            padding: Spacing::all(2.0),
        }
    }

    fn rects(model: &BoxModel) -> [Rect; 4] {
        [
            model.margin_box,
            model.border_box,
            model.padding_box,
            model.content_box,
        ]
    }

    #[test]
    fn test_nested_rectangles() {
        let model = create_box(Spacing::new(10.0, 100.0, 20.0, 0.0), assorted());

        assert_eq!(model.margin_box.spacing(), Spacing::new(0.0, 105.0, 25.0, -10.0));
        assert_eq!(model.border_box.spacing(), Spacing::new(10.0, 100.0, 20.0, 0.0));
        assert_eq!(model.padding_box.spacing(), Spacing::new(11.0, 96.0, 17.0, 2.0));
        assert_eq!(model.content_box.spacing(), Spacing::new(13.0, 94.0, 15.0, 4.0));
    }

    #[test]
    fn test_no_spacing_collapses_to_border_box() {
        let border_box = Spacing::new(10.0, 100.0, 20.0, 0.0);
        let model = create_box(border_box, BoxSpacing::default());

        for rect in rects(&model) {
            assert_eq!(rect.spacing(), border_box);
        }
    }

    #[test]
    fn test_with_scroll_translates_every_rectangle() {
        let client = create_box(Spacing::new(10.0, 100.0, 20.0, 0.0), assorted());
        let scroll = Vec2::new(50.0, 100.0);
        let page = client.with_scroll(scroll);

        for (c, p) in rects(&client).iter().zip(rects(&page).iter()) {
            assert_eq!(p.top, c.top + scroll.y);
            assert_eq!(p.bottom, c.bottom + scroll.y);
            assert_eq!(p.left, c.left + scroll.x);
            assert_eq!(p.right, c.right + scroll.x);
        }
        assert_eq!(page.spacing(), client.spacing());
    }

    #[test]
    fn test_scroll_round_trip() {
        let client = create_box(Spacing::new(10.0, 100.0, 20.0, 0.0), assorted());
        let scroll = Vec2::new(50.0, 100.0);

        let restored = client.with_scroll(scroll).offset(-scroll);

        assert_eq!(restored, client);
    }

    #[test]
    fn test_offset_keeps_spacing() {
        let client = create_box(Spacing::new(10.0, 100.0, 20.0, 0.0), assorted());
        let moved = client.offset(Vec2::new(0.0, -8.0));

        assert_eq!(moved.border_box.top, 2.0);
        assert_eq!(moved.margin_box.top, -8.0);
        assert_eq!(moved.spacing(), client.spacing());
    }

    #[test]
    fn test_calculate_box_reads_style() {
        let style = ComputedStyle {
            margin: Spacing::all(4.0),
            ..ComputedStyle::default()
        };
        let model = calculate_box(Spacing::new(0.0, 10.0, 10.0, 0.0), &style);

        assert_eq!(model.margin_box.spacing(), Spacing::new(-4.0, 14.0, 14.0, -4.0));
        assert_eq!(model.content_box.spacing(), Spacing::new(0.0, 10.0, 10.0, 0.0));
    }
}
