//! Computed style values relevant to box geometry.

use std::fmt;

use crate::geometry::Spacing;

/// A computed style value that could not be read as a pixel length.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleError {
    /// The CSS property that carried the value.
    pub property: String,
    /// The raw value as reported by the style engine.
    pub value: String,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Computed value '{}' for '{}' is not a pixel length",
            self.value, self.property
        )
    }
}

impl std::error::Error for StyleError {}

/// The subset of an element's computed style that feeds the box model.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub margin: Spacing,
    pub padding: Spacing,
    pub border: Spacing,
    pub display: String,
    pub box_sizing: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        ComputedStyle {
            margin: Spacing::ZERO,
            padding: Spacing::ZERO,
            border: Spacing::ZERO,
            display: "block".to_string(),
            box_sizing: "content-box".to_string(),
        }
    }
}

impl ComputedStyle {
    /// Build from `(property, value)` pairs as a style engine reports them.
    ///
    /// Lengths must be resolved pixel values (`"12px"`, `"0"`). Properties that
    /// do not affect geometry are ignored.
    ///
    /// ```
    /// use reorder_core::style::ComputedStyle;
    ///
    /// let style = ComputedStyle::from_declarations(&[
    ///     ("margin-top", "10px"),
    ///     ("border-left-width", "2px"),
    ///     ("box-sizing", "border-box"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(style.margin.top, 10.0);
    /// assert_eq!(style.border.left, 2.0);
    /// assert_eq!(style.box_sizing, "border-box");
    /// ```
    pub fn from_declarations(declarations: &[(&str, &str)]) -> Result<Self, StyleError> {
        let mut style = ComputedStyle::default();

        for &(property, value) in declarations {
            let slot = match property {
                "margin-top" => &mut style.margin.top,
                "margin-right" => &mut style.margin.right,
                "margin-bottom" => &mut style.margin.bottom,
                "margin-left" => &mut style.margin.left,
                "padding-top" => &mut style.padding.top,
                "padding-right" => &mut style.padding.right,
                "padding-bottom" => &mut style.padding.bottom,
                "padding-left" => &mut style.padding.left,
                "border-top-width" => &mut style.border.top,
                "border-right-width" => &mut style.border.right,
                "border-bottom-width" => &mut style.border.bottom,
                "border-left-width" => &mut style.border.left,
                "display" => {
                    style.display = value.trim().to_string();
                    continue;
                }
                "box-sizing" => {
                    style.box_sizing = value.trim().to_string();
                    continue;
                }
                _ => continue,
            };

            *slot = parse_px(property, value)?;
        }

        Ok(style)
    }
}

/// Parse a resolved CSS length such as `"10px"` or `"0"`.
pub fn parse_px(property: &str, value: &str) -> Result<f32, StyleError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);

    let invalid = || StyleError {
        property: property.to_string(),
        value: value.to_string(),
    };

    // Only a bare zero may omit the unit.
    if number.len() == trimmed.len() && number != "0" {
        return Err(invalid());
    }

    match number.trim().parse::<f32>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("margin-top", "10px"), Ok(10.0));
        assert_eq!(parse_px("margin-top", " 2.5px "), Ok(2.5));
        assert_eq!(parse_px("margin-top", "0"), Ok(0.0));
        assert_eq!(parse_px("margin-top", "-4px"), Ok(-4.0));
    }

    #[test]
    fn test_parse_px_rejects_other_units() {
        assert!(parse_px("margin-top", "1em").is_err());
        assert!(parse_px("margin-top", "auto").is_err());
        assert!(parse_px("margin-top", "12").is_err());
        assert!(parse_px("margin-top", "px").is_err());
    }

    #[test]
    fn test_missing_properties_default() {
        let style = ComputedStyle::from_declarations(&[("color", "red")]).unwrap();
        assert_eq!(style, ComputedStyle::default());
    }

    #[test]
    fn test_invalid_declaration_reports_property() {
        let err = ComputedStyle::from_declarations(&[("padding-left", "3rem")]).unwrap_err();
        assert_eq!(err.property, "padding-left");
        assert_eq!(err.value, "3rem");
    }

    #[test]
    fn test_full_spacing() {
        let style = ComputedStyle::from_declarations(&[
            ("margin-top", "10px"),
            ("margin-right", "5px"),
            ("margin-bottom", "5px"),
            ("margin-left", "10px"),
            ("padding-top", "2px"),
            ("padding-right", "2px"),
            ("padding-bottom", "2px"),
            ("padding-left", "2px"),
            ("border-top-width", "1px"),
            ("border-right-width", "4px"),
            ("border-bottom-width", "3px"),
            ("border-left-width", "2px"),
            ("display", "flex"),
        ])
        .unwrap();

        assert_eq!(style.margin, Spacing::new(10.0, 5.0, 5.0, 10.0));
        assert_eq!(style.padding, Spacing::all(2.0));
        assert_eq!(style.border, Spacing::new(1.0, 4.0, 3.0, 2.0));
        assert_eq!(style.display, "flex");
        assert_eq!(style.box_sizing, "content-box");
    }
}
