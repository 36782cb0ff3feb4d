//! Stroke and line-style definitions.
//!
//! Exported types:
//! - [`EdgeStyle`]: Line pattern of a relationship edge (solid, dashed, dotted, bold)
//! - [`StrokeDefinition`]: Color, width and style of a stroke
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # Graphviz and SVG Mapping
//!
//! | Style | Graphviz `style` | SVG `stroke-dasharray` | SVG width |
//! |-------|------------------|------------------------|-----------|
//! | `Solid` | `solid` | none | width |
//! | `Dashed` | `dashed` | `"6,4"` | width |
//! | `Dotted` | `dotted` | `"2,3"` | width |
//! | `Bold` | `bold` | none | width × 2 |

use std::fmt;

use crate::color::Color;

/// Line pattern of a relationship edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Solid line drawn heavier than the configured width
    Bold,
}

impl EdgeStyle {
    /// Returns the Graphviz `style` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Bold => "bold",
        }
    }

    /// Returns the SVG dasharray value for this style, or None for unbroken lines
    pub fn to_svg_dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid | Self::Bold => None,
            Self::Dashed => Some("6,4"),
            Self::Dotted => Some("2,3"),
        }
    }

    /// Returns the factor applied to the stroke width when drawing.
    pub fn width_factor(self) -> f32 {
        match self {
            Self::Bold => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stroke definition for rendering edges and borders.
///
/// # Examples
///
/// ```
/// use abstracta_core::draw::{EdgeStyle, StrokeDefinition};
/// use abstracta_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("#E74C3C").unwrap(), 2.0, EdgeStyle::Bold);
/// assert_eq!(stroke.effective_width(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: EdgeStyle,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color, width and style.
    pub fn new(color: Color, width: f32, style: EdgeStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the configured stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the width actually drawn, with the style's factor applied.
    pub fn effective_width(&self) -> f32 {
        self.width * self.style.width_factor()
    }

    /// Returns the stroke style.
    pub fn style(&self) -> EdgeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0, EdgeStyle::Solid)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width (with the style's width factor) and the dash
/// pattern when the style has one.
///
/// # Examples
///
/// ```
/// use abstracta_core::draw::{EdgeStyle, StrokeDefinition};
/// use abstracta_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0, EdgeStyle::Solid);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 50);
///
/// let line = abstracta_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_hex())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.effective_width());

        if let Some(dasharray) = $stroke.style().to_svg_dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
