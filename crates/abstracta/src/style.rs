//! Resolved, validated styling used by the builder.
//!
//! [`Style`] is produced from [`StyleConfig`](crate::config::StyleConfig) /
//! [`LayoutConfig`](crate::config::LayoutConfig) once at the boundary. Its
//! [`Palette`] always holds a color for every known relationship code, so the
//! builder never has to guess.

use std::collections::BTreeMap;

use abstracta_core::{
    color::Color,
    draw::EdgeStyle,
    relationship::{FALLBACK_COLOR, Relationship, RelationshipCode, edge_style_for},
};

use crate::ValidationError;

/// Angle of the background gradient, in degrees.
pub const GRADIENT_ANGLE: u16 = 270;

/// Default radius of the radial layout, in points.
pub const DEFAULT_RADIUS: f32 = 220.0;

/// Relationship code to color mapping.
///
/// Holds a color for every [`RelationshipCode`], plus optional colors for
/// codes outside the code table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    known: BTreeMap<RelationshipCode, Color>,
    extra: BTreeMap<String, Color>,
}

/// How a relationship resolved against a [`Palette`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub color: Color,
    pub style: EdgeStyle,
    /// False when the code is neither a known code nor in the palette.
    pub recognized: bool,
}

impl Palette {
    /// Creates a palette from known-code colors.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingColor`] for the first known code
    /// without a color.
    pub fn new(
        colors: impl IntoIterator<Item = (RelationshipCode, Color)>,
    ) -> Result<Self, ValidationError> {
        let known: BTreeMap<_, _> = colors.into_iter().collect();
        if let Some(missing) = RelationshipCode::ALL
            .into_iter()
            .find(|code| !known.contains_key(code))
        {
            return Err(ValidationError::MissingColor(missing.as_str().to_string()));
        }

        Ok(Self {
            known,
            extra: BTreeMap::new(),
        })
    }

    /// Replaces the color of a known code.
    pub fn with_color(mut self, code: RelationshipCode, color: Color) -> Self {
        self.known.insert(code, color);
        self
    }

    /// Adds a color for a code outside the code table.
    pub fn with_extra(mut self, code: impl Into<String>, color: Color) -> Self {
        self.extra.insert(code.into(), color);
        self
    }

    /// Returns the color for a known code.
    pub fn color(&self, code: RelationshipCode) -> Color {
        self.known[&code]
    }

    /// Resolves color and style for a relationship.
    ///
    /// Known codes use the palette color and the code's style. Codes outside
    /// the table but present in the palette use that color and the text style
    /// rule. Anything else falls back to [`FALLBACK_COLOR`], solid, and is
    /// reported as unrecognized.
    pub fn resolve(&self, relationship: &Relationship) -> Resolved {
        match relationship {
            Relationship::Known(code) => Resolved {
                color: self.color(*code),
                style: code.edge_style(),
                recognized: true,
            },
            Relationship::Unknown(text) => match self.extra.get(text) {
                Some(color) => Resolved {
                    color: *color,
                    style: edge_style_for(text),
                    recognized: true,
                },
                None => Resolved {
                    color: fallback_color(),
                    style: EdgeStyle::Solid,
                    recognized: false,
                },
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let known = RelationshipCode::ALL
            .into_iter()
            .map(|code| (code, hex(code.default_color())))
            .collect();
        Self {
            known,
            extra: BTreeMap::new(),
        }
    }
}

/// Diagram background fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Color),
    /// Two-color gradient drawn at [`GRADIENT_ANGLE`].
    Gradient { from: Color, to: Color },
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(hex("#FFFFFF"))
    }
}

/// Where independent variables are placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMode {
    /// Leave placement to the rendering engine.
    Hierarchical,
    /// Pin variables on a circle of `radius` around the dependent variable.
    Radial { radius: f32 },
}

/// Flow direction for hierarchical layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    TopBottom,
    LeftRight,
}

impl Direction {
    /// Returns the Graphviz `rankdir` value.
    pub fn as_rankdir(self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
        }
    }
}

/// Fully resolved styling for one build.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    palette: Palette,
    show_labels: bool,
    edge_width: f32,
    node_fill: Color,
    background: Background,
    layout: LayoutMode,
    direction: Direction,
}

impl Style {
    /// Creates a style with the given palette and default settings.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Sets the edge pen width.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EdgeWidthOutOfRange`] outside `1.0..=8.0`.
    pub fn with_edge_width(mut self, edge_width: f32) -> Result<Self, ValidationError> {
        if !(1.0..=8.0).contains(&edge_width) {
            return Err(ValidationError::EdgeWidthOutOfRange(edge_width));
        }
        self.edge_width = edge_width;
        Ok(self)
    }

    pub fn with_node_fill(mut self, node_fill: Color) -> Self {
        self.node_fill = node_fill;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Sets the layout mode.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRadius`] for a radial layout whose
    /// radius is not a positive finite number.
    pub fn with_layout(mut self, layout: LayoutMode) -> Result<Self, ValidationError> {
        if let LayoutMode::Radial { radius } = layout {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(ValidationError::InvalidRadius(radius));
            }
        }
        self.layout = layout;
        Ok(self)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn edge_width(&self) -> f32 {
        self.edge_width
    }

    pub fn node_fill(&self) -> Color {
        self.node_fill
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            show_labels: true,
            edge_width: 2.0,
            node_fill: hex("#FFFFFF"),
            background: Background::default(),
            layout: LayoutMode::Hierarchical,
            direction: Direction::default(),
        }
    }
}

pub(crate) fn fallback_color() -> Color {
    hex(FALLBACK_COLOR)
}

/// Parses one of the crate's built-in color constants.
pub(crate) fn hex(value: &str) -> Color {
    Color::new(value).unwrap_or_default()
}
