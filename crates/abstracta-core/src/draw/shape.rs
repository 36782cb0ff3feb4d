//! Node shape hints.

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Outline of a variable node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    /// Rectangle, used for independent variables
    #[default]
    Box,
    /// Ellipse, used for the dependent variable
    Ellipse,
}

impl NodeShape {
    /// Returns the Graphviz `shape` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Ellipse => "ellipse",
        }
    }
}

/// Visual hints for a node: shape, fill and font size.
///
/// Renderers that lay nodes out themselves (Graphviz) only need the shape,
/// fill and font size. Renderers that draw at fixed positions also use
/// [`NodeDefinition::size_for`] to size the outline around the label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefinition {
    shape: NodeShape,
    fill: Color,
    font_size: f32,
}

impl NodeDefinition {
    pub fn new(shape: NodeShape, fill: Color, font_size: f32) -> Self {
        Self {
            shape,
            fill,
            font_size,
        }
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Estimates the outline size needed for `label`.
    ///
    /// Uses an average glyph width of 0.6 em, plus padding. Ellipses get
    /// extra room because their usable width is narrower than their extent.
    pub fn size_for(&self, label: &str) -> Size {
        let text_width = label.chars().count() as f32 * self.font_size * 0.6;
        let width = text_width + self.font_size * 2.0;
        let height = self.font_size * 2.6;
        match self.shape {
            NodeShape::Box => Size::new(width, height),
            NodeShape::Ellipse => Size::new(width * 1.3, height * 1.3),
        }
    }
}

impl NodeDefinition {
    /// Finds where the line from `center` toward `toward` leaves the outline
    /// of a node labeled `label` centered at `center`.
    ///
    /// Returns `center` when both points coincide.
    pub fn find_intersection(&self, label: &str, center: Point, toward: Point) -> Point {
        let direction = toward.sub_point(center);
        if direction.is_zero() {
            return center;
        }

        let size = self.size_for(label);
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;
        let (dx, dy) = (direction.x(), direction.y());

        let t = match self.shape {
            NodeShape::Box => {
                let tx = if dx == 0.0 { f32::INFINITY } else { half_width / dx.abs() };
                let ty = if dy == 0.0 { f32::INFINITY } else { half_height / dy.abs() };
                tx.min(ty)
            }
            NodeShape::Ellipse => {
                1.0 / ((dx / half_width).powi(2) + (dy / half_height).powi(2)).sqrt()
            }
        };

        center.add_point(direction.scale(t))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_ellipse_is_larger_than_box_for_same_label() {
        let fill = Color::default();
        let node_box = NodeDefinition::new(NodeShape::Box, fill, 11.0).size_for("GDP");
        let node_ellipse = NodeDefinition::new(NodeShape::Ellipse, fill, 11.0).size_for("GDP");
        assert!(node_ellipse.width() > node_box.width());
        assert!(node_ellipse.height() > node_box.height());
    }

    #[test]
    fn test_box_intersection_on_axes() {
        let def = NodeDefinition::new(NodeShape::Box, Color::default(), 10.0);
        let size = def.size_for("AB");
        let center = Point::new(0.0, 0.0);

        let right = def.find_intersection("AB", center, Point::new(500.0, 0.0));
        assert_approx_eq!(f32, right.x(), size.width() / 2.0);
        assert_approx_eq!(f32, right.y(), 0.0);

        let up = def.find_intersection("AB", center, Point::new(0.0, -500.0));
        assert_approx_eq!(f32, up.x(), 0.0);
        assert_approx_eq!(f32, up.y(), -size.height() / 2.0);
    }

    #[test]
    fn test_ellipse_intersection_lies_on_outline() {
        let def = NodeDefinition::new(NodeShape::Ellipse, Color::default(), 14.0);
        let size = def.size_for("GDP");
        let point = def.find_intersection("GDP", Point::new(0.0, 0.0), Point::new(300.0, 200.0));
        let a = size.width() / 2.0;
        let b = size.height() / 2.0;
        let on_outline = (point.x() / a).powi(2) + (point.y() / b).powi(2);
        assert!((on_outline - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersection_with_same_point() {
        let def = NodeDefinition::new(NodeShape::Box, Color::default(), 10.0);
        let center = Point::new(3.0, 4.0);
        assert_eq!(def.find_intersection("X", center, center), center);
    }

    #[test]
    fn test_size_grows_with_label_length() {
        let def = NodeDefinition::new(NodeShape::Box, Color::default(), 11.0);
        assert!(def.size_for("Political Stability").width() > def.size_for("GDP").width());
    }
}
