//! Direct SVG output for positioned diagrams.
//!
//! Only diagrams whose nodes all carry positions (radial layouts) can be
//! drawn here; hierarchical layouts need an external layout engine and go
//! through [`super::dot`] instead.

use std::collections::BTreeMap;

use ::svg::{
    Document, Node as _,
    node::{Text as SvgText, element as svg_element},
};
use log::debug;

use abstracta_core::{
    apply_stroke,
    color::Color,
    draw::NodeShape,
    geometry::{Bounds, Point},
};

use crate::{
    ir::{GraphIr, Node},
    style::{Background, GRADIENT_ANGLE},
};

use super::{Error, Exporter, number};

const PADDING: f32 = 40.0;
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const EDGE_FONT_SIZE: f32 = 9.0;
const BACKGROUND_ID: &str = "background-fill";

/// Draws a positioned [`GraphIr`] as a standalone SVG document.
#[derive(Debug, Default, Clone)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    fn node_position(node: &Node) -> Result<Point, Error> {
        node.position()
            .ok_or_else(|| Error::Unpositioned(node.id().to_string()))
    }

    fn content_bounds(ir: &GraphIr) -> Result<Bounds, Error> {
        let mut bounds: Option<Bounds> = None;
        for node in ir.nodes() {
            let node_bounds = Self::node_position(node)?
                .to_bounds(node.definition().size_for(node.id()));
            bounds = Some(match bounds {
                Some(acc) => acc.merge(&node_bounds),
                None => node_bounds,
            });
        }
        Ok(bounds.unwrap_or_default().add_padding(PADDING))
    }

    fn render_background(background: &Background, bounds: Bounds) -> Vec<Box<dyn ::svg::Node>> {
        let rect = svg_element::Rectangle::new()
            .set("x", number(bounds.min_x()))
            .set("y", number(bounds.min_y()))
            .set("width", number(bounds.width()))
            .set("height", number(bounds.height()));

        match background {
            Background::Solid(color) => vec![Box::new(rect.set("fill", color.to_hex()))],
            Background::Gradient { from, to } => {
                let defs = svg_element::Definitions::new().add(gradient(*from, *to));
                vec![
                    Box::new(defs),
                    Box::new(rect.set("fill", format!("url(#{BACKGROUND_ID})"))),
                ]
            }
        }
    }

    fn render_node(node: &Node, position: Point) -> svg_element::Group {
        let definition = node.definition();
        let size = definition.size_for(node.id());
        let outline = Color::default();

        let shape: Box<dyn ::svg::Node> = match definition.shape() {
            NodeShape::Box => Box::new(
                svg_element::Rectangle::new()
                    .set("x", number(position.x() - size.width() / 2.0))
                    .set("y", number(position.y() - size.height() / 2.0))
                    .set("width", number(size.width()))
                    .set("height", number(size.height()))
                    .set("rx", 4)
                    .set("fill", definition.fill().to_hex())
                    .set("stroke", outline.to_hex()),
            ),
            NodeShape::Ellipse => Box::new(
                svg_element::Ellipse::new()
                    .set("cx", number(position.x()))
                    .set("cy", number(position.y()))
                    .set("rx", number(size.width() / 2.0))
                    .set("ry", number(size.height() / 2.0))
                    .set("fill", definition.fill().to_hex())
                    .set("stroke", outline.to_hex()),
            ),
        };

        let label = svg_element::Text::new("")
            .set("x", number(position.x()))
            .set("y", number(position.y()))
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", number(definition.font_size()))
            .add(SvgText::new(node.id()));

        svg_element::Group::new().add(shape).add(label)
    }
}

impl Exporter for SvgExporter {
    fn export(&self, ir: &GraphIr) -> Result<String, Error> {
        let bounds = Self::content_bounds(ir)?;

        let mut document = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    number(bounds.min_x()),
                    number(bounds.min_y()),
                    number(bounds.width()),
                    number(bounds.height())
                ),
            )
            .set("width", number(bounds.width()))
            .set("height", number(bounds.height()));

        for element in Self::render_background(ir.background(), bounds) {
            document.append(element);
        }

        // One arrowhead marker per distinct color, ordered for stable output.
        let markers: BTreeMap<String, Color> = ir
            .edges()
            .iter()
            .map(|edge| (marker_id(edge.color()), edge.color()))
            .collect();
        let mut defs = svg_element::Definitions::new();
        for (id, color) in &markers {
            defs = defs.add(arrow_marker(id, *color));
        }
        document.append(defs);

        let mut edges = svg_element::Group::new().set("class", "edges");
        for edge in ir.edges() {
            let (Some(source), Some(target)) = (ir.node(edge.source()), ir.node(edge.target()))
            else {
                continue;
            };
            let source_center = Self::node_position(source)?;
            let target_center = Self::node_position(target)?;
            let start = source
                .definition()
                .find_intersection(source.id(), source_center, target_center);
            let end = target
                .definition()
                .find_intersection(target.id(), target_center, source_center);

            let line = svg_element::Line::new()
                .set("x1", number(start.x()))
                .set("y1", number(start.y()))
                .set("x2", number(end.x()))
                .set("y2", number(end.y()))
                .set("marker-end", format!("url(#{})", marker_id(edge.color())));
            edges = edges.add(apply_stroke!(line, edge.stroke()));

            if !edge.label().is_empty() {
                let mid = start.midpoint(end);
                edges = edges.add(
                    svg_element::Text::new("")
                        .set("x", number(mid.x()))
                        .set("y", number(mid.y()))
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central")
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", number(EDGE_FONT_SIZE))
                        .set("fill", edge.color().to_hex())
                        .add(SvgText::new(edge.label())),
                );
            }
        }
        document.append(edges);

        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for node in ir.nodes() {
            nodes = nodes.add(Self::render_node(node, Self::node_position(node)?));
        }
        document.append(nodes);

        let rendered = document.to_string();
        debug!(bytes = rendered.len(), markers = markers.len(); "SVG document written");
        Ok(rendered)
    }
}

fn marker_id(color: Color) -> String {
    format!("arrow-{}", color.to_hex().trim_start_matches('#'))
}

fn arrow_marker(id: &str, color: Color) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", id)
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", color.to_hex()),
        )
}

/// Builds the background gradient. Angles follow Graphviz: 0° runs left to
/// right, 90° bottom to top.
fn gradient(from: Color, to: Color) -> svg_element::LinearGradient {
    let radians = f32::from(GRADIENT_ANGLE).to_radians();
    let (dx, dy) = (radians.cos() / 2.0, -radians.sin() / 2.0);

    svg_element::LinearGradient::new()
        .set("id", BACKGROUND_ID)
        .set("x1", number(0.5 - dx))
        .set("y1", number(0.5 - dy))
        .set("x2", number(0.5 + dx))
        .set("y2", number(0.5 + dy))
        .add(
            svg_element::Stop::new()
                .set("offset", "0")
                .set("stop-color", from.to_hex()),
        )
        .add(
            svg_element::Stop::new()
                .set("offset", "1")
                .set("stop-color", to.to_hex()),
        )
}
