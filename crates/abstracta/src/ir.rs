//! The renderer-agnostic graph representation produced by [`crate::build`].
//!
//! A [`GraphIr`] is everything an exporter needs and nothing more: nodes with
//! shape and fill hints (and positions for radial layouts), edges with
//! resolved strokes and labels, clusters, and the background.

use abstracta_core::{
    color::Color,
    draw::{EdgeStyle, NodeDefinition, StrokeDefinition},
    geometry::Point,
};

use crate::style::{Background, Direction};

/// Whether a node is the outcome or a predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Dependent,
    Independent,
}

/// A variable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: String,
    pub(crate) role: NodeRole,
    pub(crate) definition: NodeDefinition,
    pub(crate) position: Option<Point>,
}

impl Node {
    /// Returns the node identifier, which is also its label.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn definition(&self) -> &NodeDefinition {
        &self.definition
    }

    /// Returns the pinned position, set only for radial layouts.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// A relationship edge from an independent variable to the dependent variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(crate) source: String,
    pub(crate) target: String,
    pub(crate) code: String,
    pub(crate) stroke: StrokeDefinition,
    pub(crate) label: String,
    pub(crate) recognized: bool,
}

impl Edge {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the relationship code text as given on input.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn color(&self) -> Color {
        self.stroke.color()
    }

    pub fn style(&self) -> EdgeStyle {
        self.stroke.style()
    }

    pub fn penwidth(&self) -> f32 {
        self.stroke.width()
    }

    /// Returns the edge label, empty when labels are disabled.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns false when the code fell back to the default color and style.
    pub fn is_recognized(&self) -> bool {
        self.recognized
    }
}

/// A labeled group of independent-variable nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub(crate) label: String,
    pub(crate) members: Vec<String>,
}

impl Cluster {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns member node ids in input order.
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// The complete diagram model.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphIr {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) clusters: Vec<Cluster>,
    pub(crate) background: Background,
    pub(crate) direction: Direction,
    pub(crate) unknown_codes: Vec<String>,
}

impl GraphIr {
    /// Returns all nodes, dependent variable first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the distinct relationship codes that fell back to defaults,
    /// in order of first use.
    pub fn unknown_codes(&self) -> &[String] {
        &self.unknown_codes
    }

    /// Returns the dependent variable node.
    pub fn dependent(&self) -> &Node {
        &self.nodes[0]
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns true when every node has a pinned position.
    pub fn is_positioned(&self) -> bool {
        self.nodes.iter().all(|node| node.position.is_some())
    }

    /// Returns the cluster label a node belongs to, if any.
    pub fn cluster_of(&self, id: &str) -> Option<&str> {
        self.clusters
            .iter()
            .find(|cluster| cluster.members.iter().any(|member| member == id))
            .map(|cluster| cluster.label.as_str())
    }
}
