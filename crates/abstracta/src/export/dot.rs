//! Graphviz DOT output.
//!
//! The document is laid out as:
//!
//! ```text
//! digraph G {
//!   <graph settings, node and edge defaults, background>
//!   "<dependent>" [...];
//!   subgraph cluster_<i> { <caption>; "<member>" [...]; ... }
//!   "<ungrouped independent>" [...];
//!   "<source>" -> "<dependent>" [...];
//! }
//! ```
//!
//! Radial layouts switch the engine to `neato` and pin every node with
//! `pos="x,y!"` in points. Graphviz's Y-axis grows upward, so Y is negated
//! to keep the picture the same way up as the SVG output.

use std::fmt::Write;

use log::debug;

use abstracta_core::draw::{NodeDefinition, NodeShape};

use crate::{
    builder::INDEPENDENT_FONT_SIZE,
    ir::{GraphIr, Node},
    style::{Background, GRADIENT_ANGLE, hex},
};

use super::{Error, Exporter, number};

const FONT_NAME: &str = "Helvetica";
const EDGE_FONT_SIZE: u32 = 9;
const CLUSTER_FONT_SIZE: u32 = 10;

/// Writes a [`GraphIr`] as a Graphviz `digraph`.
///
/// # Examples
///
/// ```
/// use abstracta::{Diagram, Edge, Style, Variable, build};
/// use abstracta::export::{Exporter, dot::DotExporter};
/// use abstracta::relationship::RelationshipCode;
///
/// let diagram = Diagram::new(
///     "GDP",
///     vec![Edge::new(Variable::new("Tourism"), RelationshipCode::Pos)],
/// );
/// let ir = build(&diagram, &Style::default()).unwrap();
/// let dot = DotExporter::new().export(&ir).unwrap();
///
/// assert!(dot.starts_with("digraph G {"));
/// assert!(dot.contains(r#""Tourism" -> "GDP""#));
/// ```
#[derive(Debug, Default, Clone)]
pub struct DotExporter {
    graph_name: Option<String>,
}

impl DotExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the graph name written after `digraph`. Defaults to `G`.
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    fn write_header(&self, out: &mut String, ir: &GraphIr) -> Result<(), Error> {
        let name = self.graph_name.as_deref().unwrap_or("G");
        writeln!(out, "digraph {} {{", quote_id(name))?;

        if ir.is_positioned() {
            writeln!(out, "  layout=neato;")?;
            writeln!(out, "  inputscale=72;")?;
        } else {
            writeln!(out, "  rankdir={};", ir.direction().as_rankdir())?;
        }
        writeln!(out, "  splines=curved;")?;
        let defaults = Self::node_defaults(ir);
        writeln!(
            out,
            "  node [shape={}, style=filled, fillcolor={}, fontname={}, fontsize={}];",
            defaults.shape().as_str(),
            quote(&defaults.fill().to_hex()),
            quote(FONT_NAME),
            number(defaults.font_size())
        )?;
        writeln!(
            out,
            "  edge [fontname={}, fontsize={EDGE_FONT_SIZE}];",
            quote(FONT_NAME)
        )?;

        match ir.background() {
            Background::Solid(color) => writeln!(
                out,
                "  graph [style=filled, fillcolor={}, nodesep=0.6];",
                quote(&color.to_hex())
            )?,
            Background::Gradient { from, to } => writeln!(
                out,
                "  graph [style=filled, fillcolor={}, gradientangle={GRADIENT_ANGLE}, nodesep=0.6];",
                quote(&format!("{}:{}", from.to_hex(), to.to_hex()))
            )?,
        }

        Ok(())
    }

    /// Independent nodes share one definition, which becomes the node default.
    fn node_defaults(ir: &GraphIr) -> NodeDefinition {
        ir.nodes()
            .get(1)
            .map(|node| node.definition().clone())
            .unwrap_or_else(|| {
                NodeDefinition::new(NodeShape::Box, hex("#FFFFFF"), INDEPENDENT_FONT_SIZE)
            })
    }

    /// Writes a node statement with only the attributes that differ from
    /// `defaults`, plus its pinned position.
    fn write_node(
        out: &mut String,
        indent: &str,
        node: &Node,
        defaults: &NodeDefinition,
    ) -> Result<(), Error> {
        let definition = node.definition();
        let mut attributes = Vec::new();
        if definition.shape() != defaults.shape() {
            attributes.push(format!("shape={}", definition.shape().as_str()));
        }
        if definition.fill() != defaults.fill() {
            attributes.push(format!("fillcolor={}", quote(&definition.fill().to_hex())));
        }
        if definition.font_size() != defaults.font_size() {
            attributes.push(format!("fontsize={}", number(definition.font_size())));
        }
        if let Some(position) = node.position() {
            attributes.push(format!(
                "pos={}",
                quote(&format!(
                    "{},{}!",
                    number(position.x()),
                    number(-position.y())
                ))
            ));
        }

        if attributes.is_empty() {
            writeln!(out, "{indent}{};", quote(node.id()))?;
        } else {
            writeln!(out, "{indent}{} [{}];", quote(node.id()), attributes.join(", "))?;
        }
        Ok(())
    }
}

impl Exporter for DotExporter {
    fn export(&self, ir: &GraphIr) -> Result<String, Error> {
        let mut out = String::new();
        self.write_header(&mut out, ir)?;

        let defaults = Self::node_defaults(ir);
        Self::write_node(&mut out, "  ", ir.dependent(), &defaults)?;

        for (index, cluster) in ir.clusters().iter().enumerate() {
            writeln!(out, "  subgraph cluster_{index} {{")?;
            writeln!(
                out,
                "    label={}; style=dashed; color=gray; fontsize={CLUSTER_FONT_SIZE};",
                quote(cluster.label())
            )?;
            for member in cluster.members() {
                if let Some(node) = ir.node(member) {
                    Self::write_node(&mut out, "    ", node, &defaults)?;
                }
            }
            writeln!(out, "  }}")?;
        }

        for node in &ir.nodes()[1..] {
            if ir.cluster_of(node.id()).is_none() {
                Self::write_node(&mut out, "  ", node, &defaults)?;
            }
        }

        for edge in ir.edges() {
            writeln!(
                out,
                "  {} -> {} [color={}, penwidth={}, style={}, label={}];",
                quote(edge.source()),
                quote(edge.target()),
                quote(&edge.color().to_hex()),
                number(edge.penwidth()),
                edge.style().as_str(),
                quote(edge.label())
            )?;
        }

        writeln!(out, "}}")?;

        debug!(bytes = out.len(); "DOT document written");
        Ok(out)
    }
}

/// Quotes a DOT string, escaping backslashes, quotes and newlines.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Leaves plain identifiers bare and quotes everything else.
fn quote_id(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare { name.to_string() } else { quote(name) }
}

#[cfg(test)]
mod tests {
    use abstracta_core::relationship::{Relationship, RelationshipCode};

    use super::*;
    use crate::{
        Diagram, Edge, Style, Variable, build,
        style::{LayoutMode, hex},
    };

    fn gdp_ir(style: &Style) -> GraphIr {
        let diagram = Diagram::new(
            "GDP",
            vec![
                Edge::new(Variable::new("Inflation").with_group("Asia"), RelationshipCode::Neg),
                Edge::new(Variable::new("Tourism"), RelationshipCode::Oin),
            ],
        );
        build(&diagram, style).unwrap()
    }

    #[test]
    fn test_full_document() {
        let dot = DotExporter::new().export(&gdp_ir(&Style::default())).unwrap();
        let expected = r##"digraph G {
  rankdir=TB;
  splines=curved;
  node [shape=box, style=filled, fillcolor="#FFFFFF", fontname="Helvetica", fontsize=11];
  edge [fontname="Helvetica", fontsize=9];
  graph [style=filled, fillcolor="#FFFFFF", nodesep=0.6];
  "GDP" [shape=ellipse, fillcolor="#ECF0F1", fontsize=14];
  subgraph cluster_0 {
    label="Asia"; style=dashed; color=gray; fontsize=10;
    "Inflation";
  }
  "Tourism";
  "Inflation" -> "GDP" [color="#E74C3C", penwidth=2, style=solid, label="NEG"];
  "Tourism" -> "GDP" [color="#34495E", penwidth=2, style=dashed, label="OIN"];
}
"##;
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_gradient_background() {
        let style = Style::default().with_background(Background::Gradient {
            from: hex("#FFFFFF"),
            to: hex("#F0F3F4"),
        });
        let dot = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert!(dot.contains(
            r##"graph [style=filled, fillcolor="#FFFFFF:#F0F3F4", gradientangle=270, nodesep=0.6];"##
        ));
    }

    #[test]
    fn test_radial_pins_positions() {
        let style = Style::default()
            .with_layout(LayoutMode::Radial { radius: 100.0 })
            .unwrap();
        let dot = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert!(dot.contains("layout=neato;"));
        assert!(!dot.contains("rankdir"));
        assert!(dot.contains(r#"pos="0,0!""#));
        assert!(dot.contains(r#"pos="100,0!""#));
        assert!(dot.contains(r#"pos="-100,0!""#));
    }

    #[test]
    fn test_node_defaults_follow_configured_fill() {
        let style = Style::default().with_node_fill(hex("#FDEBD0"));
        let dot = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert!(dot.contains(
            r##"node [shape=box, style=filled, fillcolor="#FDEBD0", fontname="Helvetica", fontsize=11];"##
        ));
        assert!(dot.contains("  \"Tourism\";\n"));
        assert!(dot.contains(r##""GDP" [shape=ellipse, fillcolor="#ECF0F1", fontsize=14];"##));
    }

    #[test]
    fn test_radial_nodes_carry_only_position() {
        let style = Style::default()
            .with_layout(LayoutMode::Radial { radius: 100.0 })
            .unwrap();
        let dot = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert!(dot.contains(r#""Inflation" [pos="100,0!"];"#));
    }

    #[test]
    fn test_hidden_labels_are_empty() {
        let style = Style::default().with_show_labels(false);
        let dot = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert!(dot.contains(r#"style=solid, label=""]"#));
    }

    #[test]
    fn test_identifiers_are_escaped() {
        let diagram = Diagram::new(
            r#"Say "hi""#,
            vec![Edge::new(Variable::new(r"a\b"), Relationship::parse("POS"))],
        );
        let ir = build(&diagram, &Style::default()).unwrap();
        let dot = DotExporter::new().export(&ir).unwrap();
        assert!(dot.contains(r#""a\\b" -> "Say \"hi\"""#));
    }

    #[test]
    fn test_graph_name() {
        let dot = DotExporter::new()
            .with_graph_name("causal map")
            .export(&gdp_ir(&Style::default()))
            .unwrap();
        assert!(dot.starts_with("digraph \"causal map\" {"));
    }

    #[test]
    fn test_output_is_byte_identical() {
        let style = Style::default();
        let first = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        let second = DotExporter::new().export(&gdp_ir(&style)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), r#""plain""#);
        assert_eq!(quote("two\nlines"), r#""two\nlines""#);
        assert_eq!(quote_id("G"), "G");
        assert_eq!(quote_id("1abc"), r#""1abc""#);
    }
}
