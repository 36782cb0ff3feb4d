//! Translation from a [`Diagram`] and [`Style`] into a [`GraphIr`].

use log::{debug, info, trace, warn};

use abstracta_core::{
    draw::{NodeDefinition, NodeShape, StrokeDefinition},
    geometry::Point,
};

use crate::{
    Diagram, ValidationError,
    ir::{Cluster, Edge, GraphIr, Node, NodeRole},
    layout::radial,
    style::{LayoutMode, Style, hex},
};

/// Fill of the dependent variable node.
pub const DEPENDENT_FILL: &str = "#ECF0F1";

/// Font size of the dependent variable node.
pub const DEPENDENT_FONT_SIZE: f32 = 14.0;

/// Font size of independent variable nodes.
pub const INDEPENDENT_FONT_SIZE: f32 = 11.0;

/// Builds the graph representation of a diagram.
///
/// The result depends only on the arguments: equal inputs give equal output.
/// Relationship codes without a color fall back to gray and a solid line;
/// they are listed in [`GraphIr::unknown_codes`] and logged, but do not fail
/// the build.
///
/// # Errors
///
/// Returns [`ValidationError`] when the diagram breaks a structural
/// invariant (see [`Diagram::validate`]).
///
/// # Examples
///
/// ```
/// use abstracta::{Diagram, Edge, Style, Variable, build};
/// use abstracta::relationship::RelationshipCode;
///
/// let diagram = Diagram::new(
///     "GDP",
///     vec![
///         Edge::new(Variable::new("Inflation"), RelationshipCode::Neg),
///         Edge::new(Variable::new("Tourism"), RelationshipCode::Pos),
///     ],
/// );
///
/// let ir = build(&diagram, &Style::default()).unwrap();
/// assert_eq!(ir.nodes().len(), 3);
/// assert_eq!(ir.edges()[0].color().to_hex(), "#E74C3C");
/// ```
pub fn build(diagram: &Diagram, style: &Style) -> Result<GraphIr, ValidationError> {
    diagram.validate()?;

    info!(
        dependent = diagram.dependent(),
        edges = diagram.edges().len();
        "Building diagram model"
    );

    let dependent = diagram.dependent().trim().to_string();
    let mut nodes = Vec::with_capacity(diagram.edges().len() + 1);
    nodes.push(Node {
        id: dependent.clone(),
        role: NodeRole::Dependent,
        definition: NodeDefinition::new(
            NodeShape::Ellipse,
            hex(DEPENDENT_FILL),
            DEPENDENT_FONT_SIZE,
        ),
        position: None,
    });

    let independent_definition =
        NodeDefinition::new(NodeShape::Box, style.node_fill(), INDEPENDENT_FONT_SIZE);
    let mut edges = Vec::with_capacity(diagram.edges().len());
    let mut unknown_codes: Vec<String> = Vec::new();

    for edge in diagram.edges() {
        let source = edge.variable().name().trim().to_string();
        let relationship = edge.relationship();
        let resolved = style.palette().resolve(relationship);

        if !resolved.recognized && !unknown_codes.iter().any(|code| code == relationship.code()) {
            warn!(
                code = relationship.code(),
                variable = source.as_str();
                "Unknown relationship code, using fallback color and style"
            );
            unknown_codes.push(relationship.code().to_string());
        }

        nodes.push(Node {
            id: source.clone(),
            role: NodeRole::Independent,
            definition: independent_definition.clone(),
            position: None,
        });

        edges.push(Edge {
            source,
            target: dependent.clone(),
            code: relationship.code().to_string(),
            stroke: StrokeDefinition::new(resolved.color, style.edge_width(), resolved.style),
            label: if style.show_labels() {
                relationship.code().to_string()
            } else {
                String::new()
            },
            recognized: resolved.recognized,
        });
    }

    let clusters = diagram
        .groups()
        .into_iter()
        .map(|(label, members)| Cluster {
            label: label.to_string(),
            members: members.into_iter().map(|name| name.trim().to_string()).collect(),
        })
        .collect::<Vec<_>>();

    if let LayoutMode::Radial { radius } = style.layout() {
        place_radially(&mut nodes, radius);
    }

    let ir = GraphIr {
        nodes,
        edges,
        clusters,
        background: style.background().clone(),
        direction: style.direction(),
        unknown_codes,
    };

    debug!(
        nodes = ir.nodes().len(),
        clusters = ir.clusters().len(),
        unknown_codes = ir.unknown_codes().len();
        "Diagram model built"
    );
    trace!(ir:?; "Built diagram model");

    Ok(ir)
}

/// Pins the dependent node (first) at the origin and the rest on the circle.
fn place_radially(nodes: &mut [Node], radius: f32) {
    let Some((dependent, independents)) = nodes.split_first_mut() else {
        return;
    };

    dependent.position = Some(Point::default());
    let positions = radial::positions(independents.len(), radius);
    for (node, position) in independents.iter_mut().zip(positions) {
        node.position = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use abstracta_core::{
        draw::EdgeStyle,
        relationship::{Relationship, RelationshipCode},
    };
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        model::{Edge as DiagramEdge, Variable},
        style::{Background, Palette},
    };

    fn gdp_diagram() -> Diagram {
        Diagram::new(
            "GDP",
            vec![
                DiagramEdge::new(Variable::new("Inflation"), RelationshipCode::Neg),
                DiagramEdge::new(Variable::new("Tourism"), RelationshipCode::Pos),
            ],
        )
    }

    #[test]
    fn test_gdp_example() {
        let ir = build(&gdp_diagram(), &Style::default()).unwrap();

        let ids: Vec<&str> = ir.nodes().iter().map(|node| node.id()).collect();
        assert_eq!(ids, ["GDP", "Inflation", "Tourism"]);
        assert_eq!(ir.edges().len(), 2);

        let inflation = &ir.edges()[0];
        assert_eq!(inflation.source(), "Inflation");
        assert_eq!(inflation.target(), "GDP");
        assert_eq!(inflation.style(), EdgeStyle::Solid);
        assert_eq!(inflation.color().to_hex(), "#E74C3C");
        assert_eq!(inflation.label(), "NEG");
        assert_eq!(inflation.penwidth(), 2.0);

        let tourism = &ir.edges()[1];
        assert_eq!(tourism.style(), EdgeStyle::Solid);
        assert_eq!(tourism.color().to_hex(), "#27AE60");

        assert!(ir.clusters().is_empty());
        assert!(ir.unknown_codes().is_empty());
    }

    #[test]
    fn test_dependent_node_is_distinguished() {
        let ir = build(&gdp_diagram(), &Style::default()).unwrap();
        let dependent = ir.dependent();
        assert_eq!(dependent.role(), NodeRole::Dependent);
        assert_eq!(dependent.definition().shape(), NodeShape::Ellipse);
        assert_eq!(dependent.definition().fill().to_hex(), DEPENDENT_FILL);

        let independent = ir.node("Tourism").unwrap();
        assert_eq!(independent.role(), NodeRole::Independent);
        assert_eq!(independent.definition().shape(), NodeShape::Box);
        assert!(dependent.definition().font_size() > independent.definition().font_size());
    }

    #[test]
    fn test_palette_override_changes_edge_color() {
        let palette = Palette::default().with_color(RelationshipCode::Neg, hex("#000000"));
        let ir = build(&gdp_diagram(), &Style::new(palette)).unwrap();
        assert_eq!(ir.edges()[0].color().to_hex(), "#000000");
    }

    #[test]
    fn test_labels_can_be_hidden() {
        let style = Style::default().with_show_labels(false);
        let ir = build(&gdp_diagram(), &style).unwrap();
        assert!(ir.edges().iter().all(|edge| edge.label().is_empty()));
        assert_eq!(ir.edges()[0].code(), "NEG");
    }

    #[test]
    fn test_unknown_code_falls_back_without_error() {
        let diagram = Diagram::new(
            "GDP",
            vec![
                DiagramEdge::new(Variable::new("Tourism"), Relationship::parse("XYZ")),
                DiagramEdge::new(Variable::new("Trade"), Relationship::parse("XYZ")),
                DiagramEdge::new(Variable::new("Debt"), RelationshipCode::Oin),
            ],
        );
        let ir = build(&diagram, &Style::default()).unwrap();

        let edge = &ir.edges()[0];
        assert_eq!(edge.color().to_hex(), "#7F8C8D");
        assert_eq!(edge.style(), EdgeStyle::Solid);
        assert!(!edge.is_recognized());
        assert_eq!(ir.unknown_codes(), ["XYZ"]);
        assert_eq!(ir.edges()[2].style(), EdgeStyle::Dashed);
    }

    #[test]
    fn test_empty_dependent_fails() {
        let diagram = Diagram::new(
            "",
            vec![DiagramEdge::new(Variable::new("Tourism"), RelationshipCode::Pos)],
        );
        assert_eq!(
            build(&diagram, &Style::default()),
            Err(ValidationError::EmptyDependent)
        );
    }

    #[test]
    fn test_empty_variable_fails() {
        let diagram = Diagram::new(
            "GDP",
            vec![DiagramEdge::new(Variable::new(" "), RelationshipCode::Pos)],
        );
        assert_eq!(
            build(&diagram, &Style::default()),
            Err(ValidationError::EmptyVariable { index: 0 })
        );
    }

    #[test]
    fn test_grouped_variables_form_clusters() {
        let diagram = Diagram::new(
            "GDP",
            vec![
                DiagramEdge::new(Variable::new("A").with_group("Asia"), RelationshipCode::Pos),
                DiagramEdge::new(Variable::new("B"), RelationshipCode::Neg),
                DiagramEdge::new(Variable::new("C").with_group("Asia"), RelationshipCode::Ins),
                DiagramEdge::new(Variable::new("D").with_group("Europe"), RelationshipCode::Op),
            ],
        );
        let ir = build(&diagram, &Style::default()).unwrap();

        assert_eq!(ir.clusters().len(), 2);
        assert_eq!(ir.clusters()[0].label(), "Asia");
        assert_eq!(ir.clusters()[0].members(), ["A", "C"]);
        assert_eq!(ir.cluster_of("D"), Some("Europe"));
        assert_eq!(ir.cluster_of("B"), None);
        assert_eq!(ir.cluster_of("GDP"), None);
    }

    #[test]
    fn test_hierarchical_layout_has_no_positions() {
        let ir = build(&gdp_diagram(), &Style::default()).unwrap();
        assert!(ir.nodes().iter().all(|node| node.position().is_none()));
        assert!(!ir.is_positioned());
    }

    #[test]
    fn test_radial_layout_positions() {
        let style = Style::default()
            .with_layout(LayoutMode::Radial { radius: 100.0 })
            .unwrap();
        let ir = build(&Diagram::sample(), &style).unwrap();

        assert!(ir.is_positioned());
        assert_eq!(ir.dependent().position(), Some(Point::default()));
        for node in &ir.nodes()[1..] {
            let position = node.position().unwrap();
            assert_approx_eq!(f32, position.hypot(), 100.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_background_is_carried_over() {
        let background = Background::Gradient {
            from: hex("#FFFFFF"),
            to: hex("#F0F3F4"),
        };
        let style = Style::default().with_background(background.clone());
        let ir = build(&gdp_diagram(), &style).unwrap();
        assert_eq!(ir.background(), &background);
    }
}

#[cfg(test)]
mod proptest_tests {
    use abstracta_core::relationship::{Relationship, RelationshipCode};
    use proptest::prelude::*;

    use super::*;
    use crate::model::{Edge as DiagramEdge, Variable};

    fn arb_diagram() -> impl Strategy<Value = Diagram> {
        let code = prop_oneof![
            proptest::sample::select(RelationshipCode::ALL.to_vec()).prop_map(Relationship::from),
            "[A-Z]{1,3}".prop_map(|text| Relationship::parse(&text)),
        ];
        let group = prop_oneof![Just(String::new()), "(Asia|Europe|America)".prop_map(String::from)];
        proptest::collection::vec((code, group), 1..12).prop_map(|entries| {
            let edges = entries
                .into_iter()
                .enumerate()
                .map(|(index, (code, group))| {
                    DiagramEdge::new(Variable::new(format!("V{index}")).with_group(group), code)
                })
                .collect();
            Diagram::new("Outcome", edges)
        })
    }

    proptest! {
        #[test]
        fn build_is_deterministic(diagram in arb_diagram()) {
            let style = Style::default();
            prop_assert_eq!(build(&diagram, &style), build(&diagram, &style));
        }

        #[test]
        fn grouped_variables_appear_in_exactly_one_cluster(diagram in arb_diagram()) {
            let ir = build(&diagram, &Style::default()).unwrap();
            for edge in diagram.edges() {
                let name = edge.variable().name();
                let count = ir
                    .clusters()
                    .iter()
                    .filter(|cluster| cluster.members().iter().any(|member| member == name))
                    .count();
                let expected = usize::from(edge.variable().group().is_some());
                prop_assert_eq!(count, expected);
            }
        }

        #[test]
        fn one_node_per_variable_plus_dependent(diagram in arb_diagram()) {
            let ir = build(&diagram, &Style::default()).unwrap();
            prop_assert_eq!(ir.nodes().len(), diagram.edges().len() + 1);
            prop_assert_eq!(ir.edges().len(), diagram.edges().len());
        }
    }
}
