//! Integration tests for the public builder API.

use abstracta::{
    AbstractaError, Diagram, DiagramBuilder, Edge, StepList, Style, ValidationError, Variable,
    build,
    config::{AppConfig, LayoutConfig, LayoutKind, RankDir, StyleConfig},
    draw::EdgeStyle,
    export::{Error as ExportError, Format},
    relationship::{Relationship, RelationshipCode},
};

fn radial_builder() -> DiagramBuilder {
    DiagramBuilder::new(AppConfig::new(
        LayoutConfig::new(LayoutKind::Radial, 180.0, RankDir::TopBottom),
        StyleConfig::default(),
    ))
}

#[test]
fn test_builder_default_renders_sample_as_dot() {
    let dot = DiagramBuilder::default()
        .render(&Diagram::sample(), Format::Dot)
        .expect("Failed to render sample");

    assert!(dot.starts_with("digraph G {"));
    assert!(dot.trim_end().ends_with('}'));
    assert_eq!(dot.matches("subgraph cluster_").count(), 3);
    assert_eq!(dot.matches(" -> ").count(), 15);
}

#[test]
fn test_render_svg_requires_radial_layout() {
    let result = DiagramBuilder::default().render(&Diagram::sample(), Format::Svg);
    assert!(
        matches!(result, Err(AbstractaError::Export(ExportError::Unpositioned(_)))),
        "hierarchical layout should not render to SVG: {result:?}"
    );

    let svg = radial_builder()
        .render(&Diagram::sample(), Format::Svg)
        .expect("Failed to render radial SVG");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
}

#[test]
fn test_invalid_config_is_reported() {
    let builder = DiagramBuilder::new(AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::default().with_color("POS", "definitely not a color"),
    ));
    let result = builder.build(&Diagram::sample());
    assert!(matches!(
        result,
        Err(AbstractaError::Validation(ValidationError::InvalidColor { .. }))
    ));
}

#[test]
fn test_step_list_drives_diagram() {
    let steps = StepList::new()
        .with_step(Edge::new(Variable::new("Inflation"), RelationshipCode::Neg))
        .with_step(Edge::new(Variable::new("Tourism"), RelationshipCode::Pos))
        .with_step(Edge::new(Variable::new("Stability"), RelationshipCode::Op));

    let edited = steps
        .without_step(0)
        .and_then(|steps| steps.with_step_moved(1, 0))
        .expect("valid edits");

    let ir = build(&Diagram::from_steps("GDP", &edited), &Style::default()).unwrap();
    let sources: Vec<&str> = ir.edges().iter().map(|edge| edge.source()).collect();
    assert_eq!(sources, ["Stability", "Tourism"]);
    assert_eq!(ir.edges()[0].style(), EdgeStyle::Bold);

    // The original list is unchanged.
    assert_eq!(steps.len(), 3);
}

#[test]
fn test_unknown_codes_never_block_rendering() {
    let diagram = Diagram::new(
        "Yield",
        vec![
            Edge::new(Variable::new("Rainfall"), Relationship::parse("POS")),
            Edge::new(Variable::new("Pests"), Relationship::parse("NEGATIVE-ISH")),
        ],
    );
    let builder = DiagramBuilder::default();

    let ir = builder.build(&diagram).expect("unknown codes are accepted");
    assert_eq!(ir.unknown_codes(), ["NEGATIVE-ISH"]);

    let dot = builder.render(&diagram, Format::Dot).unwrap();
    assert!(dot.contains(r##""Pests" -> "Yield" [color="#7F8C8D", penwidth=2, style=solid"##));
}

#[test]
fn test_legend_for_sample() {
    let legend = DiagramBuilder::default()
        .legend(&Diagram::sample())
        .expect("Failed to build legend");
    assert_eq!(legend.abbreviations()[0].0, "GDP");
    assert!(legend.codes().iter().any(|entry| entry.code() == "OIN"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let first = builder.render(&Diagram::sample(), Format::Dot).unwrap();
    let second = builder.render(&Diagram::sample(), Format::Dot).unwrap();
    assert_eq!(first, second);
}
