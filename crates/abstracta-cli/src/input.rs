//! Diagram description files.
//!
//! Two TOML layouts are accepted. The edge form lists relationships one by
//! one:
//!
//! ```toml
//! dependent = "GDP"
//!
//! [[edges]]
//! variable = "Tourism"
//! code = "POS"
//! group = "Asia"
//! ```
//!
//! The regional form gives a relationship table per region and expands to
//! one edge per (region, variable) pair:
//!
//! ```toml
//! dependent = "GDP"
//! independent = ["Tourism", "Exports"]
//!
//! [regions.Asia]
//! Tourism = "POS"
//! Exports = "OP"
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use toml::Spanned;

use abstracta::{AbstractaError, Diagram, Edge, Variable, relationship::Relationship};

type RegionTable = IndexMap<String, IndexMap<String, Relationship>>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiagramFile {
    dependent: String,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
    #[serde(default)]
    independent: Vec<String>,
    regions: Option<Spanned<RegionTable>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    variable: String,
    code: Relationship,
    #[serde(default)]
    group: String,
}

/// Parses a diagram description.
///
/// When the regional form omits `independent`, variables are taken in the
/// order they first appear across the region tables.
///
/// # Errors
///
/// Returns `AbstractaError::Input` for malformed TOML, unknown keys, or a
/// file that mixes `edges` with `regions`.
pub fn parse_diagram(source: &str) -> Result<Diagram, AbstractaError> {
    let file: DiagramFile = toml::from_str(source).map_err(|err| {
        AbstractaError::new_input_error(err.message(), err.span(), source)
    })?;

    let Some(regions) = file.regions else {
        debug!(edges = file.edges.len(); "Parsed edge-form diagram");
        let edges = file
            .edges
            .into_iter()
            .map(|entry| Edge::new(Variable::new(entry.variable).with_group(entry.group), entry.code))
            .collect();
        return Ok(Diagram::new(file.dependent, edges));
    };

    if !file.edges.is_empty() {
        return Err(AbstractaError::new_input_error(
            "`edges` and `regions` cannot be combined in one diagram",
            Some(regions.span()),
            source,
        ));
    }

    let span = regions.span();
    let regions = regions.into_inner();
    let independent = if file.independent.is_empty() {
        let mut names: Vec<String> = Vec::new();
        for name in regions.values().flat_map(IndexMap::keys) {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    } else {
        file.independent
    };

    for (region, table) in &regions {
        if let Some(name) = table.keys().find(|name| !independent.contains(name)) {
            return Err(AbstractaError::new_input_error(
                format!("region `{region}` refers to `{name}`, which is not listed in `independent`"),
                Some(span),
                source,
            ));
        }
    }

    debug!(regions = regions.len(), variables = independent.len(); "Parsed regional diagram");
    Ok(Diagram::from_regions(file.dependent, &independent, &regions))
}

#[cfg(test)]
mod tests {
    use abstracta::relationship::RelationshipCode;

    use super::*;

    #[test]
    fn test_edge_form() {
        let diagram = parse_diagram(
            r#"
dependent = "GDP"

[[edges]]
variable = "Tourism"
code = "pos"
group = "Asia"

[[edges]]
variable = "Exports"
code = "overall negative"
"#,
        )
        .unwrap();

        assert_eq!(diagram.dependent(), "GDP");
        assert_eq!(diagram.edges().len(), 2);
        assert_eq!(diagram.edges()[0].variable().group(), Some("Asia"));
        assert_eq!(
            diagram.edges()[0].relationship().known(),
            Some(RelationshipCode::Pos)
        );
        assert_eq!(diagram.edges()[1].variable().group(), None);
        assert_eq!(
            diagram.edges()[1].relationship().known(),
            Some(RelationshipCode::On)
        );
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let diagram = parse_diagram(
            r#"
dependent = "Y"
[[edges]]
variable = "X"
code = "ZZZ"
"#,
        )
        .unwrap();

        let relationship = diagram.edges()[0].relationship();
        assert!(!relationship.is_known());
        assert_eq!(relationship.code(), "ZZZ");
    }

    #[test]
    fn test_regional_form() {
        let diagram = parse_diagram(
            r#"
dependent = "GDP"
independent = ["Tourism", "Exports"]

[regions.Asia]
Exports = "OP"
Tourism = "POS"

[regions.Europe]
Tourism = "NEG"
"#,
        )
        .unwrap();

        let names: Vec<_> = diagram.edges().iter().map(|e| e.variable().name()).collect();
        assert_eq!(names, ["Tourism (Asia)", "Exports (Asia)", "Tourism (Europe)"]);
        assert_eq!(diagram.groups().len(), 2);
    }

    #[test]
    fn test_regional_form_infers_independent_order() {
        let diagram = parse_diagram(
            r#"
dependent = "GDP"

[regions.Asia]
Tourism = "POS"

[regions.Europe]
Exports = "NEG"
Tourism = "NEG"
"#,
        )
        .unwrap();

        let names: Vec<_> = diagram.edges().iter().map(|e| e.variable().name()).collect();
        assert_eq!(names, ["Tourism (Asia)", "Tourism (Europe)", "Exports (Europe)"]);
    }

    #[test]
    fn test_regional_form_unlisted_variable() {
        let err = parse_diagram(
            r#"
dependent = "GDP"
independent = ["Tourism"]

[regions.Asia]
Mining = "POS"
"#,
        )
        .unwrap_err();

        match err {
            AbstractaError::Input { message, span, .. } => {
                assert!(message.contains("Mining"));
                assert!(span.is_some());
            }
            other => panic!("Expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_forms_rejected() {
        let err = parse_diagram(
            r#"
dependent = "GDP"

[[edges]]
variable = "Tourism"
code = "POS"

[regions.Asia]
Tourism = "POS"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let source = "dependent = \"GDP\"\n[[edges]\n";
        let err = parse_diagram(source).unwrap_err();

        match err {
            AbstractaError::Input { span, src, .. } => {
                assert!(span.is_some());
                assert_eq!(src, source);
            }
            other => panic!("Expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_diagram("dependent = \"GDP\"\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, AbstractaError::Input { .. }));
    }
}
