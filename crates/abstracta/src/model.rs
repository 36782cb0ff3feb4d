//! The causal diagram model.
//!
//! A [`Diagram`] is one dependent variable plus an ordered list of
//! [`Edge`]s, each pointing from an independent [`Variable`] to the
//! dependent variable with a [`Relationship`]. Variables may carry a group
//! label (a region or category) used to cluster them.
//!
//! Diagrams are plain values. They are built fresh from input for every
//! render and are validated by [`crate::build`], not on construction.

use indexmap::IndexMap;

use abstracta_core::relationship::{Relationship, RelationshipCode};

use crate::{ValidationError, steps::StepList};

/// An independent variable with an optional group label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    group: Option<String>,
}

impl Variable {
    /// Creates an ungrouped variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
        }
    }

    /// Sets the group label, trimmed. A blank label leaves the variable ungrouped.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        let group = group.trim();
        self.group = if group.is_empty() {
            None
        } else {
            Some(group.to_string())
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// A relationship from an independent variable to the dependent variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    variable: Variable,
    relationship: Relationship,
}

impl Edge {
    pub fn new(variable: Variable, relationship: impl Into<Relationship>) -> Self {
        Self {
            variable,
            relationship: relationship.into(),
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn relationship(&self) -> &Relationship {
        &self.relationship
    }
}

/// A dependent variable and the relationships pointing at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    dependent: String,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates a diagram. Validation happens at build time.
    pub fn new(dependent: impl Into<String>, edges: Vec<Edge>) -> Self {
        Self {
            dependent: dependent.into(),
            edges,
        }
    }

    /// Creates a diagram from an externally owned step list.
    pub fn from_steps(dependent: impl Into<String>, steps: &StepList) -> Self {
        Self::new(dependent, steps.iter().cloned().collect())
    }

    /// Expands a per-region relationship table into one edge per
    /// (region, variable) pair.
    ///
    /// Regions are visited in table order and, within a region, variables in
    /// `independents` order. Each expanded variable is named
    /// `"<variable> (<region>)"` and grouped under its region. Variables a
    /// region has no entry for are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use abstracta::{Diagram, indexmap::IndexMap};
    /// use abstracta::relationship::{Relationship, RelationshipCode};
    ///
    /// let mut asia = IndexMap::new();
    /// asia.insert("Tourism".to_string(), Relationship::from(RelationshipCode::Pos));
    /// let mut regions = IndexMap::new();
    /// regions.insert("Asia".to_string(), asia);
    ///
    /// let diagram = Diagram::from_regions("GDP", &["Tourism".to_string()], &regions);
    /// assert_eq!(diagram.edges()[0].variable().name(), "Tourism (Asia)");
    /// assert_eq!(diagram.edges()[0].variable().group(), Some("Asia"));
    /// ```
    pub fn from_regions(
        dependent: impl Into<String>,
        independents: &[String],
        regions: &IndexMap<String, IndexMap<String, Relationship>>,
    ) -> Self {
        let edges = regions
            .iter()
            .flat_map(|(region, table)| {
                independents.iter().filter_map(move |name| {
                    let relationship = table.get(name)?;
                    let variable =
                        Variable::new(format!("{name} ({})", region.trim())).with_group(region);
                    Some(Edge::new(variable, relationship.clone()))
                })
            })
            .collect();

        Self::new(dependent, edges)
    }

    /// A regional comparison of GDP drivers across three regions.
    pub fn sample() -> Self {
        use RelationshipCode::*;

        let independents: Vec<String> = [
            "Inflation",
            "Tourism",
            "Political Stability",
            "Trade Openness",
            "Exchange Rate",
        ]
        .iter()
        .map(|name| name.to_string())
        .collect();

        let table = [
            ("Asia", [Neg, Pos, Op, Opn, Ins]),
            ("Europe", [On, Pos, Oi, Pos, Onn]),
            ("America", [Neg, Op, Ins, Oin, Pos]),
        ];

        let regions: IndexMap<String, IndexMap<String, Relationship>> = table
            .into_iter()
            .map(|(region, codes)| {
                let relationships: IndexMap<String, Relationship> = independents
                    .iter()
                    .cloned()
                    .zip(codes.into_iter().map(Relationship::from))
                    .collect();
                (region.to_string(), relationships)
            })
            .collect();

        Self::from_regions("GDP", &independents, &regions)
    }

    pub fn dependent(&self) -> &str {
        &self.dependent
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Groups variable names by their non-empty group label, in order of
    /// first appearance.
    pub fn groups(&self) -> IndexMap<&str, Vec<&str>> {
        let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for edge in &self.edges {
            if let Some(group) = edge.variable.group() {
                groups.entry(group).or_default().push(edge.variable.name());
            }
        }
        groups
    }

    /// Checks the structural invariants of the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the dependent variable is blank, there
    /// are no edges, an edge has a blank variable name, a variable appears
    /// twice, or the dependent variable also appears as an independent one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let dependent = self.dependent.trim();
        if dependent.is_empty() {
            return Err(ValidationError::EmptyDependent);
        }
        if self.edges.is_empty() {
            return Err(ValidationError::NoEdges);
        }

        let mut seen = Vec::with_capacity(self.edges.len());
        for (index, edge) in self.edges.iter().enumerate() {
            let name = edge.variable.name().trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyVariable { index });
            }
            if name == dependent {
                return Err(ValidationError::SelfLoop(name.to_string()));
            }
            if seen.contains(&name) {
                return Err(ValidationError::DuplicateVariable(name.to_string()));
            }
            seen.push(name);
        }

        Ok(())
    }
}
