//! Legend text for a built diagram.
//!
//! Lists the relationship codes a diagram uses with their descriptions, and
//! a three-letter abbreviation for every variable. Rendered as Markdown by
//! the [`Display`](std::fmt::Display) implementation.

use std::fmt;

use abstracta_core::{color::Color, relationship::RelationshipCode};

use crate::ir::GraphIr;

/// One relationship code entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeEntry {
    code: String,
    description: String,
    color: Color,
}

impl CodeEntry {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Relationship codes and variable abbreviations of one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    codes: Vec<CodeEntry>,
    abbreviations: Vec<(String, String)>,
}

impl Legend {
    /// Collects the legend of a built diagram.
    ///
    /// Codes are listed once each, in order of first use. Abbreviations
    /// follow node order, dependent variable first, with one entry per
    /// variable: regional nodes such as `Tourism (Asia)` are listed under
    /// their base name `Tourism`.
    pub fn from_ir(ir: &GraphIr) -> Self {
        let mut codes: Vec<CodeEntry> = Vec::new();
        for edge in ir.edges() {
            if codes.iter().any(|entry| entry.code == edge.code()) {
                continue;
            }
            let description = RelationshipCode::lookup(edge.code())
                .map(|code| code.description().to_string())
                .unwrap_or_else(|| "Unrecognized code".to_string());
            codes.push(CodeEntry {
                code: edge.code().to_string(),
                description,
                color: edge.color(),
            });
        }

        let mut abbreviations: Vec<(String, String)> = Vec::new();
        for node in ir.nodes() {
            let name = base_name(ir, node.id());
            if abbreviations.iter().all(|(_, seen)| seen != name) {
                abbreviations.push((abbreviate(name), name.to_string()));
            }
        }

        Self {
            codes,
            abbreviations,
        }
    }

    pub fn codes(&self) -> &[CodeEntry] {
        &self.codes
    }

    /// Returns `(abbreviation, name)` pairs.
    pub fn abbreviations(&self) -> &[(String, String)] {
        &self.abbreviations
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes = self
            .codes
            .iter()
            .map(|entry| format!("**{}** = {}", entry.code, entry.description))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "**Relationship Codes:** {codes}")?;
        writeln!(f)?;

        let abbreviations = self
            .abbreviations
            .iter()
            .map(|(short, name)| format!("**{short}** = {name}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "**Variable Abbreviations:** {abbreviations}")
    }
}

/// Drops the ` (<group>)` suffix that regional expansion adds to node ids.
fn base_name<'a>(ir: &GraphIr, id: &'a str) -> &'a str {
    ir.cluster_of(id)
        .and_then(|group| {
            id.strip_suffix(')')?
                .strip_suffix(group)?
                .strip_suffix(" (")
        })
        .unwrap_or(id)
}

/// First three characters, uppercased.
fn abbreviate(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}
