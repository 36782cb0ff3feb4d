//! Relationship codes and the edge style rule.
//!
//! Every independent variable points at the dependent variable through a
//! relationship code such as `POS` or `OIN`. This module holds the fixed code
//! table (description and default color per code) and the text rule that
//! derives an [`EdgeStyle`] from a code.
//!
//! Codes that are not in the table are still accepted as
//! [`Relationship::Unknown`]. They are drawn with [`FALLBACK_COLOR`] and a
//! solid line instead of being rejected.

use std::fmt;

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::draw::EdgeStyle;

/// Color used for relationship codes missing from the code table.
pub const FALLBACK_COLOR: &str = "#7F8C8D";

/// The known relationship codes, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipCode {
    Pos,
    Neg,
    Ins,
    Op,
    On,
    Oi,
    Opn,
    Onn,
    Oin,
}

impl RelationshipCode {
    /// All known codes in table order.
    pub const ALL: [RelationshipCode; 9] = [
        Self::Pos,
        Self::Neg,
        Self::Ins,
        Self::Op,
        Self::On,
        Self::Oi,
        Self::Opn,
        Self::Onn,
        Self::Oin,
    ];

    /// Returns the short code text, e.g. `"OPN"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pos => "POS",
            Self::Neg => "NEG",
            Self::Ins => "INS",
            Self::Op => "OP",
            Self::On => "ON",
            Self::Oi => "OI",
            Self::Opn => "OPN",
            Self::Onn => "ONN",
            Self::Oin => "OIN",
        }
    }

    /// Returns the human-readable description of the code.
    pub fn description(self) -> &'static str {
        match self {
            Self::Pos => "Positive",
            Self::Neg => "Negative",
            Self::Ins => "Insignificant",
            Self::Op => "Overall Positive",
            Self::On => "Overall Negative",
            Self::Oi => "Overall Insignificant",
            Self::Opn => "Overall Positive (NL)",
            Self::Onn => "Overall Negative (NL)",
            Self::Oin => "Overall Insignificant (NL)",
        }
    }

    /// Returns the default edge color as a `#RRGGBB` string.
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Pos => "#27AE60",
            Self::Neg => "#E74C3C",
            Self::Ins => "#95A5A6",
            Self::Op => "#2ECC71",
            Self::On => "#C0392B",
            Self::Oi => "#7F8C8D",
            Self::Opn => "#16A085",
            Self::Onn => "#8E44AD",
            Self::Oin => "#34495E",
        }
    }

    /// Returns the edge style derived from the code text.
    ///
    /// See [`edge_style_for`].
    pub fn edge_style(self) -> EdgeStyle {
        edge_style_for(self.as_str())
    }

    /// Looks up a code by short form (`"opn"`) or legacy long form
    /// (`"Overall Positive (NL)"`). Matching is case-insensitive.
    pub fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(text))
            .or_else(|| {
                let code = Self::ALL
                    .into_iter()
                    .find(|code| code.description().eq_ignore_ascii_case(text))?;
                debug!(legacy = text, code = code.as_str(); "Normalized legacy relationship name");
                Some(code)
            })
    }
}

impl fmt::Display for RelationshipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the edge style from relationship code text.
///
/// Rules are checked in order, first match wins:
///
/// 1. exactly `INS` is dotted
/// 2. containing `N`, other than exactly `NEG`, is dashed
/// 3. starting with `O` is bold
/// 4. everything else is solid
///
/// # Examples
///
/// ```
/// use abstracta_core::{draw::EdgeStyle, relationship::edge_style_for};
///
/// assert_eq!(edge_style_for("INS"), EdgeStyle::Dotted);
/// assert_eq!(edge_style_for("OIN"), EdgeStyle::Dashed);
/// assert_eq!(edge_style_for("OP"), EdgeStyle::Bold);
/// assert_eq!(edge_style_for("NEG"), EdgeStyle::Solid);
/// ```
pub fn edge_style_for(code: &str) -> EdgeStyle {
    if code == "INS" {
        EdgeStyle::Dotted
    } else if code.contains('N') && code != "NEG" {
        EdgeStyle::Dashed
    } else if code.starts_with('O') {
        EdgeStyle::Bold
    } else {
        EdgeStyle::Solid
    }
}

/// A relationship as given on input: either a known code or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
    Known(RelationshipCode),
    Unknown(String),
}

impl Relationship {
    /// Parses relationship text. Never fails; unrecognized text becomes
    /// [`Relationship::Unknown`] with surrounding whitespace removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use abstracta_core::relationship::{Relationship, RelationshipCode};
    ///
    /// assert_eq!(Relationship::parse("neg"), Relationship::Known(RelationshipCode::Neg));
    /// assert_eq!(Relationship::parse("Positive"), Relationship::Known(RelationshipCode::Pos));
    /// assert_eq!(Relationship::parse(" XYZ "), Relationship::Unknown("XYZ".to_string()));
    /// ```
    pub fn parse(text: &str) -> Self {
        match RelationshipCode::lookup(text) {
            Some(code) => Self::Known(code),
            None => Self::Unknown(text.trim().to_string()),
        }
    }

    /// Returns the code text used for labels and lookups.
    pub fn code(&self) -> &str {
        match self {
            Self::Known(code) => code.as_str(),
            Self::Unknown(text) => text,
        }
    }

    /// Returns the known code, if any.
    pub fn known(&self) -> Option<RelationshipCode> {
        match self {
            Self::Known(code) => Some(*code),
            Self::Unknown(_) => None,
        }
    }

    /// Returns true if the code is in the code table.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the edge style; unknown codes are always solid.
    pub fn edge_style(&self) -> EdgeStyle {
        match self {
            Self::Known(code) => code.edge_style(),
            Self::Unknown(_) => EdgeStyle::Solid,
        }
    }
}

impl From<RelationshipCode> for Relationship {
    fn from(code: RelationshipCode) -> Self {
        Self::Known(code)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}
