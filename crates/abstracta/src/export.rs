//! Exporters that turn a [`GraphIr`] into text.
//!
//! - [`dot::DotExporter`] writes Graphviz DOT for any layout.
//! - [`svg::SvgExporter`] draws positioned (radial) diagrams directly.

pub mod dot;
pub mod svg;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::ir::GraphIr;

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Formatting error: {0}")]
    Fmt(#[from] fmt::Error),

    #[error("node `{0}` has no position; SVG export needs a radial layout")]
    Unpositioned(String),
}

/// Renders a [`GraphIr`] into an output document.
pub trait Exporter {
    /// Renders the diagram model to a string.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the model cannot be expressed in this format.
    fn export(&self, ir: &GraphIr) -> Result<String, Error>;
}

/// Output format selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Dot,
    Svg,
}

impl Format {
    /// Returns the conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Svg => "svg",
        }
    }

    /// Returns the exporter for this format.
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            Self::Dot => Box::new(dot::DotExporter::new()),
            Self::Svg => Box::new(svg::SvgExporter::new()),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("unsupported format `{s}`, valid values: dot, svg")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Formats a coordinate or width with at most two decimals and no `-0`.
pub(crate) fn number(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
