//! Command-line argument definitions for the Abstracta CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use std::path::Path;

use clap::{Parser, ValueEnum};

use abstracta::export::Format;

/// Output formats selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT text
    Dot,
    /// Standalone SVG (radial layout only)
    Svg,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Dot => Format::Dot,
            OutputFormat::Svg => Format::Svg,
        }
    }
}

/// Command-line arguments for the Abstracta diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram description (TOML)
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<String>,

    /// Render the built-in regional GDP sample instead of an input file
    #[arg(long)]
    pub sample: bool,

    /// Path to the output file [default: out.dot, or out.svg with --format svg]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the relationship code and abbreviation legend to stdout
    #[arg(long)]
    pub legend: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Resolves the output format: explicit flag, then output extension, then DOT.
    pub fn resolved_format(&self) -> Format {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|output| Path::new(output).extension())
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }

    /// Resolves the output path, defaulting to `out.<extension>`.
    pub fn resolved_output(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("out.{}", self.resolved_format().extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("abstracta").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["diagram.toml"]);
        assert_eq!(args.input.as_deref(), Some("diagram.toml"));
        assert_eq!(args.resolved_format(), Format::Dot);
        assert_eq!(args.resolved_output(), "out.dot");
        assert_eq!(args.log_level, "info");
        assert!(!args.legend);
    }

    #[test]
    fn test_format_from_extension() {
        let args = parse(&["diagram.toml", "-o", "figure.svg"]);
        assert_eq!(args.resolved_format(), Format::Svg);

        let args = parse(&["diagram.toml", "-o", "figure.png"]);
        assert_eq!(args.resolved_format(), Format::Dot);
    }

    #[test]
    fn test_explicit_format_wins() {
        let args = parse(&["diagram.toml", "-o", "figure.txt", "--format", "svg"]);
        assert_eq!(args.resolved_format(), Format::Svg);

        let args = parse(&["--sample", "-f", "svg"]);
        assert_eq!(args.resolved_output(), "out.svg");
    }

    #[test]
    fn test_input_or_sample_required() {
        assert!(Args::try_parse_from(["abstracta"]).is_err());
        assert!(Args::try_parse_from(["abstracta", "in.toml", "--sample"]).is_err());
    }
}
