//! Abstracta CLI library
//!
//! This module contains the core CLI logic for the Abstracta diagram tool.

pub mod error_adapter;
pub mod input;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use abstracta::{AbstractaError, Diagram, DiagramBuilder};

/// Run the Abstracta CLI application
///
/// Reads the diagram description (or the built-in sample), renders it in the
/// resolved format, and writes the result to the output file. With
/// `--legend`, the code and abbreviation legend is printed to stdout.
///
/// # Errors
///
/// Returns `AbstractaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input
/// - Invalid diagrams
/// - Export errors
pub fn run(args: &Args) -> Result<(), AbstractaError> {
    let output_path = args.resolved_output();
    let format = args.resolved_format();

    info!(
        input_path:? = args.input,
        output_path,
        format:%;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let diagram = match &args.input {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            input::parse_diagram(&source)?
        }
        None => Diagram::sample(),
    };

    let builder = DiagramBuilder::new(app_config);
    let rendered = builder.render(&diagram, format)?;

    fs::write(&output_path, rendered)?;

    info!(output_file = output_path; "Diagram exported successfully");

    if args.legend {
        println!("{}", builder.legend(&diagram)?);
    }

    Ok(())
}
