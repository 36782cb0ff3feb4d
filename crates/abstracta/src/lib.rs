//! Abstracta - causal box-and-arrow diagrams for graphical abstracts.
//!
//! A [`Diagram`] names one dependent variable and the independent variables
//! pointing at it, each with a relationship code such as `POS` or `OIN`.
//! [`build`] turns it into a renderer-agnostic [`GraphIr`], which the
//! [`export`] module writes as Graphviz DOT or, for radial layouts, SVG.

pub mod config;
pub mod export;
pub mod ir;
pub mod layout;
pub mod legend;
pub mod style;

mod builder;
mod error;
mod model;
mod steps;

pub use abstracta_core::{color, draw, geometry, relationship};
pub use indexmap;

pub use builder::{DEPENDENT_FILL, build};
pub use error::{AbstractaError, ValidationError};
pub use ir::GraphIr;
pub use model::{Diagram, Edge, Variable};
pub use steps::{StepList, StepListError};
pub use style::Style;

use log::{debug, info};

use config::AppConfig;
use export::Format;
use legend::Legend;

/// Builder for rendering Abstracta diagrams with a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use abstracta::{Diagram, DiagramBuilder, config::AppConfig, export::Format};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let dot = builder
///     .render(&Diagram::sample(), Format::Dot)
///     .expect("Failed to render");
///
/// assert!(dot.starts_with("digraph G {"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the diagram model.
    ///
    /// # Errors
    ///
    /// Returns `AbstractaError::Validation` for invalid configuration or an
    /// invalid diagram.
    pub fn build(&self, diagram: &Diagram) -> Result<GraphIr, AbstractaError> {
        let style = self.config.resolve()?;
        let ir = build(diagram, &style)?;
        Ok(ir)
    }

    /// Builds the diagram and renders it in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `AbstractaError` for validation or export errors. SVG output
    /// requires the radial layout.
    pub fn render(&self, diagram: &Diagram, format: Format) -> Result<String, AbstractaError> {
        let ir = self.build(diagram)?;

        info!(format:% = format; "Rendering diagram");
        let output = format.exporter().export(&ir)?;
        debug!(bytes = output.len(); "Diagram rendered");

        Ok(output)
    }

    /// Builds the diagram and returns its legend.
    ///
    /// # Errors
    ///
    /// Returns `AbstractaError::Validation` for invalid input.
    pub fn legend(&self, diagram: &Diagram) -> Result<Legend, AbstractaError> {
        Ok(Legend::from_ir(&self.build(diagram)?))
    }
}
