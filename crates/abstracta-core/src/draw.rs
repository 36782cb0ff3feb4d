//! Visual definitions shared by the diagram model and its exporters.
//!
//! - [`EdgeStyle`] and [`StrokeDefinition`] describe how relationship edges are stroked.
//! - [`NodeShape`] and [`NodeDefinition`] describe how variables are drawn.

mod shape;
mod stroke;

pub use shape::{NodeDefinition, NodeShape};
pub use stroke::{EdgeStyle, StrokeDefinition};
