//! Abstracta Core Types and Definitions
//!
//! This crate provides the foundational types for Abstracta causal diagrams.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color parsing and hex output ([`color::Color`])
//! - **Geometry**: Points and bounds used by positioned layouts ([`geometry`] module)
//! - **Relationships**: The relationship code table and edge style rule ([`relationship`] module)
//! - **Draw**: Visual hints for nodes and strokes ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod relationship;
