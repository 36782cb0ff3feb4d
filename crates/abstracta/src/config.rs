//! Configuration types for Abstracta diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Layout mode, radial radius and flow direction.
//! - [`StyleConfig`] - Relationship colors, labels, edge width, node fill and background.
//!
//! Configuration is checked once, by [`AppConfig::resolve`], which turns it
//! into a validated [`Style`].
//!
//! # Example
//!
//! ```
//! # use abstracta::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! let style = config.resolve().unwrap();
//! assert!(style.show_labels());
//! ```

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use abstracta_core::{color::Color, relationship::Relationship};

use crate::{
    ValidationError,
    style::{Background, DEFAULT_RADIUS, Direction, LayoutMode, Palette, Style},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Validates the configuration and produces a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for unparsable colors, an edge width
    /// outside `1..=8`, or a non-positive radial radius.
    pub fn resolve(&self) -> Result<Style, ValidationError> {
        let style = Style::new(self.style.palette()?)
            .with_show_labels(self.style.show_labels)
            .with_edge_width(self.style.edge_width)?
            .with_node_fill(parse_color("node_fill", &self.style.node_fill)?)
            .with_background(self.style.background.resolve()?)
            .with_layout(self.layout.mode())?
            .with_direction(self.layout.direction.into());

        debug!(layout:? = style.layout(), edge_width = style.edge_width(); "Configuration resolved");
        Ok(style)
    }
}

/// Layout selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// The rendering engine places nodes.
    #[default]
    Hierarchical,
    /// Nodes are pinned on a circle around the dependent variable.
    Radial,
}

/// Rank direction as written in configuration files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "LR")]
    LeftRight,
}

impl From<RankDir> for Direction {
    fn from(dir: RankDir) -> Self {
        match dir {
            RankDir::TopBottom => Direction::TopBottom,
            RankDir::LeftRight => Direction::LeftRight,
        }
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    mode: LayoutKind,
    radius: f32,
    direction: RankDir,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `mode` - Hierarchical or radial placement.
    /// * `radius` - Circle radius for radial placement, in points.
    /// * `direction` - Rank direction for hierarchical placement.
    pub fn new(mode: LayoutKind, radius: f32, direction: RankDir) -> Self {
        Self {
            mode,
            radius,
            direction,
        }
    }

    /// Returns the configured [`LayoutMode`].
    pub fn mode(&self) -> LayoutMode {
        match self.mode {
            LayoutKind::Hierarchical => LayoutMode::Hierarchical,
            LayoutKind::Radial => LayoutMode::Radial {
                radius: self.radius,
            },
        }
    }

    pub fn direction(&self) -> RankDir {
        self.direction
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutKind::default(),
            radius: DEFAULT_RADIUS,
            direction: RankDir::default(),
        }
    }
}

/// Background selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    Solid,
    Gradient,
}

/// Background configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    mode: BackgroundMode,
    primary: String,
    secondary: String,
}

impl BackgroundConfig {
    pub fn new(mode: BackgroundMode, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            mode,
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    fn resolve(&self) -> Result<Background, ValidationError> {
        let primary = parse_color("background.primary", &self.primary)?;
        match self.mode {
            BackgroundMode::Solid => Ok(Background::Solid(primary)),
            BackgroundMode::Gradient => Ok(Background::Gradient {
                from: primary,
                to: parse_color("background.secondary", &self.secondary)?,
            }),
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::Solid,
            primary: "#FFFFFF".to_string(),
            secondary: "#F0F3F4".to_string(),
        }
    }
}

/// Visual styling configuration.
///
/// `colors` overrides the default color of individual relationship codes.
/// Keys that are not known codes add colors for custom codes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    colors: BTreeMap<String, String>,
    show_labels: bool,
    edge_width: f32,
    node_fill: String,
    background: BackgroundConfig,
}

impl StyleConfig {
    /// Overrides the color of one relationship code.
    pub fn with_color(mut self, code: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(code.into(), color.into());
        self
    }

    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn with_edge_width(mut self, edge_width: f32) -> Self {
        self.edge_width = edge_width;
        self
    }

    pub fn with_node_fill(mut self, node_fill: impl Into<String>) -> Self {
        self.node_fill = node_fill.into();
        self
    }

    pub fn with_background(mut self, background: BackgroundConfig) -> Self {
        self.background = background;
        self
    }

    /// Builds the [`Palette`]: default colors with configured overrides on top.
    fn palette(&self) -> Result<Palette, ValidationError> {
        let mut palette = Palette::default();
        for (code, value) in &self.colors {
            let color = parse_color(&format!("colors.{code}"), value)?;
            palette = match Relationship::parse(code) {
                Relationship::Known(known) => palette.with_color(known, color),
                Relationship::Unknown(text) => palette.with_extra(text, color),
            };
        }
        Ok(palette)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colors: BTreeMap::new(),
            show_labels: true,
            edge_width: 2.0,
            node_fill: "#FFFFFF".to_string(),
            background: BackgroundConfig::default(),
        }
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ValidationError> {
    Color::new(value).map_err(|message| ValidationError::InvalidColor {
        field: field.to_string(),
        message,
    })
}
