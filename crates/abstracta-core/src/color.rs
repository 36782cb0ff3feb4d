//! Color handling for Abstracta diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are accepted in any CSS syntax and always
//! written back out as uppercase `#RRGGBB` hex, which is what both Graphviz
//! and SVG consumers expect.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use abstracta_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let gray = Color::new("gray").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str.trim()) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    ///
    /// Alpha is dropped; diagram colors are always opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use abstracta_core::color::Color;
    ///
    /// let green = Color::new("#27ae60").unwrap();
    /// assert_eq!(green.to_hex(), "#27AE60");
    ///
    /// let white = Color::new("white").unwrap();
    /// assert_eq!(white.to_hex(), "#FFFFFF");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_is_uppercase() {
        let color = Color::new("#e74c3c").unwrap();
        assert_eq!(color.to_hex(), "#E74C3C");
        assert_eq!(color.to_string(), "#E74C3C");
    }

    #[test]
    fn test_named_and_functional_colors() {
        assert_eq!(Color::new("red").unwrap().to_hex(), "#FF0000");
        assert_eq!(Color::new("rgb(0, 128, 255)").unwrap().to_hex(), "#0080FF");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Color::new("  #7F8C8D ").unwrap().to_hex(), "#7F8C8D");
    }

    #[test]
    fn test_invalid_color_message() {
        let err = Color::new("#zzz").unwrap_err();
        assert!(err.contains("#zzz"));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_hex(), "#000000");
        assert_eq!(Color::default().alpha(), 1.0);
    }
}
