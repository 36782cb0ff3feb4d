//! Radial placement around the dependent variable.
//!
//! The dependent variable sits at the origin. Independent variable `i` of
//! `n` sits at angle `2π·i/n` on a circle of the given radius, starting on
//! the positive X-axis and turning clockwise on screen (Y grows downward).

use std::f32::consts::TAU;

use abstracta_core::geometry::Point;

/// Returns the angle, in radians, of each of `count` evenly spaced slots.
pub fn angles(count: usize) -> Vec<f32> {
    (0..count)
        .map(|index| TAU * index as f32 / count as f32)
        .collect()
}

/// Returns `count` points evenly spread on a circle of `radius` around the origin.
///
/// # Examples
///
/// ```
/// use abstracta::layout::radial;
///
/// let points = radial::positions(4, 100.0);
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[0].x(), 100.0);
/// assert!((points[2].x() + 100.0).abs() < 1e-3);
/// ```
pub fn positions(count: usize, radius: f32) -> Vec<Point> {
    angles(count)
        .into_iter()
        .map(|angle| Point::from_polar(radius, angle))
        .collect()
}
