//! Pure geometric layouts.
//!
//! Rendering engines are handed coordinates from here, not asked to lay the
//! graph out themselves.

pub mod radial;
