//! Axis-aligned 2D geometry over `f64`: points, and immutable and mutable
//! rectangles sharing a common edge algebra.
//!
//! All rectangles contain their boundaries. A rectangle with zero width and
//! height contains exactly the point at its top-left corner.

/// Shared rectangle algebra.
mod bounds;
/// Error types for geometry operations.
mod error;
/// Point and vector helpers.
mod point;
/// Immutable rectangles.
mod rect;
/// Mutable rectangles.
mod rect_mut;

pub use bounds::{Bounds, Edges};
pub use error::{Error, Result};
pub use point::Point;
pub use rect::Rectangle;
pub use rect_mut::MutableRectangle;
