use std::fmt;

#[cfg(feature = "serde")]
use crate::bounds::Span;
use crate::{Bounds, Edges, Point, Rectangle};

/// An axis-aligned rectangle whose position and size can change after
/// construction.
///
/// Moving the left or top edge translates the rectangle. Changing the width
/// or height resizes it from the fixed top-left corner.
///
/// Negative dimensions are normalized at construction and on every resize:
/// negative infinity becomes zero, and any other negative value has its sign
/// flipped. This deliberately differs from [`Rectangle`], which clamps every
/// negative dimension to zero.
///
/// ```
/// use planegeom::{Bounds, MutableRectangle};
///
/// let mut r = MutableRectangle::new(20.0, 50.0, 300.0, 600.0);
/// r.set_width(200.0);
/// r.set_height(100.0);
/// assert_eq!(r.left(), 20.0);
/// assert_eq!(r.top(), 50.0);
/// assert_eq!(r.right(), 220.0);
/// assert_eq!(r.bottom(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Span", into = "Span")
)]
pub struct MutableRectangle {
    /// X coordinate of the left edge.
    left: f64,
    /// Y coordinate of the top edge.
    top: f64,
    /// Width, never negative.
    width: f64,
    /// Height, never negative.
    height: f64,
}

/// Normalize a dimension: negative infinity becomes zero, other negatives
/// are flipped positive. Negative zero becomes positive zero; NaN passes
/// through.
fn flip_dimension(v: f64, axis: &'static str) -> f64 {
    if v == f64::NEG_INFINITY {
        tracing::trace!(axis, supplied = v, "clamped infinite dimension to zero");
        0.0
    } else if v < 0.0 {
        tracing::trace!(axis, supplied = v, "flipped negative dimension");
        -v
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl MutableRectangle {
    /// Create a rectangle spanned by `(left, top)` and
    /// `(left + width, top + height)`.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width: flip_dimension(width, "width"),
            height: flip_dimension(height, "height"),
        }
    }

    /// Create the rectangle spanned by two opposite corners, given in any
    /// order.
    pub fn from_points(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self::new(left, top, a.x.max(b.x) - left, a.y.max(b.y) - top)
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// The width of the rectangle.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The height of the rectangle.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Move the left edge, keeping the width.
    pub fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    /// Move the top edge, keeping the height.
    pub fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    /// Resize horizontally. This moves the right edge but not the left.
    pub fn set_width(&mut self, width: f64) {
        self.width = flip_dimension(width, "width");
    }

    /// Resize vertically. This moves the bottom edge but not the top.
    pub fn set_height(&mut self, height: f64) {
        self.height = flip_dimension(height, "height");
    }
}

impl Bounds for MutableRectangle {
    fn edges(&self) -> Edges {
        Edges::spanning(self.left, self.top, self.width, self.height)
    }
}

impl<B: Bounds> PartialEq<B> for MutableRectangle {
    fn eq(&self, other: &B) -> bool {
        self.same_edges(other)
    }
}

impl From<Rectangle> for MutableRectangle {
    fn from(r: Rectangle) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }
}

#[cfg(feature = "serde")]
impl From<Span> for MutableRectangle {
    fn from(s: Span) -> Self {
        Self::new(s.left, s.top, s.width, s.height)
    }
}

#[cfg(feature = "serde")]
impl From<MutableRectangle> for Span {
    fn from(r: MutableRectangle) -> Self {
        Self {
            left: r.left,
            top: r.top,
            width: r.width,
            height: r.height,
        }
    }
}

impl fmt::Display for MutableRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}) {} x {}",
            self.left, self.top, self.width, self.height
        )
    }
}
