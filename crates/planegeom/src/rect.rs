use std::fmt;

#[cfg(feature = "serde")]
use crate::bounds::Span;
use crate::{Bounds, Edges, MutableRectangle, Point};

/// An axis-aligned rectangle whose position and size are fixed at
/// construction.
///
/// The rectangle contains the points with x between `left` and
/// `left + width`, and y between `top` and `top + height`, both inclusive. A
/// rectangle with zero width and height contains only `(left, top)`.
///
/// Negative dimensions are clamped to zero. Note that [`MutableRectangle`]
/// normalizes finite negative dimensions differently.
///
/// ```
/// use planegeom::{Bounds, Rectangle};
///
/// let r = Rectangle::new(20.0, 50.0, 300.0, 600.0);
/// assert_eq!(r.left(), 20.0);
/// assert_eq!(r.top(), 50.0);
/// assert_eq!(r.right(), 320.0);
/// assert_eq!(r.bottom(), 650.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Span", into = "Span")
)]
pub struct Rectangle {
    /// X coordinate of the left edge.
    left: f64,
    /// Y coordinate of the top edge.
    top: f64,
    /// Width, never negative.
    width: f64,
    /// Height, never negative.
    height: f64,
}

/// Clamp a negative dimension to zero. Negative zero becomes positive zero;
/// NaN passes through.
fn clamp_dimension(v: f64, axis: &'static str) -> f64 {
    if v < 0.0 {
        tracing::trace!(axis, supplied = v, "clamped negative dimension to zero");
        0.0
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl Rectangle {
    /// Create a rectangle spanned by `(left, top)` and
    /// `(left + width, top + height)`.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width: clamp_dimension(width, "width"),
            height: clamp_dimension(height, "height"),
        }
    }

    /// Create the rectangle spanned by two opposite corners, given in any
    /// order.
    ///
    /// If the distance between `a.x` and `b.x` is not representable, the
    /// right edge may be slightly off from `max(a.x, b.x)`. Similarly for the
    /// bottom edge.
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
}

impl Bounds for Rectangle {
    fn edges(&self) -> Edges {
        Edges::spanning(self.left, self.top, self.width, self.height)
    }
}

impl<B: Bounds> PartialEq<B> for Rectangle {
    fn eq(&self, other: &B) -> bool {
        self.same_edges(other)
    }
}

impl From<Edges> for Rectangle {
    fn from(e: Edges) -> Self {
        Self::new(e.left, e.top, e.right - e.left, e.bottom - e.top)
    }
}

impl From<MutableRectangle> for Rectangle {
    fn from(r: MutableRectangle) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }
}

#[cfg(feature = "serde")]
impl From<Span> for Rectangle {
    fn from(s: Span) -> Self {
        Self::new(s.left, s.top, s.width, s.height)
    }
}

#[cfg(feature = "serde")]
impl From<Rectangle> for Span {
    fn from(r: Rectangle) -> Self {
        Self {
            left: r.left,
            top: r.top,
            width: r.width,
            height: r.height,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}) {} x {}",
            self.left, self.top, self.width, self.height
        )
    }
}
