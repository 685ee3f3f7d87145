use crate::{Point, Rectangle};

/// The four edges of an axis-aligned rectangle. This is the common currency
/// of the rectangle algebra: both rectangle types reduce themselves to
/// `Edges`, and every query below is a pure function over two of them.
///
/// All bounds are inclusive. Nothing here special-cases zero-sized or
/// infinite rectangles; they fall out of the comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// X coordinate of the left edge.
    pub left: f64,
    /// Y coordinate of the top edge.
    pub top: f64,
    /// X coordinate of the right edge.
    pub right: f64,
    /// Y coordinate of the bottom edge.
    pub bottom: f64,
}

impl Edges {
    /// Construct from explicit edge coordinates.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Construct from an origin and dimensions.
    pub fn spanning(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Is the point inside or along the edges?
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Does `other` lie completely within these edges?
    pub fn contains(&self, other: &Self) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// Do the projections overlap on both axes? Touching edges count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// The overlapping region, if any. A shared edge or corner yields a
    /// zero-sized result rather than `None`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x0 = self.left.max(other.left);
        let x1 = self.right.min(other.right);
        let y0 = self.top.max(other.top);
        let y1 = self.bottom.min(other.bottom);
        if x0 <= x1 && y0 <= y1 {
            Some(Self::new(x0, y0, x1, y1))
        } else {
            None
        }
    }

    /// The smallest edges enclosing both `self` and `other`.
    pub fn enclose(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Queries shared by every axis-aligned rectangle. Implementors supply their
/// edges; the rest is derived, recomputed on each call.
///
/// Binary operations accept any other implementor, so the immutable and
/// mutable rectangle types mix freely.
pub trait Bounds {
    /// The current edges of this rectangle.
    fn edges(&self) -> Edges;

    /// The x coordinate of the right edge.
    fn right(&self) -> f64 {
        self.edges().right
    }

    /// The y coordinate of the bottom edge.
    fn bottom(&self) -> f64 {
        self.edges().bottom
    }

    /// The top-left corner.
    fn top_left(&self) -> Point {
        let e = self.edges();
        Point::new(e.left, e.top)
    }

    /// The top-right corner.
    fn top_right(&self) -> Point {
        let e = self.edges();
        Point::new(e.right, e.top)
    }

    /// The bottom-left corner.
    fn bottom_left(&self) -> Point {
        let e = self.edges();
        Point::new(e.left, e.bottom)
    }

    /// The bottom-right corner.
    fn bottom_right(&self) -> Point {
        let e = self.edges();
        Point::new(e.right, e.bottom)
    }

    /// True if all four edges are exactly equal. Dimensions are not
    /// compared directly, only the edges they produce.
    fn same_edges<B: Bounds + ?Sized>(&self, other: &B) -> bool {
        self.edges() == other.edges()
    }

    /// Is the point inside or along the edges of this rectangle?
    fn contains_point(&self, p: Point) -> bool {
        self.edges().contains_point(p)
    }

    /// Does this rectangle entirely contain `other`?
    fn contains_rect<B: Bounds + ?Sized>(&self, other: &B) -> bool {
        self.edges().contains(&other.edges())
    }

    /// Do this rectangle and `other` overlap or touch?
    fn intersects<B: Bounds + ?Sized>(&self, other: &B) -> bool {
        self.edges().intersects(&other.edges())
    }

    /// The intersection of this rectangle and `other`, or `None` if they
    /// don't intersect.
    fn intersection<B: Bounds + ?Sized>(&self, other: &B) -> Option<Rectangle> {
        self.edges()
            .intersection(&other.edges())
            .map(Rectangle::from)
    }

    /// A new rectangle which completely contains this rectangle and `other`.
    fn bounding_box<B: Bounds + ?Sized>(&self, other: &B) -> Rectangle {
        Rectangle::from(self.edges().enclose(&other.edges()))
    }
}

impl Bounds for Edges {
    fn edges(&self) -> Edges {
        *self
    }
}

/// Serialized form of both rectangle types: origin plus dimensions.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// X coordinate of the left edge.
    pub left: f64,
    /// Y coordinate of the top edge.
    pub top: f64,
    /// Width, before normalization on the way in.
    pub width: f64,
    /// Height, before normalization on the way in.
    pub height: f64,
}
