use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use crate::{Error, Result};

/// A two-dimensional position, which doubles as a vector for arithmetic.
///
/// Points are plain values: every operation returns a fresh point and leaves
/// its operands untouched. Equality is exact IEEE-754 comparison, so `0.0`
/// and `-0.0` are equal and a point with a NaN coordinate equals nothing.
///
/// ```
/// use planegeom::Point;
///
/// let a = Point::new(10.0, 100.0);
/// let b = Point::new(10.0, 10.0);
/// assert_eq!(a + b, Point::new(20.0, 110.0));
/// assert_eq!(a - b, Point::new(0.0, 90.0));
/// assert_eq!(a * 10.0, Point::new(100.0, 1000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// Build an `InvalidArgument` error, noting the rejection in the log.
fn invalid(msg: &str) -> Error {
    tracing::debug!(msg, "rejected point argument");
    Error::InvalidArgument(msg.into())
}

impl Point {
    /// Construct a point. Any finite or infinite coordinate is accepted.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a point, rejecting coordinates that are not numbers.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if x.is_nan() || y.is_nan() {
            return Err(invalid("a number is required"));
        }
        Ok(Self { x, y })
    }

    /// The origin.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Is this the origin?
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Scale this point by `factor`, rejecting a factor that is not a
    /// number. The infallible form is `point * factor`.
    pub fn try_scale(&self, factor: f64) -> Result<Self> {
        if factor.is_nan() {
            return Err(invalid("a number is required"));
        }
        Ok(*self * factor)
    }

    /// The straight line distance between the origin and this point.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// The Euclidean distance between `self` and `other`.
    pub fn distance_to(&self, other: Self) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    /// The squared distance between `self` and `other`. Cheaper than
    /// `distance_to` when only the ordering of distances matters.
    pub fn squared_distance_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = Error;

    fn try_from(v: &[f64]) -> Result<Self> {
        match *v {
            [x, y] => Self::try_new(x, y),
            _ => Err(invalid("a point needs exactly two coordinates")),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
