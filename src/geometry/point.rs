//! Rational point type.

use std::fmt;

use rug::Rational;

/// A point in the plane with exact rational coordinates.
///
/// Ordering is lexicographic on `(x, y)`, which is also the order of
/// points along any line they share.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

impl Point {
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// Point with integer coordinates.
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(Rational::from(x), Rational::from(y))
    }

    /// Point from two `(numerator, denominator)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a denominator is zero.
    pub fn from_fractions(x: (i64, i64), y: (i64, i64)) -> Self {
        Self::new(Rational::from(x), Rational::from(y))
    }

    /// Exact midpoint of `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        let x = Rational::from(&self.x + &other.x) / 2u32;
        let y = Rational::from(&self.y + &other.y) / 2u32;
        Point::new(x, y)
    }

    /// Vector `self - origin`.
    pub(crate) fn minus(&self, origin: &Point) -> (Rational, Rational) {
        (
            Rational::from(&self.x - &origin.x),
            Rational::from(&self.y - &origin.y),
        )
    }

    /// Lossy conversion for display and benchmarks.
    pub fn to_f64(&self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
