use std::ops::{Mul, Sub};

use num_traits::Zero;

use crate::Point;

/// The scalar value representing the determinant of a matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Being `A`, `B` and `C` the given [`Point`]s, returns the determinant of the matrix
    /// representing the direction vectors `AB` and `AC`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        Self((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }
}

impl<T> Determinant<T>
where
    T: Zero,
{
    /// Returns true if, and only if, the three points are collinear.
    pub(crate) fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> Determinant<T> {
    /// Returns the inner value of self.
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}
