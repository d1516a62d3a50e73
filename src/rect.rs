use num_traits::Float;

use crate::Point;

/// An axis-aligned rectangle delimited by its minimum and maximum corners.
///
/// The producer of the rectangle is responsible for keeping `min` less than
/// or equal to `max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T = f64> {
    /// The corner with the smallest coordinates.
    pub min: Point<T>,
    /// The corner with the largest coordinates.
    pub max: Point<T>,
}

impl<T> From<Point<T>> for Rect<T>
where
    T: Copy,
{
    /// Returns the degenerate rectangle holding nothing but the given point.
    fn from(point: Point<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }
}

impl<T> Rect<T>
where
    T: Float,
{
    /// Returns the smallest rectangle enclosing both self and the given point.
    pub fn expand(self, point: &Point<T>) -> Self {
        Self {
            min: Point {
                x: self.min.x.min(point.x),
                y: self.min.y.min(point.y),
            },
            max: Point {
                x: self.max.x.max(point.x),
                y: self.max.y.max(point.y),
            },
        }
    }

    /// Returns the middle point of this rectangle.
    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point {
            x: (self.min.x + self.max.x) / two,
            y: (self.min.y + self.max.y) / two,
        }
    }

    /// Returns true if, and only if, self and the given rectangle share at
    /// least one point, including boundary touches.
    pub fn intersects(&self, rhs: &Rect<T>) -> bool {
        if self.min.y > rhs.max.y || self.max.y < rhs.min.y {
            return false;
        }
        if self.min.x > rhs.max.x || self.max.x < rhs.min.x {
            return false;
        }
        true
    }

    /// Returns true if, and only if, the given point is inside self or on its
    /// boundary.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns true if, and only if, the given rectangle is fully inside
    /// self, boundary touches included.
    pub fn contains_rect(&self, rhs: &Rect<T>) -> bool {
        self.contains_point(&rhs.min) && self.contains_point(&rhs.max)
    }

    /// Returns the four corners of this rectangle in counter-clockwise order,
    /// starting at the minimum corner.
    pub(crate) fn corners(&self) -> [Point<T>; 4] {
        [
            self.min,
            Point {
                x: self.max.x,
                y: self.min.y,
            },
            self.max,
            Point {
                x: self.min.x,
                y: self.max.y,
            },
        ]
    }

    /// Returns this rectangle shifted by the given deltas.
    pub fn translated(self, dx: T, dy: T) -> Self {
        Self {
            min: self.min.translated(dx, dy),
            max: self.max.translated(dx, dy),
        }
    }
}
