use num_traits::Float;

use crate::{Point, Polygon, Rect, Ring, Segment, Series, raycast::raycast};

/// An ordered sequence of points describing an open path.
///
/// Unlike a [`Ring`], a line does not close back onto its first point and
/// encloses no region.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<T = f64> {
    series: Series<T>,
}

impl<T, P> From<Vec<P>> for Line<T>
where
    P: Into<Point<T>>,
    T: Float,
{
    fn from(points: Vec<P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }
}

impl<T> Line<T>
where
    T: Float,
{
    /// Creates a line from the given points.
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self {
            series: Series::new(points),
        }
    }

    /// Returns the bounding rectangle of this line.
    pub fn rect(&self) -> Rect<T> {
        self.series.rect()
    }

    /// Returns true if, and only if, this line has no points.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the amount of points in this line.
    pub fn len(&self) -> usize {
        self.series.points().len()
    }

    /// Returns the point at the given position, which must be less than
    /// [`Self::len`].
    pub fn point_at(&self, index: usize) -> Point<T> {
        self.series.points()[index]
    }

    /// Returns an ordered iterator over the points of this line.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.series.points().iter().copied()
    }

    /// Returns an ordered iterator over the segments of this line, one less
    /// than its amount of points.
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.series.points().windows(2).map(|points| Segment {
            from: points[0],
            to: points[1],
        })
    }

    /// Returns this line shifted by the given deltas.
    pub fn translated(self, dx: T, dy: T) -> Self {
        Self {
            series: self.series.translated(dx, dy),
        }
    }

    /// Returns true if, and only if, the given point lies exactly on one of
    /// the segments of this line.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        self.segments()
            .any(|segment| raycast(point, &segment).on)
    }

    /// Returns true if, and only if, the given point lies exactly on one of
    /// the segments of this line.
    pub fn intersects_point(&self, point: &Point<T>) -> bool {
        self.contains_point(point)
    }

    /// Returns true if, and only if, self and the given line share at least
    /// one point.
    pub fn intersects_line(&self, rhs: &Line<T>) -> bool {
        if self.is_empty() || rhs.is_empty() {
            return false;
        }
        if self.len() == 1 {
            return rhs.contains_point(&self.point_at(0));
        }
        if rhs.len() == 1 {
            return self.contains_point(&rhs.point_at(0));
        }
        if !self.rect().intersects(&rhs.rect()) {
            return false;
        }

        for segment in self.segments() {
            for other in rhs.segments() {
                if segment.intersects(&other) {
                    return true;
                }
            }
        }

        false
    }

    /// Returns true if, and only if, this line shares at least one point
    /// with the given rectangle, touching its boundary included.
    pub fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        Ring::from(*rect).intersects_line(self, true)
    }

    /// Returns true if, and only if, this line shares at least one point
    /// with the region enclosed by the exterior of the given polygon.
    pub fn intersects_polygon(&self, polygon: &Polygon<T>) -> bool {
        polygon.intersects_line(self)
    }
}
