use num_traits::Float;

use crate::{Line, Point, Rect, Ring, Series};

/// A closed region of the plain: one exterior ring and zero or more holes
/// carved out of it.
///
/// Every hole is assumed to lie within the exterior, without overlapping any
/// other hole. Nothing enforces that assumption; predicates evaluated over a
/// malformed polygon return well-defined booleans with no geometric meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    exterior: Ring<T>,
    holes: Vec<Ring<T>>,
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
    T: Float,
{
    /// Returns the polygon delimited by the given exterior vertices, with no
    /// holes.
    fn from(exterior: Vec<P>) -> Self {
        Self {
            exterior: Ring::Series(exterior.into()),
            holes: Vec::new(),
        }
    }
}

impl<T> From<Rect<T>> for Polygon<T> {
    /// Returns the polygon reading the given rectangle as its four-corner
    /// exterior, with no holes and no copying.
    fn from(rect: Rect<T>) -> Self {
        Self {
            exterior: Ring::Boxed(rect),
            holes: Vec::new(),
        }
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Creates a polygon from an exterior vertex sequence and zero or more
    /// hole vertex sequences.
    pub fn new(exterior: Vec<Point<T>>, holes: Vec<Vec<Point<T>>>) -> Self {
        Self {
            exterior: Ring::Series(Series::new(exterior)),
            holes: holes
                .into_iter()
                .map(|points| Ring::Series(Series::new(points)))
                .collect(),
        }
    }

    /// Returns the exterior ring of this polygon.
    pub fn exterior(&self) -> &Ring<T> {
        &self.exterior
    }

    /// Returns the hole rings of this polygon.
    pub fn holes(&self) -> &[Ring<T>] {
        &self.holes
    }

    /// Returns the bounding rectangle of the exterior.
    pub fn rect(&self) -> Rect<T> {
        self.exterior.rect()
    }

    /// Returns true if, and only if, the exterior has no vertices.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Returns true if, and only if, the exterior is oriented clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.exterior.is_clockwise()
    }

    /// Returns this polygon shifted by the given deltas.
    ///
    /// Rings backed by their own vertex array are translated in place; a
    /// rectangle-backed exterior is first copied into an owned array.
    pub fn translated(self, dx: T, dy: T) -> Self {
        Self {
            exterior: self.exterior.translated(dx, dy),
            holes: self
                .holes
                .into_iter()
                .map(|hole| hole.translated(dx, dy))
                .collect(),
        }
    }

    /// Returns true if, and only if, this polygon contains the given point.
    ///
    /// A point on the exterior boundary is contained, and so is a point on a
    /// hole boundary; only the strict interior of a hole is excluded.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        if !self.exterior.contains_point(point, true) {
            return false;
        }

        self.holes
            .iter()
            .all(|hole| !hole.contains_point(point, false))
    }

    /// Returns true if, and only if, this polygon contains the given point.
    pub fn intersects_point(&self, point: &Point<T>) -> bool {
        self.contains_point(point)
    }

    /// Returns true if, and only if, this polygon contains the whole
    /// rectangle.
    pub fn contains_rect(&self, rect: &Rect<T>) -> bool {
        self.contains_polygon(&Polygon::from(*rect))
    }

    /// Returns true if, and only if, this polygon and the rectangle share at
    /// least one point of filled area.
    pub fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        self.intersects_polygon(&Polygon::from(*rect))
    }

    /// Returns true if, and only if, this polygon contains the whole line.
    ///
    /// The line may touch the exterior boundary but not cross it, and may
    /// not touch any hole at all.
    pub fn contains_line(&self, line: &Line<T>) -> bool {
        if !self.exterior.contains_line(line, true) {
            return false;
        }

        self.holes
            .iter()
            .all(|hole| !hole.intersects_line(line, false))
    }

    /// Returns true if, and only if, the given line shares at least one
    /// point with the region enclosed by the exterior; holes do not take
    /// part in this test.
    pub fn intersects_line(&self, line: &Line<T>) -> bool {
        self.exterior.intersects_line(line, true)
    }

    /// Returns true if, and only if, this polygon contains the whole other
    /// polygon.
    pub fn contains_polygon(&self, other: &Polygon<T>) -> bool {
        // The other exterior must be fully contained inside this exterior.
        if !self.exterior.contains_ring(&other.exterior, true) {
            return false;
        }

        // No hole may intersect the other exterior, unless that hole is
        // itself swallowed by one of the other polygon's holes: a gap inside
        // a gap punctures nothing.
        self.holes.iter().all(|hole| {
            !hole.intersects_ring(&other.exterior, false)
                || other
                    .holes
                    .iter()
                    .any(|other_hole| other_hole.contains_ring(hole, true))
        })
    }

    /// Returns true if, and only if, this polygon and the other share at
    /// least one point of filled area.
    pub fn intersects_polygon(&self, other: &Polygon<T>) -> bool {
        if !other.exterior.intersects_ring(&self.exterior, true) {
            return false;
        }

        // A hole that fully swallows the other shape leaves no filled area
        // in common.
        self.holes
            .iter()
            .all(|hole| !hole.contains_ring(&other.exterior, false))
    }
}
