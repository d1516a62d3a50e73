use num_traits::Float;

use crate::{Line, Point, Rect, Segment, either::Either, raycast::raycast};

/// An ordered vertex array describing a closed boundary, with its bounding
/// rectangle and orientation computed once at construction time.
///
/// Closure is implicit: the last vertex connects back to the first, so it
/// does not need to be repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T = f64> {
    points: Vec<Point<T>>,
    rect: Rect<T>,
    clockwise: bool,
}

impl<T, P> From<Vec<P>> for Series<T>
where
    P: Into<Point<T>>,
    T: Float,
{
    fn from(points: Vec<P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }
}

impl<T> Series<T>
where
    T: Float,
{
    /// Creates a series from the given vertices, caching its bounds and
    /// orientation.
    pub fn new(points: Vec<Point<T>>) -> Self {
        let rect = bounds(&points);
        let clockwise = clockwise(&points);

        Self {
            points,
            rect,
            clockwise,
        }
    }

    /// Returns the vertices of this series.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Returns the bounding rectangle cached at construction.
    pub fn rect(&self) -> Rect<T> {
        self.rect
    }

    /// Returns true if, and only if, the signed area of this series is
    /// negative.
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Returns true if, and only if, this series has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Translates every vertex in place.
    ///
    /// Taking self by value guarantees the backing array is not shared, so
    /// no copy is made. The cached rectangle shifts by the same deltas and
    /// the orientation is unchanged.
    pub fn translated(mut self, dx: T, dy: T) -> Self {
        for point in &mut self.points {
            *point = point.translated(dx, dy);
        }
        self.rect = self.rect.translated(dx, dy);
        self
    }
}

/// Returns the smallest rectangle enclosing every given point.
fn bounds<T>(points: &[Point<T>]) -> Rect<T>
where
    T: Float,
{
    let mut points = points.iter();
    let Some(first) = points.next() else {
        return Rect::from(Point {
            x: T::zero(),
            y: T::zero(),
        });
    };

    points.fold(Rect::from(*first), Rect::expand)
}

/// Returns true if, and only if, the signed area of the closed boundary
/// described by the given points is negative.
fn clockwise<T>(points: &[Point<T>]) -> bool
where
    T: Float,
{
    if points.is_empty() {
        return false;
    }

    let mut sum = T::zero();
    for (index, from) in points.iter().enumerate() {
        let to = &points[(index + 1) % points.len()];
        sum = sum + (to.x - from.x) * (to.y + from.y);
    }

    sum > T::zero()
}

/// A closed boundary around a region of the plain.
///
/// Rings come in two backings: an owned vertex [`Series`], or a [`Rect`]
/// read as its four corners with no separate storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Ring<T = f64> {
    /// A ring backed by its own vertex array.
    Series(Series<T>),
    /// A rectangle viewed as a four-vertex ring.
    Boxed(Rect<T>),
}

impl<T> From<Series<T>> for Ring<T> {
    fn from(series: Series<T>) -> Self {
        Self::Series(series)
    }
}

impl<T> From<Rect<T>> for Ring<T> {
    fn from(rect: Rect<T>) -> Self {
        Self::Boxed(rect)
    }
}

impl<T> Ring<T>
where
    T: Float,
{
    /// Returns the bounding rectangle of this ring.
    pub fn rect(&self) -> Rect<T> {
        match self {
            Self::Series(series) => series.rect(),
            Self::Boxed(rect) => *rect,
        }
    }

    /// Returns true if, and only if, this ring is oriented clockwise.
    pub fn is_clockwise(&self) -> bool {
        match self {
            Self::Series(series) => series.is_clockwise(),
            // Corners are enumerated counter-clockwise.
            Self::Boxed(_) => false,
        }
    }

    /// Returns true if, and only if, this ring has no vertices.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Series(series) => series.is_empty(),
            Self::Boxed(_) => false,
        }
    }

    /// Returns the amount of vertices in this ring.
    pub fn len(&self) -> usize {
        match self {
            Self::Series(series) => series.points().len(),
            Self::Boxed(_) => 4,
        }
    }

    /// Returns the vertex at the given position, which must be less than
    /// [`Self::len`].
    pub fn point_at(&self, index: usize) -> Point<T> {
        match self {
            Self::Series(series) => series.points()[index],
            Self::Boxed(rect) => rect.corners()[index],
        }
    }

    /// Returns an ordered iterator over the vertices of this ring.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        match self {
            Self::Series(series) => Either::Left(series.points().iter().copied()),
            Self::Boxed(rect) => Either::Right(rect.corners().into_iter()),
        }
    }

    /// Returns an ordered iterator over the edges of this ring, the last one
    /// closing the boundary back to the first vertex.
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        let len = self.len();
        (0..len).map(move |index| Segment {
            from: self.point_at(index),
            to: self.point_at((index + 1) % len),
        })
    }

    /// Returns this ring shifted by the given deltas.
    ///
    /// A [`Series`] backing is translated in place. A [`Rect`] backing owns
    /// no vertex array, so its corners are first copied into a new series.
    pub fn translated(self, dx: T, dy: T) -> Self {
        match self {
            Self::Series(series) => Self::Series(series.translated(dx, dy)),
            Self::Boxed(rect) => {
                Self::Series(Series::new(rect.corners().to_vec()).translated(dx, dy))
            }
        }
    }

    /// Returns true if, and only if, the given point is inside this ring,
    /// with boundary hits counting as inside only when `allow_on_edge` is
    /// set.
    pub fn contains_point(&self, point: &Point<T>, allow_on_edge: bool) -> bool {
        let mut crossings = 0;
        for segment in self.segments() {
            let hit = raycast(point, &segment);
            if hit.on {
                return allow_on_edge;
            }
            if hit.crosses {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    /// Returns true if, and only if, the given line lies entirely inside
    /// this ring.
    ///
    /// With `allow_on_edge` set the line may touch the boundary but not
    /// cross it; without it, any boundary contact disqualifies.
    pub fn contains_line(&self, line: &Line<T>, allow_on_edge: bool) -> bool {
        if self.is_empty() || line.is_empty() {
            return false;
        }
        if line.len() == 1 {
            return self.contains_point(&line.point_at(0), allow_on_edge);
        }
        if !self.rect().contains_rect(&line.rect()) {
            return false;
        }
        if !line
            .points()
            .all(|point| self.contains_point(&point, allow_on_edge))
        {
            return false;
        }

        for edge in line.segments() {
            for boundary in self.segments() {
                if allow_on_edge {
                    if edge.crosses(&boundary) {
                        return false;
                    }
                } else if edge.intersects(&boundary) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns true if, and only if, the given ring lies entirely inside
    /// this ring.
    ///
    /// With `allow_on_edge` set the other ring may touch this boundary but
    /// not cross it; without it, any boundary contact disqualifies.
    pub fn contains_ring(&self, other: &Ring<T>, allow_on_edge: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if other.len() == 1 {
            return self.contains_point(&other.point_at(0), allow_on_edge);
        }
        if !self.rect().contains_rect(&other.rect()) {
            return false;
        }
        if !other
            .points()
            .all(|point| self.contains_point(&point, allow_on_edge))
        {
            return false;
        }

        for edge in other.segments() {
            for boundary in self.segments() {
                if allow_on_edge {
                    if edge.crosses(&boundary) {
                        return false;
                    }
                } else if edge.intersects(&boundary) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns true if, and only if, the given line shares at least one
    /// point with the region enclosed by this ring.
    ///
    /// A line wholly inside the ring intersects it; the converse check does
    /// not apply, since an open path encloses nothing.
    pub fn intersects_line(&self, line: &Line<T>, allow_on_edge: bool) -> bool {
        if self.is_empty() || line.is_empty() {
            return false;
        }
        if line.len() == 1 {
            return self.contains_point(&line.point_at(0), allow_on_edge);
        }
        if self.len() == 1 {
            return line.contains_point(&self.point_at(0));
        }
        if !self.rect().intersects(&line.rect()) {
            return false;
        }

        for edge in line.segments() {
            for boundary in self.segments() {
                if edge.intersects(&boundary) {
                    return true;
                }
            }
        }

        line.points()
            .all(|point| self.contains_point(&point, allow_on_edge))
    }

    /// Returns true if, and only if, the regions enclosed by both rings
    /// share at least one point.
    pub fn intersects_ring(&self, other: &Ring<T>, allow_on_edge: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.len() == 1 && other.len() == 1 {
            return self.point_at(0) == other.point_at(0);
        }
        if self.len() == 1 {
            return other.contains_point(&self.point_at(0), allow_on_edge);
        }
        if other.len() == 1 {
            return self.contains_point(&other.point_at(0), allow_on_edge);
        }
        if !self.rect().intersects(&other.rect()) {
            return false;
        }

        for edge in other.segments() {
            for boundary in self.segments() {
                if edge.intersects(&boundary) {
                    return true;
                }
            }
        }

        if other
            .points()
            .all(|point| self.contains_point(&point, allow_on_edge))
        {
            return true;
        }

        self.points()
            .all(|point| other.contains_point(&point, allow_on_edge))
    }
}
