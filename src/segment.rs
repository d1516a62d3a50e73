use num_traits::Float;

use crate::{Point, determinant::Determinant};

/// The straight line between two endpoints.
///
/// Segments only live while an algorithm walks the edges of a shape; no shape
/// stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T = f64> {
    /// The first endpoint of the segment.
    pub from: Point<T>,
    /// The last endpoint of the segment.
    pub to: Point<T>,
}

impl<T> From<(Point<T>, Point<T>)> for Segment<T> {
    fn from((from, to): (Point<T>, Point<T>)) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<T>
where
    T: Float,
{
    /// Returns true if, and only if, self and rhs share at least one point,
    /// including endpoint touches and collinear overlaps.
    ///
    /// Nearly-parallel segments may be misclassified when the cross products
    /// below cancel to zero; inputs are expected to stay away from that
    /// degeneracy.
    pub fn intersects(&self, rhs: &Segment<T>) -> bool {
        let (a, b) = (self.from, self.to);
        let (c, d) = (rhs.from, rhs.to);

        // Compare the extents of both segments without normalizing the order
        // of their endpoints.
        if a.y > b.y {
            if c.y > d.y {
                if b.y > c.y || a.y < d.y {
                    return false;
                }
            } else if b.y > d.y || a.y < c.y {
                return false;
            }
        } else if c.y > d.y {
            if a.y > c.y || b.y < d.y {
                return false;
            }
        } else if a.y > d.y || b.y < c.y {
            return false;
        }
        if a.x > b.x {
            if c.x > d.x {
                if b.x > c.x || a.x < d.x {
                    return false;
                }
            } else if b.x > d.x || a.x < c.x {
                return false;
            }
        } else if c.x > d.x {
            if a.x > c.x || b.x < d.x {
                return false;
            }
        } else if a.x > d.x || b.x < c.x {
            return false;
        }

        let zero = T::zero();
        let (cmp_x, cmp_y) = (c.x - a.x, c.y - a.y);
        let (r_x, r_y) = (b.x - a.x, b.y - a.y);

        let cmp_cross_r = cmp_x * r_y - cmp_y * r_x;
        if cmp_cross_r == zero {
            // The first endpoint of rhs lies on the line through self, so the
            // segments overlap whenever that endpoint falls between the
            // endpoints of self on either axis.
            return ((c.x - a.x <= zero) != (c.x - b.x <= zero))
                || ((c.y - a.y <= zero) != (c.y - b.y <= zero));
        }

        let (s_x, s_y) = (d.x - c.x, d.y - c.y);
        let cmp_cross_s = cmp_x * s_y - cmp_y * s_x;
        let r_cross_s = r_x * s_y - r_y * s_x;
        if r_cross_s == zero {
            // Parallel and not collinear.
            return false;
        }

        let t = cmp_cross_s / r_cross_s;
        let u = cmp_cross_r / r_cross_s;
        t >= zero && t <= T::one() && u >= zero && u <= T::one()
    }

    /// Returns true if, and only if, self and rhs cross at a single interior
    /// point, with the endpoints of each segment falling strictly on opposite
    /// sides of the other.
    ///
    /// Endpoint touches and collinear overlaps are not crossings.
    pub(crate) fn crosses(&self, rhs: &Segment<T>) -> bool {
        let zero = T::zero();
        let from_side = Determinant::from([&rhs.from, &rhs.to, &self.from]).into_inner();
        let to_side = Determinant::from([&rhs.from, &rhs.to, &self.to]).into_inner();
        if !((from_side > zero && to_side < zero) || (from_side < zero && to_side > zero)) {
            return false;
        }

        let from_side = Determinant::from([&self.from, &self.to, &rhs.from]).into_inner();
        let to_side = Determinant::from([&self.from, &self.to, &rhs.to]).into_inner();
        (from_side > zero && to_side < zero) || (from_side < zero && to_side > zero)
    }
}
