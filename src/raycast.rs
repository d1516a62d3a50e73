use num_traits::Float;

use crate::{Point, Segment, determinant::Determinant};

/// The classification of a point against a single ring edge.
///
/// Aggregated over every edge of a ring, `on` takes priority over the parity
/// of the crossing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RayHit {
    /// The edge crosses the horizontal ray shot rightwards from the point.
    pub(crate) crosses: bool,
    /// The point lies exactly on the edge.
    pub(crate) on: bool,
}

/// Classifies the given point against one edge for the even-odd rule.
///
/// The boundary test is exact: the point is `on` the edge when the three
/// points are collinear and the point falls within the extent of the edge.
/// Crossings follow the half-open rule, so an edge whose lower endpoint sits
/// at the height of the ray never double-counts with its neighbor.
pub(crate) fn raycast<T>(point: &Point<T>, edge: &Segment<T>) -> RayHit
where
    T: Float,
{
    let (a, b) = (edge.from, edge.to);
    let p = *point;

    if Determinant::from([&a, &b, &p]).is_zero()
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
    {
        return RayHit {
            crosses: false,
            on: true,
        };
    }

    let crosses =
        ((a.y > p.y) != (b.y > p.y)) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;

    RayHit { crosses, on: false }
}
