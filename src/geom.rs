//! Geometric primitives: points that may carry curve handles, and directed edges.

use kurbo::{BezPath, PathEl, QuadBez, Vec2};

use crate::key::EdgeKey;

/// An ordered sequence of points: a cell boundary, or a piece of one.
///
/// A ring is closed if its first and last points are equal (see [`is_closed`]).
pub type Ring = Vec<Point>;

/// A two-dimensional point on an outline.
///
/// Points on straight segments carry no handles. Points on curved segments
/// carry their Bézier control points as offsets from the point itself.
///
/// The derived `PartialEq` is *full* equality: the coordinates and both
/// handles have to match exactly. Deduplication compares quantized
/// [`VertexKey`](crate::key::VertexKey)s instead, which ignore the handles.
#[derive(Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Control point of the segment arriving at this point, relative to this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lh: Option<Vec2>,
    /// Control point of the segment leaving this point, relative to this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rh: Option<Vec2>,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)?;
        if let Some(lh) = self.lh {
            write!(f, " lh({:?}, {:?})", lh.x, lh.y)?;
        }
        if let Some(rh) = self.rh {
            write!(f, " rh({:?}, {:?})", rh.x, rh.y)?;
        }
        Ok(())
    }
}

impl Point {
    /// Create a new point without handles.
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            x,
            y,
            lh: None,
            rh: None,
        }
    }

    /// Returns this point with the given handles attached.
    pub fn with_handles(self, lh: Option<Vec2>, rh: Option<Vec2>) -> Self {
        Point { lh, rh, ..self }
    }

    /// Does this point sit on a curved segment?
    pub fn has_handles(&self) -> bool {
        self.lh.is_some() || self.rh.is_some()
    }

    /// Converts to a `kurbo` point, dropping the handles.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point::new(p.x, p.y)
    }
}

/// A directed edge between two points.
///
/// An edge and its reverse are different edges, until deduplication decides
/// that they are the same line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Where the edge starts.
    pub from: Point,
    /// Where the edge ends.
    pub to: Point,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: Point, to: Point) -> Self {
        Edge { from, to }
    }

    /// The same line, traversed the other way.
    pub fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
        }
    }

    /// The quantized identity of this edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from, &self.to)
    }
}

/// Iterates over the edges between consecutive points of a ring.
///
/// An open ring doesn't get a closing edge.
pub fn edges(ring: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    ring.windows(2).map(|pair| Edge::new(pair[0], pair[1]))
}

/// Is this ring closed, in the sense that its first and last points are fully equal?
///
/// Rings with fewer than two points are never closed.
pub fn is_closed(ring: &[Point]) -> bool {
    ring.len() > 1 && ring.first() == ring.last()
}

/// Converts a ring to a `kurbo` path.
///
/// Segments with a handle at either end become cubic Béziers, and the others
/// become lines. Closed rings get a `ClosePath` at the end.
pub fn ring_to_bez(ring: &[Point]) -> BezPath {
    let mut ret = BezPath::new();
    let Some(first) = ring.first() else {
        return ret;
    };

    ret.move_to(first.to_kurbo());
    for edge in edges(ring) {
        let (p, q) = (edge.from, edge.to);
        match (p.rh, q.lh) {
            (None, None) => ret.line_to(q.to_kurbo()),
            (rh, lh) => ret.curve_to(
                p.to_kurbo() + rh.unwrap_or(Vec2::ZERO),
                q.to_kurbo() + lh.unwrap_or(Vec2::ZERO),
                q.to_kurbo(),
            ),
        }
    }
    if is_closed(ring) {
        ret.close_path();
    }
    ret
}

/// Splits a `kurbo` path into rings, one per sub-path.
///
/// Curves keep their control points as handles; quadratics are raised to
/// cubics first. Sub-paths that end in `ClosePath` come out closed.
pub fn rings_from_bez(path: &BezPath) -> Vec<Ring> {
    let mut rings = Vec::new();
    let mut current = Ring::new();

    fn push_curve(ring: &mut Ring, c1: kurbo::Point, c2: kurbo::Point, p: kurbo::Point) {
        if let Some(last) = ring.last_mut() {
            last.rh = Some(c1 - last.to_kurbo());
        }
        ring.push(Point::from(p).with_handles(Some(c2 - p), None));
    }

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
                current.push(p.into());
            }
            PathEl::LineTo(p) => current.push(p.into()),
            PathEl::QuadTo(c, p) => {
                let start = current.last().map_or(c, |last| last.to_kurbo());
                let cubic = QuadBez::new(start, c, p).raise();
                push_curve(&mut current, cubic.p1, cubic.p2, p);
            }
            PathEl::CurveTo(c1, c2, p) => push_curve(&mut current, c1, c2, p),
            PathEl::ClosePath => {
                close_bez_ring(&mut current);
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        rings.push(current);
    }
    rings
}

// A path that curves back to its start ends on a copy of the first point
// with different handles. Merge the two so that the ring is fully closed
// instead of picking up a zero-length closing edge.
fn close_bez_ring(ring: &mut Ring) {
    let n = ring.len();
    if n > 1 && ring[0].x == ring[n - 1].x && ring[0].y == ring[n - 1].y {
        ring[0].lh = ring[n - 1].lh;
        ring[n - 1] = ring[0];
    }
    crate::close::close_ring(ring);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn debug_format() {
        let q = p(1.0, 2.0).with_handles(Some(Vec2::new(-0.5, 0.0)), None);
        assert_eq!(format!("{:?}", p(1.0, 2.0)), "(1.0, 2.0)");
        assert_eq!(format!("{q:?}"), "(1.0, 2.0) lh(-0.5, 0.0)");
    }

    #[test]
    fn full_equality_includes_handles() {
        let a = p(1.0, 1.0);
        let b = a.with_handles(None, Some(Vec2::new(0.0, 1.0)));
        assert_ne!(a, b);
        assert_eq!(Edge::new(a, p(2.0, 2.0)).key(), Edge::new(b, p(2.0, 2.0)).key());
    }

    #[test]
    fn reversed_edges() {
        let a = Edge::new(p(1.0, 0.0), p(1.0, 1.0));
        let b = Edge::new(p(1.0, 1.0), p(1.0, 0.0));
        assert_eq!(a.reversed(), b);
        assert_eq!(a.key().reversed(), b.key());
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn open_rings_have_no_closing_edge() {
        let ring = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert_eq!(edges(&ring).count(), 2);
        assert_eq!(edges(&ring[..1]).count(), 0);
        assert!(!is_closed(&ring));
        assert!(!is_closed(&ring[..1]));
    }

    #[test]
    fn polygon_through_kurbo() {
        let path = BezPath::from_svg("M0,0 L2,0 L2,1 L0,1 Z").unwrap();
        let rings = rings_from_bez(&path);
        assert_eq!(
            rings,
            vec![vec![
                p(0.0, 0.0),
                p(2.0, 0.0),
                p(2.0, 1.0),
                p(0.0, 1.0),
                p(0.0, 0.0)
            ]]
        );
        let expected = BezPath::from_svg("M0,0 L2,0 L2,1 L0,1 L0,0 Z").unwrap();
        assert_eq!(ring_to_bez(&rings[0]).elements(), expected.elements());
    }

    #[test]
    fn curves_keep_their_handles() {
        let path = BezPath::from_svg("M0,0 C1,0 2,1 2,2 L0,2 Z").unwrap();
        let rings = rings_from_bez(&path);
        assert_eq!(rings.len(), 1);

        let ring = &rings[0];
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0].rh, Some(Vec2::new(1.0, 0.0)));
        assert_eq!(ring[1].lh, Some(Vec2::new(0.0, -1.0)));
        assert!(is_closed(ring));
        let expected = BezPath::from_svg("M0,0 C1,0 2,1 2,2 L0,2 L0,0 Z").unwrap();
        assert_eq!(ring_to_bez(ring).elements(), expected.elements());
    }

    #[test]
    fn curve_back_to_start_closes_fully() {
        let path = BezPath::from_svg("M0,0 L2,0 C2,1 1,0 0,0 Z").unwrap();
        let rings = rings_from_bez(&path);
        let ring = &rings[0];

        assert_eq!(ring.len(), 3);
        assert!(is_closed(ring));
        assert_eq!(ring[0].lh, Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn open_sub_paths_stay_open() {
        let path = BezPath::from_svg("M0,0 L1,0 L1,1 M5,5 L6,6").unwrap();
        let rings = rings_from_bez(&path);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| !is_closed(r)));
    }

    proptest! {
        #[test]
        fn edges_follow_the_ring(xs in prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 0..20)) {
            let ring: Ring = xs.into_iter().map(Point::from).collect();
            let es: Vec<_> = edges(&ring).collect();
            prop_assert_eq!(es.len(), ring.len().saturating_sub(1));
            for (i, e) in es.iter().enumerate() {
                prop_assert_eq!(e.from, ring[i]);
                prop_assert_eq!(e.to, ring[i + 1]);
            }
        }
    }
}
