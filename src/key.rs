//! Quantized identities for points and directed edges.
//!
//! Cells that share an edge compute its endpoints independently, so the
//! coordinates can disagree in their last few bits. Before comparing
//! endpoints we snap each coordinate down to a fixed grid of
//! `1 / QUANTIZATION` units, and compare the grid cells instead.
//!
//! Two points that differ by less than one grid step can still land in
//! different grid cells if they happen to straddle a grid line. We accept
//! that: it only means that an edge might fail to be recognized as shared,
//! and get emitted twice.

use crate::Point;

/// Number of grid steps per unit of length.
pub const QUANTIZATION: f64 = 100_000.0;

fn quantize(val: f64) -> i64 {
    // `as` saturates, and sends NaN to zero.
    (val * QUANTIZATION).floor() as i64
}

/// The quantized identity of a point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    /// Quantized horizontal coordinate.
    pub x: i64,
    /// Quantized vertical coordinate.
    pub y: i64,
}

impl std::fmt::Debug for VertexKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl VertexKey {
    /// Quantizes a point. Handles are ignored.
    pub fn new(p: &Point) -> Self {
        VertexKey {
            x: quantize(p.x),
            y: quantize(p.y),
        }
    }
}

/// The quantized identity of a directed edge.
///
/// This is orientation-sensitive: the key of `p -> q` is different from the
/// key of `q -> p` (unless `p` and `q` quantize to the same vertex).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// The start of the edge.
    pub from: VertexKey,
    /// The end of the edge.
    pub to: VertexKey,
}

impl std::fmt::Debug for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}-{:?}", self.from, self.to)
    }
}

impl EdgeKey {
    /// The key of the edge from `p1` to `p2`.
    pub fn new(p1: &Point, p2: &Point) -> Self {
        EdgeKey {
            from: VertexKey::new(p1),
            to: VertexKey::new(p2),
        }
    }

    /// The key of the same edge, traversed the other way.
    pub fn reversed(self) -> Self {
        EdgeKey {
            from: self.to,
            to: self.from,
        }
    }

    /// A key that is the same for both directions of the edge.
    ///
    /// This is the smaller of the edge's key and its reverse.
    pub fn undirected(self) -> Self {
        self.min(self.reversed())
    }
}
