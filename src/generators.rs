//! Utilities for generating examples, benchmarks, and test cases.
//!
//! Everything here is a mesh of closed cells that wind counter-clockwise
//! (in a y-up coordinate system), with neighboring cells sharing their
//! vertices exactly.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Cut, Point, Ring, Shape};

/// Generate an `n` by `n` grid of `size x size` squares, with the bottom-left
/// corner of the first square at the origin.
///
/// Squares are listed row by row.
pub fn grid(n: usize, size: f64) -> Vec<Ring> {
    let lattice = |i: usize, j: usize| Point::new(i as f64 * size, j as f64 * size);
    lattice_cells(n, lattice)
}

/// Like [`grid`], but every lattice vertex is moved by up to `jitter` in each
/// direction.
///
/// Cells stay simple as long as `jitter` is less than `size / 2`.
pub fn jittered_grid(n: usize, size: f64, jitter: f64, seed: u64) -> Vec<Ring> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut offsets = Vec::with_capacity((n + 1) * (n + 1));
    for _ in 0..(n + 1) * (n + 1) {
        let dx = (rng.random::<f64>() * 2.0 - 1.0) * jitter;
        let dy = (rng.random::<f64>() * 2.0 - 1.0) * jitter;
        offsets.push((dx, dy));
    }

    let lattice = |i: usize, j: usize| {
        let (dx, dy) = offsets[j * (n + 1) + i];
        Point::new(i as f64 * size + dx, j as f64 * size + dy)
    };
    lattice_cells(n, lattice)
}

fn lattice_cells(n: usize, lattice: impl Fn(usize, usize) -> Point) -> Vec<Ring> {
    let mut ret = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            ret.push(vec![
                lattice(i, j),
                lattice(i + 1, j),
                lattice(i + 1, j + 1),
                lattice(i, j + 1),
                lattice(i, j),
            ]);
        }
    }
    ret
}

/// The number of distinct edges in an `n` by `n` [`grid`].
pub fn grid_edge_count(n: usize) -> usize {
    2 * n * (n + 1)
}

/// Generate `n` triangular wedges around the origin, like slices of a pie of
/// radius `radius`.
///
/// There are `2 * n` distinct edges: `n` spokes and `n` pieces of the rim.
pub fn fan(n: usize, radius: f64) -> Vec<Ring> {
    let rim: Vec<Point> = (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    let center = Point::new(0.0, 0.0);

    (0..n)
        .map(|i| vec![center, rim[i], rim[(i + 1) % n], center])
        .collect()
}

/// Wraps each ring in its own shape, cut at `depth`.
pub fn shapes(rings: impl IntoIterator<Item = Ring>, depth: f64) -> Vec<Shape> {
    rings
        .into_iter()
        .map(|ring| Shape::new(vec![ring], Cut::outline(depth)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_closed;

    fn signed_area(ring: &[Point]) -> f64 {
        ring.windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            / 2.0
    }

    #[test]
    fn grids_are_closed_and_counter_clockwise() {
        for ring in grid(3, 2.0).iter().chain(&jittered_grid(3, 2.0, 0.5, 1)) {
            assert!(is_closed(ring));
            assert!(signed_area(ring) > 0.0, "{ring:?}");
        }
    }

    #[test]
    fn jittered_neighbors_share_vertices() {
        let cells = jittered_grid(2, 1.0, 0.3, 9);
        // The right edge of the first cell is the left edge of the second.
        assert_eq!(cells[0][1], cells[1][0]);
        assert_eq!(cells[0][2], cells[1][3]);
    }

    #[test]
    fn fan_wedges() {
        let wedges = fan(5, 3.0);
        assert_eq!(wedges.len(), 5);
        for ring in &wedges {
            assert!(is_closed(ring));
            assert!(signed_area(ring) > 0.0, "{ring:?}");
        }
        assert_eq!(wedges[4][2], wedges[0][1]);
    }
}
