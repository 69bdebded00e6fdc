//! Turning a mesh of cells into a network of lines, with every shared edge cut once.
//!
//! Neighboring cells both include the boundary between them, so cutting every
//! cell outline would run the tool over each interior edge twice. Here we walk
//! the cells in order, emitting each edge the first time we see it and
//! skipping it when a later cell walks it backwards. A cell whose ring loses
//! an edge this way gets split into open sub-paths around the gap.
//!
//! Since the first cell to reach a shared edge is the one that keeps it, the
//! output depends on the order of the cells (but on nothing else).

use crate::{geom::edges, registry::EdgeRegistry, Point, Ring, Shape};

/// Splits a ring into the runs of edges that haven't been emitted yet.
///
/// Edges whose reverse is already in `registry` are dropped, and every edge
/// that's kept is recorded. Rings with fewer than two points produce nothing.
pub fn dedup_ring(ring: &[Point], registry: &mut EdgeRegistry) -> Vec<Ring> {
    let mut sub_paths = Vec::new();
    let mut run = Ring::new();

    for edge in edges(ring) {
        if registry.seen(&edge.from, &edge.to) {
            if !run.is_empty() {
                sub_paths.push(std::mem::take(&mut run));
            }
        } else {
            if run.is_empty() {
                run.push(edge.from);
            }
            run.push(edge.to);
            registry.record(&edge.from, &edge.to);
        }
    }

    if !run.is_empty() {
        sub_paths.push(run);
    }
    sub_paths
}

/// Deduplicates every ring of a shape against `registry`, in order.
///
/// Returns `None` if nothing is left of the shape.
pub fn dedup_shape(shape: Shape, registry: &mut EdgeRegistry) -> Option<Shape> {
    let geometry: Vec<Ring> = shape
        .geometry
        .iter()
        .flat_map(|ring| dedup_ring(ring, registry))
        .collect();

    if geometry.is_empty() {
        None
    } else {
        Some(Shape { geometry, ..shape })
    }
}

/// Removes the second copy of every shared edge from a collection of cells.
///
/// Each cell is expected to wind in the same rotational direction as its
/// neighbors, so that shared edges are traversed in opposite directions.
/// Cells that end up with no edges are dropped.
pub fn remove_coincident_edges(shapes: impl IntoIterator<Item = Shape>) -> Vec<Shape> {
    let mut registry = EdgeRegistry::new();
    remove_coincident_edges_with(shapes, &mut registry)
}

/// Like [`remove_coincident_edges`], but against an existing registry.
///
/// Edges whose reverse is already in `registry` are treated as emitted.
pub fn remove_coincident_edges_with(
    shapes: impl IntoIterator<Item = Shape>,
    registry: &mut EdgeRegistry,
) -> Vec<Shape> {
    let ret: Vec<Shape> = shapes
        .into_iter()
        .filter_map(|shape| dedup_shape(shape, registry))
        .collect();
    log::debug!(
        "{} shapes left after deduplication, {} edges recorded",
        ret.len(),
        registry.len()
    );
    ret
}

/// Property checks for deduplication, driven by `arbitrary` data.
///
/// These are shared by the unit tests and the fuzz targets.
#[cfg(any(test, feature = "arbitrary"))]
pub mod arbtests {
    use std::collections::HashMap;

    use arbitrary::Unstructured;

    use super::*;
    use crate::{key::EdgeKey, Cut};

    /// Deduplicates an arbitrary mesh, and checks that every undirected edge
    /// of the input comes out exactly once.
    pub fn each_edge_once(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let cells = crate::arbitrary::mesh(u)?;
        let shapes: Vec<_> = cells
            .iter()
            .map(|ring| Shape::new(vec![ring.clone()], Cut::outline(0.5)))
            .collect();

        let mut expected: HashMap<EdgeKey, usize> = HashMap::new();
        for e in shapes.iter().flat_map(Shape::edges) {
            *expected.entry(e.key().undirected()).or_default() += 1;
        }

        let output = remove_coincident_edges(shapes);
        let mut actual: HashMap<EdgeKey, usize> = HashMap::new();
        for e in output.iter().flat_map(Shape::edges) {
            *actual.entry(e.key().undirected()).or_default() += 1;
        }

        assert_eq!(actual.len(), expected.len());
        for (key, count) in &actual {
            assert_eq!(*count, 1, "{key:?} emitted {count} times");
            assert!(expected.contains_key(key));
        }
        for shape in &output {
            assert!(!shape.geometry.is_empty());
            assert!(shape.geometry.iter().all(|ring| ring.len() >= 2));
            assert_eq!(shape.cut.depth, 0.5);
        }
        Ok(())
    }

    /// Deduplicates arbitrary rings twice, and checks that the results agree.
    pub fn deterministic(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let len = u.int_in_range(0..=8)?;
        let shapes = (0..len)
            .map(|_| {
                let ring = crate::arbitrary::ring(u)?;
                Ok(Shape::new(vec![ring], Cut::outline(1.0)))
            })
            .collect::<arbitrary::Result<Vec<_>>>()?;

        let first = remove_coincident_edges(shapes.clone());
        let second = remove_coincident_edges(shapes);
        assert_eq!(first, second);
        Ok(())
    }
}
