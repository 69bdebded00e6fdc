//! Partitioning a region into cells around a set of sites.

use kurbo::Rect;

use crate::{Point, Ring};

/// An index into the cells of a diagram.
///
/// Cells are stored in site order, so this is also the index of the site
/// that the cell surrounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIdx(pub usize);

impl std::fmt::Debug for CellIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c_{}", self.0)
    }
}

/// One entry per cell of a diagram, in site order.
#[derive(Clone, PartialEq)]
pub struct CellVec<T> {
    inner: Vec<T>,
}

impl<T> CellVec<T> {
    /// Wraps a plain vector, whose `i`th entry belongs to the `i`th site.
    pub fn from_vec(inner: Vec<T>) -> Self {
        CellVec { inner }
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Are there no cells at all?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over cell indices and cells.
    pub fn iter(&self) -> impl Iterator<Item = (CellIdx, &T)> + '_ {
        self.inner.iter().enumerate().map(|(i, c)| (CellIdx(i), c))
    }

    /// Consumes the cells, iterating over cell indices and cells.
    pub fn into_indexed(self) -> impl Iterator<Item = (CellIdx, T)> {
        self.inner
            .into_iter()
            .enumerate()
            .map(|(i, c)| (CellIdx(i), c))
    }
}

impl<T> Default for CellVec<T> {
    fn default() -> Self {
        CellVec { inner: Vec::new() }
    }
}

impl<T> FromIterator<T> for CellVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CellVec {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CellVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Something that can partition a rectangle into cells, one per site.
pub trait DiagramBuilder {
    /// Builds one cell per site, in site order.
    ///
    /// A cell's boundary may come back open (without its first point repeated
    /// at the end). Cells that are degenerate or unbounded come back as
    /// `None`. If the whole diagram fails, every cell is `None`.
    fn build(&self, sites: &[Point], bounds: Rect) -> CellVec<Option<Ring>>;
}

/// A Voronoi diagram, clipped to the bounding rectangle.
///
/// Cell boundaries are wound counter-clockwise (in a y-up coordinate system),
/// so neighboring cells traverse their shared edge in opposite directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundedVoronoi {
    lloyd_iterations: usize,
}

impl BoundedVoronoi {
    /// A plain Voronoi diagram of the sites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the sites towards their cells' centroids this many times before
    /// building the final diagram, for more evenly sized cells.
    pub fn with_lloyd_iterations(mut self, iterations: usize) -> Self {
        self.lloyd_iterations = iterations;
        self
    }
}

impl DiagramBuilder for BoundedVoronoi {
    fn build(&self, sites: &[Point], bounds: Rect) -> CellVec<Option<Ring>> {
        if sites.is_empty() {
            return CellVec::default();
        }

        let center = bounds.center();
        let bounding_box = voronoice::BoundingBox::new(
            voronoice::Point {
                x: center.x,
                y: center.y,
            },
            bounds.width(),
            bounds.height(),
        );
        let voronoi = voronoice::VoronoiBuilder::default()
            .set_sites(
                sites
                    .iter()
                    .map(|p| voronoice::Point { x: p.x, y: p.y })
                    .collect(),
            )
            .set_bounding_box(bounding_box)
            .set_lloyd_relaxation_iterations(self.lloyd_iterations)
            .build();

        let Some(voronoi) = voronoi else {
            log::debug!("failed to build a diagram from {} sites", sites.len());
            return sites.iter().map(|_| None).collect();
        };

        voronoi
            .iter_cells()
            .map(|cell| {
                let ring: Ring = cell
                    .iter_vertices()
                    .map(|v| Point::new(v.x, v.y))
                    .collect();
                (ring.len() >= 3).then_some(ring)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::tests::p;

    // Twice the signed area; positive for counter-clockwise rings.
    fn signed_area(ring: &[Point]) -> f64 {
        ring.iter()
            .zip(ring.iter().cycle().skip(1))
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum()
    }

    #[test]
    fn one_cell_per_site() {
        let sites = [p(1.0, 1.0), p(3.0, 1.0), p(1.0, 3.0), p(3.0, 3.0)];
        let bounds = Rect::new(0.0, 0.0, 4.0, 4.0);
        let cells = BoundedVoronoi::new().build(&sites, bounds);

        assert_eq!(cells.len(), sites.len());
        for (idx, cell) in cells.iter() {
            let ring = cell.as_ref().unwrap();
            assert!(ring.len() >= 3, "{idx:?}: {ring:?}");
            assert!(signed_area(ring) > 0.0, "{idx:?}: {ring:?}");
            for q in ring {
                assert!(q.x >= -1e-9 && q.x <= 4.0 + 1e-9);
                assert!(q.y >= -1e-9 && q.y <= 4.0 + 1e-9);
            }
        }
    }

    #[test]
    fn cells_cover_the_bounds() {
        let sites = [p(1.0, 2.0), p(5.0, 1.0), p(7.0, 3.5), p(2.5, 3.0)];
        let bounds = Rect::new(0.0, 0.0, 8.0, 4.0);
        let cells = BoundedVoronoi::new()
            .with_lloyd_iterations(2)
            .build(&sites, bounds);

        let total: f64 = cells
            .iter()
            .filter_map(|(_, c)| c.as_ref())
            .map(|c| signed_area(c) / 2.0)
            .sum();
        assert!((total - bounds.area()).abs() < 1e-6, "{total}");
    }

    #[test]
    fn no_sites_no_cells() {
        let cells = BoundedVoronoi::new().build(&[], Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(cells.is_empty());
    }

    #[test]
    fn debug_uses_cell_indices() {
        let cells: CellVec<Option<Ring>> = CellVec::from_vec(vec![None, Some(vec![p(0.0, 0.0)])]);
        assert_eq!(format!("{cells:?}"), "{c_0: None, c_1: Some([(0.0, 0.0)])}");
    }
}
