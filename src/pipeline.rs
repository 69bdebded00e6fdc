//! Generating a cutting pattern, from selection to output shapes.
//!
//! The stages are:
//!
//! 1. find the region to work in (the selection's bounding box),
//! 2. scatter sites over it,
//! 3. partition it into one cell per site,
//! 4. clip every cell to the selection, closing whatever comes back, and
//! 5. in branch mode, remove the second copy of every shared edge.
//!
//! Each of the first three stages is behind a trait, so that tests (and
//! callers who want reproducible patterns) can swap them out.

use crate::{
    clip::{Clipper, OverlayClipper},
    close::{close_ring, close_shape},
    dedup::remove_coincident_edges,
    diagram::{BoundedVoronoi, CellVec, DiagramBuilder},
    sample::{SiteSampler, UniformSampler},
    shape::is_usable_region,
    Cut, Error, Parameters, Ring, Shape,
};

/// A pattern generator, made from a site sampler, a diagram builder and a
/// clipper.
#[derive(Clone, Debug)]
pub struct Pipeline<S = UniformSampler, D = BoundedVoronoi, C = OverlayClipper> {
    sampler: S,
    builder: D,
    clipper: C,
}

impl Pipeline {
    /// A generator with uniformly random sites, a plain Voronoi diagram and
    /// non-zero clipping.
    pub fn new() -> Self {
        Pipeline::with_collaborators(
            UniformSampler::default(),
            BoundedVoronoi::default(),
            OverlayClipper::default(),
        )
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D, C> Pipeline<S, D, C> {
    /// A generator built from the given stages.
    pub fn with_collaborators(sampler: S, builder: D, clipper: C) -> Self {
        Pipeline {
            sampler,
            builder,
            clipper,
        }
    }
}

impl<S: SiteSampler, D: DiagramBuilder, C: Clipper> Pipeline<S, D, C> {
    /// Generates a cutting pattern for the selected shapes.
    ///
    /// Every output shape is an on-path outline cut, at the depth of the
    /// first selected shape. Cells that don't touch the selection, or that
    /// the diagram couldn't build, are silently left out; if that leaves
    /// nothing, the result is an empty list rather than an error.
    pub fn generate(&mut self, selection: &[Shape], params: &Parameters) -> Result<Vec<Shape>, Error> {
        let Some(first) = selection.first() else {
            return Err(Error::EmptySelection);
        };

        let bounds = self.clipper.bounds(selection);
        if !is_usable_region(bounds) {
            return Err(Error::DegenerateBounds(bounds));
        }
        params.validate()?;

        let sites = self.sampler.sample(params.patches as usize, bounds);
        let cells = self.builder.build(&sites, bounds);
        log::debug!(
            "{} sites in {bounds:?} gave {} cells",
            sites.len(),
            cells.iter().filter(|(_, c)| c.is_some()).count()
        );

        let shapes = self.clip_cells(selection, cells, Cut::outline(first.cut.depth));
        log::debug!("{} shapes after clipping", shapes.len());

        if params.removes_coincident_edges() {
            Ok(remove_coincident_edges(shapes))
        } else {
            Ok(shapes)
        }
    }

    fn clip_cells(&self, selection: &[Shape], cells: CellVec<Option<Ring>>, cut: Cut) -> Vec<Shape> {
        cells
            .into_indexed()
            .filter_map(|(idx, cell)| {
                let Some(mut ring) = cell else {
                    log::trace!("{idx:?} is missing");
                    return None;
                };
                close_ring(&mut ring);
                let Some(geometry) = self.clipper.intersect(selection, &ring) else {
                    log::trace!("{idx:?} is outside of the selection");
                    return None;
                };
                close_shape(Shape::new(geometry, cut))
            })
            .collect()
    }
}
