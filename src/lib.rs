#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod clip;
pub mod close;
pub mod dedup;
pub mod diagram;
mod geom;
pub mod key;
pub mod params;
pub mod pipeline;
pub mod registry;
pub mod sample;
pub mod shape;

#[cfg(any(test, feature = "generators", feature = "arbitrary"))]
pub mod generators;

pub use geom::{edges, is_closed, rings_from_bez, ring_to_bez, Edge, Point, Ring};
pub use params::{CutMode, Parameters};
pub use pipeline::Pipeline;
pub use shape::{Cut, CutKind, OutlineStyle, Shape};

/// A fill rule tells us how to decide whether a point is "inside" a selection outline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FillRule {
    /// The point is "inside" if its winding number is odd.
    EvenOdd,
    /// The point is "inside" if its winding number is non-zero.
    #[default]
    NonZero,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The pattern could not be generated from the given selection or parameters.
pub enum Error {
    /// No shapes were selected.
    EmptySelection,
    /// The selection's bounding box has zero area, or isn't finite.
    DegenerateBounds(kurbo::Rect),
    /// The requested number of patches is outside of [`params::PATCH_RANGE`].
    PatchCount(u32),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptySelection => write!(f, "no shapes were selected"),
            Error::DegenerateBounds(rect) => {
                write!(f, "the selection has a degenerate bounding box {rect:?}")
            }
            Error::PatchCount(n) => write!(
                f,
                "patch count {n} is outside of {}..={}",
                params::PATCH_RANGE.start(),
                params::PATCH_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Generates a cutting pattern for the selected shapes, using freshly sampled
/// sites, a bounded Voronoi diagram and polygon clipping.
///
/// Every output shape inherits the cut depth of the first selected shape. In
/// [`CutMode::Patches`] every output sub-path is closed; in
/// [`CutMode::Branches`] every edge shared by two neighboring cells is
/// emitted only once.
///
/// Sites are random, so two calls with the same arguments will generally give
/// different patterns. Use [`Pipeline`] with a seeded sampler for
/// reproducible output.
pub fn generate(selection: &[Shape], params: &Parameters) -> Result<Vec<Shape>, Error> {
    Pipeline::new().generate(selection, params)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn square(x0: f64, y0: f64, size: f64, depth: f64) -> Shape {
        Shape::new(
            vec![vec![
                Point::new(x0, y0),
                Point::new(x0 + size, y0),
                Point::new(x0 + size, y0 + size),
                Point::new(x0, y0 + size),
                Point::new(x0, y0),
            ]],
            Cut::outline(depth),
        )
    }

    #[test]
    fn patches_on_a_square() {
        let params = Parameters {
            patches: 12,
            cut: CutMode::Patches,
            ..Parameters::default()
        };
        let output = generate(&[square(0.0, 0.0, 10.0, 0.125)], &params).unwrap();

        assert!(!output.is_empty());
        for shape in &output {
            assert_eq!(shape.cut, Cut::outline(0.125));
            assert!(!shape.geometry.is_empty());
            for ring in &shape.geometry {
                assert!(is_closed(ring), "{ring:?}");
            }
        }
    }

    #[test]
    fn branches_on_two_squares() {
        let selection = [square(0.0, 0.0, 10.0, 0.25), square(20.0, 0.0, 10.0, 0.5)];
        let output = generate(&selection, &Parameters::default()).unwrap();

        assert!(!output.is_empty());
        assert!(output.iter().all(|s| s.cut.depth == 0.25));
        assert!(output
            .iter()
            .flat_map(|s| &s.geometry)
            .all(|ring| ring.len() >= 2));
    }

    #[test]
    fn empty_selection() {
        assert_matches!(
            generate(&[], &Parameters::default()),
            Err(Error::EmptySelection)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(Error::EmptySelection.to_string(), "no shapes were selected");
        assert_eq!(
            Error::PatchCount(2).to_string(),
            "patch count 2 is outside of 3..=500"
        );
    }
}
