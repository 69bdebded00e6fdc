//! Intersecting cells with the selected shapes.

use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use kurbo::{PathEl, Rect};

use crate::{shape, FillRule, Point, Ring, Shape};

/// Something that can intersect a candidate polygon with a selection.
pub trait Clipper {
    /// Intersects the selection with a closed candidate polygon.
    ///
    /// Returns the rings of the intersection (there may be several, if the
    /// selection is not convex or has several parts), or `None` if the
    /// intersection is empty.
    fn intersect(&self, selection: &[Shape], candidate: &[Point]) -> Option<Vec<Ring>>;

    /// The bounding box of the selection.
    fn bounds(&self, selection: &[Shape]) -> Rect {
        shape::bounding_box(selection)
    }
}

impl From<FillRule> for i_overlay::core::fill_rule::FillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::EvenOdd => i_overlay::core::fill_rule::FillRule::EvenOdd,
            FillRule::NonZero => i_overlay::core::fill_rule::FillRule::NonZero,
        }
    }
}

/// A polygon clipper backed by `i_overlay`.
///
/// Curved selection outlines are flattened to polylines first, so the
/// clipped rings never have handles. Output rings are open, and wind
/// counter-clockwise (in a y-up coordinate system) around their interiors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayClipper {
    /// How overlapping selected outlines combine.
    pub fill_rule: FillRule,
    /// The maximum distance between a curve and its flattened polyline.
    pub tolerance: f64,
}

impl Default for OverlayClipper {
    fn default() -> Self {
        OverlayClipper {
            fill_rule: FillRule::NonZero,
            tolerance: 0.01,
        }
    }
}

type Contour = Vec<[f64; 2]>;

impl OverlayClipper {
    fn flatten(&self, shape: &Shape, contours: &mut Vec<Contour>) {
        let path = shape.to_bez_path();
        let mut current = Contour::new();
        kurbo::flatten(path.elements().iter().copied(), self.tolerance, |el| match el {
            PathEl::MoveTo(p) => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
                current.push([p.x, p.y]);
            }
            PathEl::LineTo(p) => current.push([p.x, p.y]),
            PathEl::ClosePath => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!(),
        });
        if !current.is_empty() {
            contours.push(current);
        }
    }
}

// i_overlay contours are implicitly closed.
fn open_contour(points: impl IntoIterator<Item = [f64; 2]>) -> Contour {
    let mut contour: Contour = points.into_iter().collect();
    if contour.len() > 1 && contour.first() == contour.last() {
        contour.pop();
    }
    contour
}

impl Clipper for OverlayClipper {
    fn intersect(&self, selection: &[Shape], candidate: &[Point]) -> Option<Vec<Ring>> {
        let mut subject = Vec::new();
        for shape in selection {
            self.flatten(shape, &mut subject);
        }
        let subject: Vec<Contour> = subject
            .into_iter()
            .map(open_contour)
            .filter(|c| c.len() >= 3)
            .collect();

        let clip = open_contour(candidate.iter().map(|p| [p.x, p.y]));
        if subject.is_empty() || clip.len() < 3 {
            return None;
        }

        let shapes = subject.overlay(&vec![clip], OverlayRule::Intersect, self.fill_rule.into());
        let rings: Vec<Ring> = shapes
            .into_iter()
            .flatten()
            .filter(|contour| contour.len() >= 3)
            .map(|contour| contour.into_iter().map(Point::from).collect())
            .collect();

        if rings.is_empty() {
            None
        } else {
            Some(rings)
        }
    }
}
