//! Shapes: geometry together with instructions for cutting it.

use kurbo::{BezPath, Rect, Shape as _};

use crate::geom::{edges, ring_to_bez, rings_from_bez, Edge, Ring};

/// What the tool does with a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutKind {
    /// Cut along the shape's outline.
    Outline,
    /// Clear out the shape's interior.
    Fill,
}

/// Where the tool runs relative to an outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineStyle {
    /// The center of the bit follows the path.
    OnPath,
    /// The bit runs just outside the path.
    Outside,
    /// The bit runs just inside the path.
    Inside,
}

/// Cutting instructions attached to a shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cut {
    /// What kind of cut to make.
    #[serde(rename = "type")]
    pub kind: CutKind,
    /// Where the bit runs relative to the path.
    pub outline_style: OutlineStyle,
    /// Whether to leave holding tabs in the cut.
    pub tab_preference: bool,
    /// How deep to cut.
    pub depth: f64,
}

impl Cut {
    /// An on-path outline cut without tabs.
    ///
    /// This is what every generated shape gets.
    pub fn outline(depth: f64) -> Self {
        Cut {
            kind: CutKind::Outline,
            outline_style: OutlineStyle::OnPath,
            tab_preference: false,
            depth,
        }
    }
}

/// One or more sub-paths, cut the same way.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shape {
    /// The sub-paths, each of which may be open or closed.
    pub geometry: Vec<Ring>,
    /// How to cut them.
    pub cut: Cut,
}

impl Shape {
    /// Creates a new shape.
    pub fn new(geometry: Vec<Ring>, cut: Cut) -> Self {
        Shape { geometry, cut }
    }

    /// Creates a shape from a `kurbo` path, one sub-path per `MoveTo`.
    pub fn from_bez_path(path: &BezPath, cut: Cut) -> Self {
        Shape::new(rings_from_bez(path), cut)
    }

    /// Converts all sub-paths into a single `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        self.geometry
            .iter()
            .flat_map(|ring| ring_to_bez(ring).elements().to_vec())
            .collect()
    }

    /// Iterates over the edges of every sub-path, in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.geometry.iter().flat_map(|ring| edges(ring))
    }

    /// The smallest rectangle containing every sub-path, control points included.
    ///
    /// A shape without points has an "inverted" infinite bounding box, which
    /// is the identity for `Rect::union`.
    pub fn bounding_box(&self) -> Rect {
        self.geometry
            .iter()
            .filter(|ring| !ring.is_empty())
            .map(|ring| ring_to_bez(ring).bounding_box())
            .fold(empty_rect(), |acc, r| acc.union(r))
    }
}

fn empty_rect() -> Rect {
    Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    )
}

/// The bounding box of a collection of shapes.
pub fn bounding_box<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Rect {
    shapes
        .into_iter()
        .fold(empty_rect(), |acc, s| acc.union(s.bounding_box()))
}

/// Is this rectangle usable as the region to scatter sites in?
///
/// It has to be finite, and have positive width and height.
pub fn is_usable_region(rect: Rect) -> bool {
    [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite())
        && rect.width() > 0.0
        && rect.height() > 0.0
}

/// Draws a collection of shapes as unfilled paths in an SVG document.
#[cfg(feature = "debug-svg")]
pub fn dump_svg(shapes: &[Shape], stroke_width: f64) -> svg::Document {
    let colors = [
        "#005F73", "#0A9396", "#94D2BD", "#E9D8A6", "#EE9B00", "#CA6702", "#BB3E03", "#AE2012",
        "#9B2226",
    ];

    let bbox = bounding_box(shapes);
    let pad = stroke_width * 4.0;
    let mut document = svg::Document::new();
    if is_usable_region(bbox) {
        document = document.set(
            "viewBox",
            (
                bbox.x0 - pad,
                bbox.y0 - pad,
                bbox.width() + 2.0 * pad,
                bbox.height() + 2.0 * pad,
            ),
        );
    }

    for (idx, shape) in shapes.iter().enumerate() {
        let path = svg::node::element::Path::new()
            .set("d", shape.to_bez_path().to_svg())
            .set("stroke", colors[idx % colors.len()])
            .set("stroke-width", stroke_width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
            .set("fill", "none");
        document = document.add(path);
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::tests::p;

    fn unit_square() -> Ring {
        vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ]
    }

    #[test]
    fn bounding_box_of_many() {
        let a = Shape::new(vec![unit_square()], Cut::outline(0.1));
        let b = Shape::new(vec![vec![p(3.0, -2.0), p(4.0, 0.5)]], Cut::outline(0.2));
        assert_eq!(bounding_box([&a, &b]), Rect::new(0.0, -2.0, 4.0, 1.0));
    }

    #[test]
    fn empty_selection_is_unusable() {
        let empty = Shape::new(vec![vec![]], Cut::outline(0.1));
        let nothing: Vec<Shape> = Vec::new();
        assert!(!is_usable_region(bounding_box([&empty])));
        assert!(!is_usable_region(bounding_box(&nothing)));
    }

    #[test]
    fn flat_selection_is_unusable() {
        let line = Shape::new(vec![vec![p(0.0, 1.0), p(5.0, 1.0)]], Cut::outline(0.1));
        assert!(!is_usable_region(line.bounding_box()));
        assert!(is_usable_region(Rect::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn edges_do_not_cross_sub_paths() {
        let shape = Shape::new(
            vec![unit_square(), vec![p(5.0, 5.0), p(6.0, 5.0)]],
            Cut::outline(0.1),
        );
        assert_eq!(shape.edges().count(), 5);
    }

    #[test]
    fn bez_round_trip_keeps_sub_paths() {
        let shape = Shape::new(
            vec![unit_square(), vec![p(5.0, 5.0), p(6.0, 5.0)]],
            Cut::outline(0.1),
        );
        let back = Shape::from_bez_path(&shape.to_bez_path(), shape.cut);
        assert_eq!(back, shape);
    }

    #[test]
    fn cut_uses_host_field_names() {
        let cut: Cut = serde_yaml::from_str(
            "type: outline\noutlineStyle: on-path\ntabPreference: false\ndepth: 0.25\n",
        )
        .unwrap();
        assert_eq!(cut, Cut::outline(0.25));

        let fill: Cut = serde_yaml::from_str(
            "type: fill\noutlineStyle: inside\ntabPreference: true\ndepth: 1.0\n",
        )
        .unwrap();
        assert_eq!(fill.kind, CutKind::Fill);
        assert_eq!(fill.outline_style, OutlineStyle::Inside);
    }

    #[test]
    fn cut_rejects_unknown_fields() {
        let res: Result<Cut, _> = serde_yaml::from_str(
            "type: outline\noutlineStyle: on-path\ntabPreference: false\ndepth: 0.25\ncolor: red\n",
        );
        assert!(res.is_err());
    }
}
