use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kurbo::{BezPath, Circle, Shape as _};

use cellcut::{
    clip::OverlayClipper, diagram::BoundedVoronoi, sample::UniformSampler, Cut, CutMode,
    Parameters, Pipeline, Shape,
};

fn selection() -> Vec<Shape> {
    let rect = BezPath::from_svg("M0,0 L300,0 L300,200 L0,200 Z").unwrap();
    let circle = Circle::new((450.0, 100.0), 90.0).to_path(0.1);
    vec![
        Shape::from_bez_path(&rect, Cut::outline(0.25)),
        Shape::from_bez_path(&circle, Cut::outline(0.25)),
    ]
}

fn generate(c: &mut Criterion) {
    let selection = selection();
    for (name, cut) in [
        ("branches", CutMode::Branches),
        ("patches", CutMode::Patches),
    ] {
        let params = Parameters {
            patches: 200,
            cut,
            ..Parameters::default()
        };
        c.bench_function(&format!("generate {name}"), |b| {
            let mut pipeline = Pipeline::with_collaborators(
                UniformSampler::seeded(0),
                BoundedVoronoi::new(),
                OverlayClipper::default(),
            );
            b.iter(|| black_box(pipeline.generate(&selection, &params).unwrap()))
        });
    }
}

fn voronoi(c: &mut Criterion) {
    use cellcut::{diagram::DiagramBuilder, sample::SiteSampler};

    let bounds = kurbo::Rect::new(0.0, 0.0, 540.0, 200.0);
    let sites = UniformSampler::seeded(0).sample(500, bounds);
    c.bench_function("voronoi 500", |b| {
        b.iter(|| black_box(BoundedVoronoi::new().build(&sites, bounds)))
    });
}

criterion_group!(benches, generate, voronoi);
criterion_main!(benches);
