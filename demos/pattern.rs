use std::path::PathBuf;

use clap::{Args, Parser};
use kurbo::{BezPath, Circle, Shape as _};

use cellcut::{
    clip::OverlayClipper, diagram::BoundedVoronoi, sample::UniformSampler, shape::dump_svg, Cut,
    CutMode, Parameters, Pipeline, Shape,
};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    Square,
    Circle,
    TwoSquares,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Mode {
    Branches,
    Patches,
}

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    output: PathBuf,

    #[command(flatten)]
    input: Input,

    /// A YAML file of parameters, keyed by their display names.
    #[arg(long, conflicts_with_all = ["patches", "cut"])]
    params: Option<PathBuf>,

    #[arg(long)]
    patches: Option<u32>,

    #[arg(long)]
    cut: Option<Mode>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0)]
    lloyd: usize,

    #[arg(long, default_value_t = 0.25)]
    depth: f64,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// A file containing SVG path data.
    input: Option<PathBuf>,

    #[arg(long)]
    example: Option<Example>,
}

fn get_selection(input: &Input, depth: f64) -> anyhow::Result<Vec<Shape>> {
    let cut = Cut::outline(depth);
    match (&input.input, &input.example) {
        (Some(path), None) => {
            let data = std::fs::read_to_string(path)?;
            let path = BezPath::from_svg(data.trim())?;
            Ok(vec![Shape::from_bez_path(&path, cut)])
        }
        (None, Some(example)) => {
            let paths = match example {
                Example::Square => vec![BezPath::from_svg("M0,0 L100,0 L100,100 L0,100 Z")?],
                Example::Circle => vec![Circle::new((50.0, 50.0), 50.0).to_path(0.01)],
                Example::TwoSquares => vec![
                    BezPath::from_svg("M0,0 L100,0 L100,100 L0,100 Z")?,
                    BezPath::from_svg("M150,0 L250,0 L250,100 L150,100 Z")?,
                ],
            };
            Ok(paths
                .iter()
                .map(|p| Shape::from_bez_path(p, cut))
                .collect())
        }
        _ => unreachable!(),
    }
}

fn get_params(args: &Cli) -> anyhow::Result<Parameters> {
    if let Some(path) = &args.params {
        let input = std::fs::read_to_string(path)?;
        return Ok(serde_yaml::from_str(&input)?);
    }

    let mut params = Parameters::default();
    if let Some(patches) = args.patches {
        params.patches = patches;
    }
    if let Some(cut) = args.cut {
        params.cut = match cut {
            Mode::Branches => CutMode::Branches,
            Mode::Patches => CutMode::Patches,
        };
    }
    Ok(params)
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let selection = get_selection(&args.input, args.depth)?;
    let params = get_params(&args)?;

    let sampler = match args.seed {
        Some(seed) => UniformSampler::seeded(seed),
        None => UniformSampler::from_os_rng(),
    };
    let mut pipeline = Pipeline::with_collaborators(
        sampler,
        BoundedVoronoi::new().with_lloyd_iterations(args.lloyd),
        OverlayClipper::default(),
    );
    let output = pipeline.generate(&selection, &params)?;

    let bbox = cellcut::shape::bounding_box(&selection);
    let stroke_width = bbox.width().max(bbox.height()) / 512.0;
    let mut all = selection;
    all.extend(output);
    svg::save(&args.output, &dump_svg(&all, stroke_width))?;
    Ok(())
}
