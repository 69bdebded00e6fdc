//! Scattering sites over a region.

use kurbo::Rect;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Point;

/// Something that can pick sites inside a rectangle.
pub trait SiteSampler {
    /// Returns `count` points inside `bounds`.
    ///
    /// The points need not be distinct.
    fn sample(&mut self, count: usize, bounds: Rect) -> Vec<Point>;
}

/// Samples sites independently and uniformly at random.
#[derive(Clone, Debug)]
pub struct UniformSampler<R = StdRng> {
    rng: R,
}

impl UniformSampler<StdRng> {
    /// A sampler seeded from the operating system, which gives different
    /// sites every time.
    pub fn from_os_rng() -> Self {
        UniformSampler::new(StdRng::from_os_rng())
    }

    /// A sampler that gives the same sequence of sites for the same seed.
    pub fn seeded(seed: u64) -> Self {
        UniformSampler::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for UniformSampler<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> UniformSampler<R> {
    /// A sampler drawing from the given random number generator.
    pub fn new(rng: R) -> Self {
        UniformSampler { rng }
    }
}

impl<R: Rng> SiteSampler for UniformSampler<R> {
    fn sample(&mut self, count: usize, bounds: Rect) -> Vec<Point> {
        let width = bounds.width();
        let height = bounds.height();
        (0..count)
            .map(|_| {
                let x = self.rng.random::<f64>() * width + bounds.x0;
                let y = self.rng.random::<f64>() * height + bounds.y0;
                Point::new(x, y)
            })
            .collect()
    }
}
