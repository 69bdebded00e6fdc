//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;
use kurbo::Vec2;

use crate::{generators, Point, Ring};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(-1e3, 1e3, u)
}

/// Generate a float in some range, but give it a chance to be within the
/// quantization grid of another float.
fn another_float_in_range(
    orig: f64,
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let close: bool = u.arbitrary()?;
    if close {
        let nudge = float_in_range(-1e-6, 1e-6, u)?;
        Ok((orig + nudge).clamp(start, end))
    } else {
        float_in_range(start, end, u)
    }
}

fn handle(u: &mut Unstructured<'_>) -> Result<Option<Vec2>, arbitrary::Error> {
    let has_handle: bool = u.arbitrary()?;
    if has_handle {
        Ok(Some(Vec2::new(float(u)?, float(u)?)))
    } else {
        Ok(None)
    }
}

/// Generate an arbitrary point, possibly with handles.
pub fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    let p = Point::new(float(u)?, float(u)?);
    Ok(p.with_handles(handle(u)?, handle(u)?))
}

/// Generate an arbitrary point that has a chance to be close to `orig`.
pub fn another_point(orig: &Point, u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    let x = another_float_in_range(orig.x, -1e3, 1e3, u)?;
    let y = another_float_in_range(orig.y, -1e3, 1e3, u)?;
    Ok(Point::new(x, y).with_handles(handle(u)?, handle(u)?))
}

/// Generate an arbitrary ring of up to eight points.
///
/// The ring may be empty, may be closed, and may have (nearly) repeated points.
pub fn ring(u: &mut Unstructured<'_>) -> Result<Ring, arbitrary::Error> {
    let len = u.int_in_range(0..=8)?;
    let mut ret = Ring::with_capacity(len + 1);
    for _ in 0..len {
        let p = match ret.last() {
            Some(prev) => another_point(prev, u)?,
            None => point(u)?,
        };
        ret.push(p);
    }

    let close: bool = u.arbitrary()?;
    if close {
        crate::close::close_ring(&mut ret);
    }
    Ok(ret)
}

/// Rotates a closed ring so that it starts at its `k`th point.
pub fn rotate_ring(ring: &mut Ring, k: usize) {
    if ring.len() < 3 {
        return;
    }
    ring.pop();
    let len = ring.len();
    ring.rotate_left(k % len);
    ring.push(ring[0]);
}

/// Generate an arbitrary mesh of closed, consistently wound cells.
///
/// The cells come in an arbitrary order, and each one starts at an arbitrary
/// vertex.
pub fn mesh(u: &mut Unstructured<'_>) -> Result<Vec<Ring>, arbitrary::Error> {
    let fan: bool = u.arbitrary()?;
    let size = float_in_range(0.01, 1e3, u)?;
    let mut cells = if fan {
        let n = u.int_in_range(3..=12)?;
        generators::fan(n, size)
    } else {
        let n = u.int_in_range(1..=6)?;
        let jitter = float_in_range(0.0, 0.3, u)? * size;
        let seed: u64 = u.arbitrary()?;
        generators::jittered_grid(n, size, jitter, seed)
    };

    for i in (1..cells.len()).rev() {
        let j = u.int_in_range(0..=i)?;
        cells.swap(i, j);
    }

    let clockwise: bool = u.arbitrary()?;
    for cell in &mut cells {
        if clockwise {
            cell.reverse();
        }
        let k = u.int_in_range(0..=cell.len())?;
        rotate_ring(cell, k);
    }
    Ok(cells)
}
