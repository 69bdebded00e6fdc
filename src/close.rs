//! Closing cell boundaries into loops.

use crate::{geom::is_closed, Ring, Shape};

/// Closes a ring by appending a copy of its first point, unless it is closed already.
///
/// "Closed" means that the first and last points are fully equal, handles
/// included. A ring that ends at its starting coordinates but with different
/// handles gets a new closing point.
///
/// Rings with fewer than two points are left alone.
pub fn close_ring(ring: &mut Ring) {
    if ring.len() >= 2 && !is_closed(ring) {
        let first = ring[0];
        ring.push(first);
    }
}

/// Closes every ring of a shape, and drops the rings that are too short to close.
///
/// Returns `None` if no rings are left.
pub fn close_shape(mut shape: Shape) -> Option<Shape> {
    for ring in &mut shape.geometry {
        close_ring(ring);
    }
    shape.geometry.retain(|ring| ring.len() >= 2);

    if shape.geometry.is_empty() {
        None
    } else {
        Some(shape)
    }
}
