//! A record of the directed edges that have already been emitted.

use std::collections::HashSet;

use crate::{key::EdgeKey, Point};

/// A grow-only set of directed edges, keyed up to quantization.
///
/// Neighboring cells wind in the same rotational direction, so they traverse
/// the edge they share in opposite directions. That's why the query is
/// asymmetric: [`EdgeRegistry::seen`] asks about the *reverse* of the edge
/// that's about to be added, while [`EdgeRegistry::record`] stores the edge
/// as given. An undirected set would instead throw away the first occurrence
/// of an edge along with the second.
///
/// A registry is meant to live for a single run of the deduplicator.
#[derive(Clone, Debug, Default)]
pub struct EdgeRegistry {
    edges: HashSet<EdgeKey>,
}

impl EdgeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Has the edge `to -> from` been recorded?
    ///
    /// Call this with the edge `from -> to` that you're about to add.
    pub fn seen(&self, from: &Point, to: &Point) -> bool {
        self.edges.contains(&EdgeKey::new(to, from))
    }

    /// Records the edge `from -> to`. Recording an edge twice is harmless.
    pub fn record(&mut self, from: &Point, to: &Point) {
        self.edges.insert(EdgeKey::new(from, to));
    }

    /// The number of distinct directed edges recorded so far.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Have we recorded nothing yet?
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::tests::p;

    #[test]
    fn only_the_reverse_is_seen() {
        let mut reg = EdgeRegistry::new();
        let a = p(1.0, 0.0);
        let b = p(1.0, 1.0);

        assert!(!reg.seen(&a, &b));
        reg.record(&a, &b);
        assert!(!reg.seen(&a, &b));
        assert!(reg.seen(&b, &a));
    }

    #[test]
    fn recording_is_idempotent() {
        let mut reg = EdgeRegistry::new();
        assert!(reg.is_empty());

        reg.record(&p(0.0, 0.0), &p(1.0, 0.0));
        reg.record(&p(0.0, 0.0), &p(1.0, 0.0));
        reg.record(&p(0.0, 0.0), &p(1.0000001, 0.0));
        assert_eq!(reg.len(), 1);

        reg.record(&p(1.0, 0.0), &p(0.0, 0.0));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn noise_below_the_grid_is_seen_through() {
        let mut reg = EdgeRegistry::new();
        reg.record(&p(0.25, 0.75), &p(2.5, 3.5));
        assert!(reg.seen(&p(2.5000001, 3.5), &p(0.25, 0.7500001)));
    }
}
