//! Weighted edges between rooms

use glam::DVec2;

/// An undirected, weighted connection between two points
///
/// Endpoints are indices into the point sequence the edge was built from.
/// The weight is the Euclidean length between the two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint
    pub a: usize,
    /// Second endpoint
    pub b: usize,
    /// Euclidean length between the endpoints
    pub weight: f64,
}

impl Edge {
    /// Create an edge with an explicit weight
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        debug_assert_ne!(a, b, "edge endpoints must differ");
        Self { a, b, weight }
    }

    /// Create an edge weighted by the distance between two points
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for `points`.
    pub fn between(points: &[DVec2], a: usize, b: usize) -> Self {
        Self::new(a, b, points[a].distance(points[b]))
    }

    /// Endpoints ordered smallest first, identifying the undirected pair
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        ordered(self.a, self.b)
    }

    /// Whether this edge joins `u` and `v` in either direction
    #[inline]
    pub fn connects(&self, u: usize, v: usize) -> bool {
        self.key() == ordered(u, v)
    }

    /// The endpoint opposite to `vertex`, if `vertex` is an endpoint
    #[inline]
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Order an index pair smallest first
#[inline]
pub(crate) fn ordered(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Sum of the weights of a set of edges
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}
