//! Prim-style spanning tree grown over the complete graph

use glam::DVec2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

use super::SpanningTree;
use crate::edge::Edge;

/// Candidate edge from the tree to a point outside it
#[derive(Debug, Clone, Copy)]
struct Frontier {
    weight: f64,
    from: usize,
    to: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so BinaryHeap pops the lightest edge; ties go to the lower indices
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.from.cmp(&self.from))
    }
}

/// Build a minimum spanning tree over the complete graph of `points`
///
/// Starts at point 0 and repeatedly attaches the closest point outside the
/// tree. A frontier edge is only pushed when it improves on the best known
/// connection of its far endpoint; stale entries are discarded when popped.
/// Always spans, so it works without a triangulation and for any point count.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use rust_map_generation::mst::prim;
///
/// let points = [DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0), DVec2::new(3.0, 4.0)];
/// let tree = prim(&points);
/// assert!(tree.is_spanning());
/// assert_eq!(tree.total_weight(), 7.0);
/// ```
pub fn prim(points: &[DVec2]) -> SpanningTree {
    let point_count = points.len();
    if point_count < 2 {
        return SpanningTree::empty(point_count);
    }

    let mut visited = vec![false; point_count];
    let mut best = vec![f64::INFINITY; point_count];
    let mut frontier = BinaryHeap::with_capacity(point_count);
    let mut edges = Vec::with_capacity(point_count - 1);

    visited[0] = true;
    push_from(0, points, &visited, &mut best, &mut frontier);

    while let Some(Frontier { weight, from, to }) = frontier.pop() {
        if visited[to] {
            trace!(from, to, "edge ignored because it creates a cycle");
            continue;
        }

        trace!(from, to, weight, "accepted edge");
        visited[to] = true;
        edges.push(Edge::new(from, to, weight));

        if edges.len() == point_count - 1 {
            break;
        }
        push_from(to, points, &visited, &mut best, &mut frontier);
    }

    let tree = SpanningTree::from_forest(edges, point_count);
    debug!(
        edges = tree.len(),
        weight = tree.total_weight(),
        "prim spanning tree complete"
    );
    tree
}

/// Push an edge from `from` to every unvisited point it brings closer to the tree
fn push_from(
    from: usize,
    points: &[DVec2],
    visited: &[bool],
    best: &mut [f64],
    frontier: &mut BinaryHeap<Frontier>,
) {
    let origin = points[from];

    for (to, point) in points.iter().enumerate() {
        if visited[to] {
            continue;
        }

        let weight = origin.distance(*point);
        if weight < best[to] {
            best[to] = weight;
            frontier.push(Frontier { weight, from, to });
        }
    }
}
