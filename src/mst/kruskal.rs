//! Kruskal-style spanning tree over a candidate edge list

use glam::DVec2;
use tracing::{debug, trace, warn};

use super::{DisjointSet, SpanningTree};
use crate::edge::Edge;
use crate::error::{MapGenError, Result};

/// Build a minimum spanning forest from candidate edges
///
/// Candidates are sorted by squared length with a stable sort, so equal
/// lengths keep their input order and the output is deterministic. An edge
/// is accepted when its endpoints are in different components. Duplicate
/// candidates and self loops are harmless; they are discarded as cycles.
///
/// A disconnected candidate graph yields a [`SpanningTree`] whose status is
/// `Partial`; call [`SpanningTree::into_spanning`] to treat that as an error.
///
/// # Errors
///
/// Returns `InvalidEdge` if a candidate references a point outside `points`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use rust_map_generation::mst::kruskal;
///
/// let points = [DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0), DVec2::new(3.0, 4.0)];
/// let tree = kruskal(&points, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 7.0);
/// ```
pub fn kruskal(points: &[DVec2], candidates: &[(usize, usize)]) -> Result<SpanningTree> {
    let point_count = points.len();

    if let Some(&(a, b)) = candidates
        .iter()
        .find(|&&(a, b)| a >= point_count || b >= point_count)
    {
        return Err(MapGenError::InvalidEdge { a, b, point_count });
    }

    let mut sorted: Vec<(f64, usize, usize)> = candidates
        .iter()
        .map(|&(a, b)| (points[a].distance_squared(points[b]), a, b))
        .collect();
    sorted.sort_by(|x, y| x.0.total_cmp(&y.0));

    let target = point_count.saturating_sub(1);
    let mut sets = DisjointSet::new(point_count);
    let mut edges = Vec::with_capacity(target);

    for (_, a, b) in sorted {
        if edges.len() == target {
            break;
        }

        if sets.union(a, b) {
            let edge = Edge::between(points, a, b);
            trace!(a, b, weight = edge.weight, "accepted edge");
            edges.push(edge);
        } else {
            trace!(a, b, "edge ignored because it creates a cycle");
        }
    }

    let tree = SpanningTree::from_forest(edges, point_count);
    if tree.is_spanning() {
        debug!(
            edges = tree.len(),
            weight = tree.total_weight(),
            "kruskal spanning tree complete"
        );
    } else {
        warn!(
            edges = tree.len(),
            expected = tree.expected_edge_count(),
            components = tree.components(),
            "candidate graph is disconnected, kruskal produced a forest"
        );
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::generation::{sample_points, triangulate};
    use crate::mst::test_support::{assert_acyclic, assert_spanning_tree};
    use crate::mst::{complete_graph_edges, TreeStatus};

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square_never_uses_diagonal() {
        let points = square();
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
        let tree = kruskal(&points, &delaunay.edges).unwrap();

        assert_spanning_tree(&tree);
        assert!((tree.total_weight() - 30.0).abs() < 1e-9);
        for edge in tree.edges() {
            assert!((edge.weight - 10.0).abs() < 1e-9, "diagonal {:?} in tree", edge);
        }
    }

    #[test]
    fn test_edge_weights_are_point_distances() {
        let points = sample_points(60, 100.0, 5);
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
        let tree = kruskal(&points, &delaunay.edges).unwrap();

        for edge in tree.edges() {
            assert_eq!(edge.weight, points[edge.a].distance(points[edge.b]));
        }
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let points = square();
        let candidates = [(0, 3), (2, 3), (0, 1), (1, 2), (0, 2)];
        let tree = kruskal(&points, &candidates).unwrap();

        let keys: Vec<(usize, usize)> = tree.edges().iter().map(Edge::key).collect();
        assert_eq!(keys, vec![(0, 3), (2, 3), (0, 1)]);
    }

    #[test]
    fn test_random_triangulation_spans() {
        for seed in [1, 2, 3] {
            let points = sample_points(250, 100.0, seed);
            let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
            let tree = kruskal(&points, &delaunay.edges).unwrap();
            assert_spanning_tree(&tree);
        }
    }

    #[test]
    fn test_delaunay_matches_complete_graph() {
        // The Euclidean MST is a subgraph of the Delaunay triangulation
        let points = sample_points(80, 50.0, 11);
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();

        let sparse = kruskal(&points, &delaunay.edges).unwrap();
        let dense = kruskal(&points, &complete_graph_edges(points.len())).unwrap();

        assert!((sparse.total_weight() - dense.total_weight()).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_candidates_are_harmless() {
        let points = square();
        let candidates = [(0, 1), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2), (0, 0)];
        let tree = kruskal(&points, &candidates).unwrap();

        assert_spanning_tree(&tree);
        assert!((tree.total_weight() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_disconnected_candidates_give_partial_forest() {
        let points = square();
        let tree = kruskal(&points, &[(0, 1), (2, 3)]).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.status(), TreeStatus::Partial { components: 2 });
        assert_acyclic(&tree);
        assert!(matches!(
            tree.into_spanning(),
            Err(MapGenError::DisconnectedCandidateGraph { components: 2, .. })
        ));
    }

    #[test]
    fn test_degenerate_point_counts() {
        let tree = kruskal(&[], &[]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.is_spanning());

        let tree = kruskal(&[DVec2::new(1.0, 1.0)], &[]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_out_of_range_edge() {
        let points = square();
        let err = kruskal(&points, &[(0, 1), (2, 9)]).unwrap_err();
        assert_eq!(
            err,
            MapGenError::InvalidEdge {
                a: 2,
                b: 9,
                point_count: 4,
            }
        );
    }
}
