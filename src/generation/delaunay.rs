//! Planar Delaunay triangulation adapter
//!
//! Thin wrapper around spade's incremental Delaunay triangulation. The
//! library does the geometry; this module maps its vertex handles back to
//! input indices, applies the duplicate policy and flattens the triangles
//! into a deduplicated edge list.

use glam::DVec2;
use spade::{DelaunayTriangulation, Point2, Triangulation as _};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::DuplicatePolicy;
use crate::edge::ordered;
use crate::error::TriangulationFailure;

/// An input point unified with an earlier point at the same location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedVertex {
    /// Input index of the dropped duplicate
    pub index: usize,
    /// Input index of the point that kept the location
    pub kept: usize,
}

/// Result of Delaunay triangulation
///
/// All indices refer to the input point sequence. Merged duplicates never
/// appear in `triangles` or `edges`.
#[derive(Debug, Clone, Default)]
pub struct DelaunayResult {
    /// Triangle corners, counter-clockwise
    pub triangles: Vec<[usize; 3]>,
    /// Undirected triangle sides, each pair once and ordered smallest first
    pub edges: Vec<(usize, usize)>,
    /// Inputs that were unified with an earlier point
    pub merged: Vec<MergedVertex>,
}

impl DelaunayResult {
    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of distinct edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether any input point was merged away
    #[inline]
    pub fn has_merged_vertices(&self) -> bool {
        !self.merged.is_empty()
    }
}

/// Compute the Delaunay triangulation of a 2D point set
///
/// # Errors
///
/// - `TooFewPoints` if fewer than 3 distinct points are available
/// - `Collinear` if no triangle can be formed
/// - `InvalidCoordinate` if the library rejects a coordinate
/// - `DuplicateVertex` if two points coincide under `DuplicatePolicy::Reject`
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use rust_map_generation::generation::triangulate;
/// use rust_map_generation::DuplicatePolicy;
///
/// let points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ];
/// let result = triangulate(&points, DuplicatePolicy::Merge).unwrap();
/// assert_eq!(result.triangle_count(), 2);
/// assert_eq!(result.edge_count(), 5);
/// ```
pub fn triangulate(
    points: &[DVec2],
    policy: DuplicatePolicy,
) -> Result<DelaunayResult, TriangulationFailure> {
    if points.len() < 3 {
        return Err(TriangulationFailure::TooFewPoints { count: points.len() });
    }

    let mut delaunay: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();

    // Vertex handle index -> input index of the point that created the vertex
    let mut owners: Vec<usize> = Vec::with_capacity(points.len());
    let mut merged = Vec::new();

    for (index, point) in points.iter().enumerate() {
        let handle = delaunay
            .insert(Point2::new(point.x, point.y))
            .map_err(|err| TriangulationFailure::InvalidCoordinate {
                index,
                reason: format!("{:?}", err),
            })?;

        let vertex = handle.index();
        if vertex == owners.len() {
            owners.push(index);
            continue;
        }

        let existing = owners[vertex];
        match policy {
            DuplicatePolicy::Merge => {
                trace!(index, kept = existing, "merged duplicate vertex");
                merged.push(MergedVertex { index, kept: existing });
            }
            DuplicatePolicy::Reject => {
                return Err(TriangulationFailure::DuplicateVertex { index, existing });
            }
        }
    }

    if owners.len() < 3 {
        return Err(TriangulationFailure::TooFewPoints { count: owners.len() });
    }
    if delaunay.num_inner_faces() == 0 {
        return Err(TriangulationFailure::Collinear { count: owners.len() });
    }

    let triangles: Vec<[usize; 3]> = delaunay
        .inner_faces()
        .map(|face| face.vertices().map(|v| owners[v.fix().index()]))
        .collect();

    let edges = triangle_edges(&triangles);

    debug!(
        points = points.len(),
        vertices = owners.len(),
        triangles = triangles.len(),
        edges = edges.len(),
        merged = merged.len(),
        "triangulated point set"
    );

    Ok(DelaunayResult {
        triangles,
        edges,
        merged,
    })
}

/// Flatten triangles into their sides, keeping each undirected pair once
///
/// Pairs are ordered smallest index first and appear in the order they are
/// first met, so the output is deterministic for a fixed triangle list.
pub fn triangle_edges(triangles: &[[usize; 3]]) -> Vec<(usize, usize)> {
    let mut seen = HashSet::with_capacity(triangles.len() * 2);
    let mut edges = Vec::with_capacity(triangles.len() * 3 / 2 + 2);

    for &[a, b, c] in triangles {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = ordered(u, v);
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }

    edges
}
