//! Room cell construction from the Delaunay triangulation
//!
//! A room's Voronoi cell is the sampling square cut down by the perpendicular
//! bisector between the room and each of its Delaunay neighbors. Voronoi
//! neighbors are exactly Delaunay neighbors, so no other room can shrink the
//! cell further.

use glam::DVec2;

use crate::cell::RoomCell;

/// Build sorted neighbor lists from an undirected edge list
pub fn build_neighbor_lists(point_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); point_count];

    for &(a, b) in edges {
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }

    neighbors
}

/// Generate one cell per point, clipped to the axis-aligned box `[min, max]`
///
/// # Arguments
///
/// * `points` - Room positions
/// * `edges` - Delaunay edges over `points`
/// * `min` / `max` - Corners of the clipping box
///
/// # Returns
///
/// Vector of cells, one per input point, in point order
pub fn generate_cells(
    points: &[DVec2],
    edges: &[(usize, usize)],
    min: DVec2,
    max: DVec2,
) -> Vec<RoomCell> {
    let neighbor_lists = build_neighbor_lists(points.len(), edges);

    neighbor_lists
        .into_iter()
        .enumerate()
        .map(|(id, neighbors)| {
            let center = points[id];
            let mut polygon = vec![
                DVec2::new(min.x, min.y),
                DVec2::new(max.x, min.y),
                DVec2::new(max.x, max.y),
                DVec2::new(min.x, max.y),
            ];

            for &other in &neighbors {
                polygon = clip_to_bisector(&polygon, center, points[other]);
                if polygon.is_empty() {
                    break;
                }
            }

            RoomCell::new(id, center, neighbors, polygon)
        })
        .collect()
}

/// Keep the part of a convex polygon closer to `site` than to `other`
///
/// Sutherland-Hodgman against a single half-plane; vertex order is preserved.
fn clip_to_bisector(polygon: &[DVec2], site: DVec2, other: DVec2) -> Vec<DVec2> {
    let normal = other - site;
    let midpoint = (site + other) * 0.5;
    // Positive outside the kept half-plane
    let side = |p: DVec2| (p - midpoint).dot(normal);

    let mut clipped = Vec::with_capacity(polygon.len() + 1);

    for (i, &current) in polygon.iter().enumerate() {
        let previous = polygon[(i + polygon.len() - 1) % polygon.len()];
        let current_side = side(current);
        let previous_side = side(previous);

        if current_side <= 0.0 {
            if previous_side > 0.0 {
                clipped.push(intersect(previous, current, previous_side, current_side));
            }
            clipped.push(current);
        } else if previous_side <= 0.0 {
            clipped.push(intersect(previous, current, previous_side, current_side));
        }
    }

    clipped
}

fn intersect(from: DVec2, to: DVec2, from_side: f64, to_side: f64) -> DVec2 {
    let t = from_side / (from_side - to_side);
    from.lerp(to, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::generation::delaunay::triangulate;
    use crate::generation::points::sample_points;

    #[test]
    fn test_generate_cells() {
        let points = sample_points(100, 10.0, 42);
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
        let (min, max) = (DVec2::splat(-10.0), DVec2::splat(10.0));
        let cells = generate_cells(&points, &delaunay.edges, min, max);

        assert_eq!(cells.len(), 100);

        for cell in &cells {
            assert!(cell.vertex_count() >= 3, "Cell should have at least 3 vertices");
            assert!(cell.neighbor_count() > 0, "Cell should have neighbors");
            assert!(cell.contains(cell.center), "Cell should contain its room");
            assert!(cell.area() > 0.0, "Cell should be counter-clockwise");

            for vertex in &cell.vertices {
                assert!(vertex.abs().max_element() <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_cells_tile_region() {
        let points = sample_points(60, 5.0, 7);
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
        let cells = generate_cells(&points, &delaunay.edges, DVec2::splat(-5.0), DVec2::splat(5.0));

        let total: f64 = cells.iter().map(RoomCell::area).sum();
        assert!((total - 100.0).abs() < 1e-6, "cells cover {} of 100", total);
    }

    #[test]
    fn test_neighbor_symmetry() {
        let points = sample_points(50, 10.0, 12345);
        let delaunay = triangulate(&points, DuplicatePolicy::Merge).unwrap();
        let (min, max) = (DVec2::splat(-10.0), DVec2::splat(10.0));
        let cells = generate_cells(&points, &delaunay.edges, min, max);

        for cell in &cells {
            for &neighbor_id in &cell.neighbors {
                let neighbor = &cells[neighbor_id];
                assert!(
                    neighbor.is_neighbor_of(cell.id),
                    "Neighbor relationship should be symmetric"
                );
            }
        }
    }

    #[test]
    fn test_two_cells_split_at_bisector() {
        let points = [DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0)];
        let cells = generate_cells(&points, &[(0, 1)], DVec2::splat(-2.0), DVec2::splat(2.0));

        assert!((cells[0].area() - 8.0).abs() < 1e-12);
        assert!((cells[1].area() - 8.0).abs() < 1e-12);
        assert!(cells[0].vertices.iter().all(|v| v.x <= 0.0));
        assert!(cells[1].vertices.iter().all(|v| v.x >= 0.0));
    }

    #[test]
    fn test_build_neighbor_lists() {
        let lists = build_neighbor_lists(4, &[(0, 2), (1, 2), (0, 1), (2, 0)]);
        assert_eq!(lists[0], vec![1, 2]);
        assert_eq!(lists[1], vec![0, 2]);
        assert_eq!(lists[2], vec![0, 1]);
        assert!(lists[3].is_empty());
    }
}
