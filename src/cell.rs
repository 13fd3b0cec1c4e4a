//! Room Cell Structure
//!
//! The Voronoi region of a single room, clipped to the sampling square.

use glam::DVec2;

/// The region of the map closer to one room than to any other
///
/// Each cell represents:
/// - The room it belongs to (by index into the layout's points)
/// - The room position
/// - Its Delaunay neighbors, which are exactly the rooms whose cells share a border
/// - The boundary polygon, clipped to the sampling square
///
/// Cells are only computed when `MapConfig::room_cells` is enabled and the
/// points could be triangulated.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCell {
    /// Index of the room this cell belongs to
    pub id: usize,

    /// Room position
    pub center: DVec2,

    /// Indices of rooms sharing a Delaunay edge with this room (sorted)
    pub neighbors: Vec<usize>,

    /// Boundary polygon, counter-clockwise
    pub vertices: Vec<DVec2>,
}

impl RoomCell {
    /// Create a new room cell
    pub fn new(id: usize, center: DVec2, neighbors: Vec<usize>, vertices: Vec<DVec2>) -> Self {
        Self {
            id,
            center,
            neighbors,
            vertices,
        }
    }

    /// Get the number of neighboring rooms
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this cell borders another room's cell
    #[inline]
    pub fn is_neighbor_of(&self, other_id: usize) -> bool {
        self.neighbors.binary_search(&other_id).is_ok()
    }

    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Area of the boundary polygon (shoelace formula)
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }

        let n = self.vertices.len();
        let twice_area: f64 = (0..n)
            .map(|i| self.vertices[i].perp_dot(self.vertices[(i + 1) % n]))
            .sum();

        twice_area * 0.5
    }

    /// Whether `position` lies inside or on the boundary of the cell
    pub fn contains(&self, position: DVec2) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let n = self.vertices.len();
        let scale = self
            .vertices
            .iter()
            .fold(1.0_f64, |acc, v| acc.max(v.abs().max_element()));
        let tolerance = 1e-9 * scale * scale;

        // Convex and counter-clockwise: inside means left of every edge
        (0..n).all(|i| {
            let start = self.vertices[i];
            let end = self.vertices[(i + 1) % n];
            (end - start).perp_dot(position - start) >= -tolerance
        })
    }
}
