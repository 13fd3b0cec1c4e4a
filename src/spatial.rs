//! Spatial indexing for fast position-to-room lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a 2D KD-tree for nearest-room queries
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build spatial index from room positions
    ///
    /// Returns `None` for an empty slice, which has no nearest room.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_map_generation::*;
    /// use glam::DVec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let rooms = vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(10.0, 0.0),
    ///     DVec2::new(0.0, 10.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&rooms).unwrap();
    /// assert_eq!(index.find_nearest(DVec2::new(9.0, 1.0)), 1);
    /// # }
    /// ```
    pub fn new(rooms: &[DVec2]) -> Option<Self> {
        if rooms.is_empty() {
            return None;
        }

        let points: Vec<[f64; 2]> = rooms.iter().map(|r| [r.x, r.y]).collect();

        Some(Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        })
    }

    /// Index of the room closest to `position`
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let rooms = vec![
            DVec2::new(100.0, 0.0),
            DVec2::new(0.0, 100.0),
            DVec2::new(-100.0, 0.0),
            DVec2::new(0.0, -100.0),
        ];

        let index = SpatialIndex::new(&rooms).unwrap();

        assert_eq!(index.find_nearest(DVec2::new(90.0, 10.0)), 0);
        assert_eq!(index.find_nearest(DVec2::new(5.0, 95.0)), 1);
        assert_eq!(index.find_nearest(DVec2::new(-80.0, 0.0)), 2);
        assert_eq!(index.find_nearest(DVec2::new(10.0, -60.0)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let rooms = vec![DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)];
        let index = SpatialIndex::new(&rooms).unwrap();

        assert_eq!(index.find_nearest(rooms[0]), 0);
        assert_eq!(index.find_nearest(rooms[1]), 1);
    }

    #[test]
    fn test_spatial_index_empty() {
        assert!(SpatialIndex::new(&[]).is_none());
    }
}
