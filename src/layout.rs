//! Layout: the finished rooms and paths of one generation run

use glam::DVec2;
use std::collections::{HashSet, VecDeque};
use tracing::info;

use crate::cell::RoomCell;
use crate::config::MapConfig;
use crate::edge::{total_weight, Edge};
use crate::error::Result;
use crate::generation::{build_neighbor_lists, generate_raw_layout, MergedVertex, RawLayout};
use crate::mst::SpanningTree;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A path between two rooms with its endpoint coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// Tree edge this path was built from
    pub edge: Edge,
    /// Position of room `edge.a`
    pub start: DVec2,
    /// Position of room `edge.b`
    pub end: DVec2,
}

impl PathSegment {
    /// Halfway point between the two rooms
    #[inline]
    pub fn midpoint(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }

    /// Distance between the two rooms
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit direction from `start` to `end` (zero for coincident rooms)
    #[inline]
    pub fn direction(&self) -> DVec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Angle of the path from the +x axis, in radians within `[-π, π]`
    #[inline]
    pub fn heading(&self) -> f64 {
        let delta = self.end - self.start;
        delta.y.atan2(delta.x)
    }
}

/// An immutable room-and-path map
///
/// Holds the room positions, the spanning tree of paths between them, and
/// optionally each room's Voronoi cell.
///
/// # Room indices
///
/// Rooms are numbered by their position in [`Layout::points`]. With
/// `DuplicatePolicy::Merge`, sampled points that duplicated an earlier point
/// are dropped and the remaining rooms are renumbered in their original order;
/// [`Layout::merged_vertices`] lists the dropped sample indices.
///
/// # Examples
///
/// ```
/// use rust_map_generation::*;
///
/// let config = MapConfigBuilder::new()
///     .seed(42)
///     .point_count(30)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let layout = Layout::generate(config).unwrap();
/// assert_eq!(layout.room_count(), 30);
/// assert_eq!(layout.path_count(), 29);
/// ```
#[derive(Clone)]
pub struct Layout {
    /// Configuration used to generate this layout
    config: MapConfig,

    /// Room positions (indexed by room ID)
    points: Vec<DVec2>,

    /// Spanning tree edges in the order the builder accepted them
    edges: Vec<Edge>,

    /// Tree neighbors of every room (sorted)
    adjacency: Vec<Vec<usize>>,

    /// Voronoi cells, empty unless requested
    cells: Vec<RoomCell>,

    /// Sample indices dropped as duplicates
    merged: Vec<MergedVertex>,

    /// Spatial index for fast position-to-room lookups (requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: Option<SpatialIndex>,
}

impl Layout {
    /// Generate a layout from a configuration
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if a configuration field is out of range
    /// - `TriangulationFailed` if the Kruskal strategy cannot triangulate the points
    /// - `DisconnectedCandidateGraph` if the candidate edges do not span the rooms
    ///
    /// # Example
    ///
    /// ```
    /// use rust_map_generation::*;
    ///
    /// let config = MapConfigBuilder::new()
    ///     .seed(7)
    ///     .strategy(SpanningTreeStrategy::Prim)
    ///     .build()
    ///     .unwrap();
    ///
    /// let layout = Layout::generate(config).unwrap();
    /// assert!(layout.total_length() > 0.0);
    /// ```
    pub fn generate(config: MapConfig) -> Result<Self> {
        let raw = generate_raw_layout(&config)?;
        let layout = Self::assemble(config, raw);

        info!(
            rooms = layout.room_count(),
            paths = layout.path_count(),
            length = layout.total_length(),
            strategy = config.strategy.name(),
            "map generated"
        );

        Ok(layout)
    }

    /// A layout without rooms, standing for a cleared map
    pub fn empty(config: MapConfig) -> Self {
        Self::assemble(
            config,
            RawLayout {
                points: Vec::new(),
                tree: SpanningTree::empty(0),
                cells: Vec::new(),
                merged: Vec::new(),
            },
        )
    }

    /// Bundle pipeline output into the final value
    fn assemble(config: MapConfig, raw: RawLayout) -> Self {
        let edges = raw.tree.into_edges();
        let pairs: Vec<(usize, usize)> = edges.iter().map(Edge::key).collect();
        let adjacency = build_neighbor_lists(raw.points.len(), &pairs);

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(&raw.points);

        Self {
            config,
            points: raw.points,
            edges,
            adjacency,
            cells: raw.cells,
            merged: raw.merged,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        }
    }

    /// Get the configuration used to generate this layout
    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Get the number of rooms
    #[inline]
    pub fn room_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of paths
    #[inline]
    pub fn path_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the layout has no rooms
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All room positions, indexed by room ID
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Position of a room
    ///
    /// Returns `None` if the room ID is out of bounds.
    #[inline]
    pub fn get_room(&self, id: usize) -> Option<DVec2> {
        self.points.get(id).copied()
    }

    /// Spanning tree edges
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total length of all paths
    pub fn total_length(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// Every path with its endpoint coordinates
    pub fn paths(&self) -> impl Iterator<Item = PathSegment> + '_ {
        self.edges.iter().map(|&edge| PathSegment {
            edge,
            start: self.points[edge.a],
            end: self.points[edge.b],
        })
    }

    /// Room cells (empty unless `room_cells` was enabled)
    #[inline]
    pub fn cells(&self) -> &[RoomCell] {
        &self.cells
    }

    /// Cell of a room, if cells were computed
    #[inline]
    pub fn get_cell(&self, id: usize) -> Option<&RoomCell> {
        self.cells.get(id)
    }

    /// Sample indices dropped as duplicates, in sampling order
    #[inline]
    pub fn merged_vertices(&self) -> &[MergedVertex] {
        &self.merged
    }

    /// Where the player starts: the first room
    #[inline]
    pub fn spawn_point(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Rooms connected to a room by a single path
    ///
    /// Returns empty slice if the room ID is invalid.
    pub fn get_neighbors(&self, room_id: usize) -> &[usize] {
        self.adjacency
            .get(room_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find the room closest to a position (requires spatial-index feature)
    ///
    /// Returns `None` for an empty layout.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_map_generation::*;
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// # let layout = Layout::generate(MapConfigBuilder::new().seed(3).build().unwrap()).unwrap();
    /// let room = layout.get_room(5).unwrap();
    /// assert_eq!(layout.find_room_at(room), Some(5));
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_room_at(&self, position: DVec2) -> Option<usize> {
        self.spatial_index
            .as_ref()
            .map(|index| index.find_nearest(position))
    }

    /// Find rooms within a given number of path hops from a room (BFS)
    ///
    /// # Returns
    ///
    /// Room IDs reachable within `hops` paths, including the center room,
    /// sorted ascending. Returns empty vec if center_id is invalid.
    pub fn find_rooms_within_hops(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.points.len() {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(center_id, 0)]);
        visited.insert(center_id);

        while let Some((room, depth)) = queue.pop_front() {
            if depth == hops {
                continue;
            }
            for &neighbor in self.get_neighbors(room) {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        let mut rooms: Vec<usize> = visited.into_iter().collect();
        rooms.sort_unstable();
        rooms
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout")
            .field("config", &self.config)
            .field("rooms", &self.points.len())
            .field("paths", &self.edges.len())
            .field("cells", &self.cells.len())
            .field("merged", &self.merged.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapConfigBuilder, SpanningTreeStrategy};
    use crate::error::MapGenError;

    fn config(seed: u32, count: usize) -> MapConfig {
        MapConfigBuilder::new()
            .seed(seed)
            .point_count(count)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_out_of_range_config_is_rejected() {
        let base = config(42, 20);
        for strategy in [SpanningTreeStrategy::Kruskal, SpanningTreeStrategy::Prim] {
            for extent in [-5.0, 0.0, f64::NAN] {
                let edited = MapConfig {
                    region_half_extent: extent,
                    strategy,
                    ..base
                };
                assert!(matches!(
                    Layout::generate(edited),
                    Err(MapGenError::InvalidConfig(_))
                ));
            }
        }
    }

    #[test]
    fn test_layout_generation() {
        let layout = Layout::generate(config(42, 100)).unwrap();

        assert_eq!(layout.room_count(), 100);
        assert_eq!(layout.path_count(), 99);
        assert!(!layout.is_empty());
        assert!(layout.merged_vertices().is_empty());
        assert!(layout.cells().is_empty());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let first = Layout::generate(config(7, 80)).unwrap();
        let second = Layout::generate(config(7, 80)).unwrap();

        assert_eq!(first.points(), second.points());
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn test_different_seed_different_points() {
        let first = Layout::generate(config(1, 80)).unwrap();
        let second = Layout::generate(config(2, 80)).unwrap();
        assert_ne!(first.points(), second.points());
        assert_eq!(second.path_count(), 79);
    }

    #[test]
    fn test_paths_carry_endpoints() {
        let layout = Layout::generate(config(5, 40)).unwrap();

        for path in layout.paths() {
            assert_eq!(path.start, layout.points()[path.edge.a]);
            assert_eq!(path.end, layout.points()[path.edge.b]);
            assert!((path.length() - path.edge.weight).abs() < 1e-9);
        }
        let summed: f64 = layout.paths().map(|p| p.length()).sum();
        assert!((summed - layout.total_length()).abs() < 1e-6);
    }

    #[test]
    fn test_path_segment_geometry() {
        let segment = PathSegment {
            edge: Edge::new(0, 1, 10.0),
            start: DVec2::new(0.0, 0.0),
            end: DVec2::new(0.0, 10.0),
        };

        assert_eq!(segment.midpoint(), DVec2::new(0.0, 5.0));
        assert_eq!(segment.length(), 10.0);
        assert_eq!(segment.direction(), DVec2::new(0.0, 1.0));
        assert!((segment.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_neighbors_follow_tree() {
        let layout = Layout::generate(config(9, 50)).unwrap();

        let degree_sum: usize = (0..layout.room_count())
            .map(|id| layout.get_neighbors(id).len())
            .sum();
        assert_eq!(degree_sum, 2 * layout.path_count());

        for edge in layout.edges() {
            assert!(layout.get_neighbors(edge.a).contains(&edge.b));
            assert!(layout.get_neighbors(edge.b).contains(&edge.a));
        }
    }

    #[test]
    fn test_find_rooms_within_hops() {
        let layout = Layout::generate(config(11, 60)).unwrap();

        let r0 = layout.find_rooms_within_hops(0, 0);
        assert_eq!(r0, vec![0]);

        let r1 = layout.find_rooms_within_hops(0, 1);
        assert_eq!(r1.len(), 1 + layout.get_neighbors(0).len());

        // A spanning tree reaches everything within room_count hops
        let all = layout.find_rooms_within_hops(0, layout.room_count());
        assert_eq!(all, (0..layout.room_count()).collect::<Vec<_>>());
    }

    #[test]
    fn test_invalid_room_id() {
        let layout = Layout::generate(config(3, 20)).unwrap();

        assert!(layout.get_room(20).is_none());
        assert!(layout.get_neighbors(999).is_empty());
        assert!(layout.find_rooms_within_hops(999, 3).is_empty());
    }

    #[test]
    fn test_spawn_point_is_first_room() {
        let layout = Layout::generate(config(3, 20)).unwrap();
        assert_eq!(layout.spawn_point(), layout.get_room(0));

        let empty = Layout::empty(config(3, 20));
        assert!(empty.is_empty());
        assert_eq!(empty.spawn_point(), None);
        assert_eq!(empty.path_count(), 0);
    }

    #[test]
    fn test_degenerate_layouts() {
        let none = Layout::generate(config(4, 0)).unwrap();
        assert!(none.is_empty());
        assert_eq!(none.path_count(), 0);

        let one = Layout::generate(config(4, 1)).unwrap();
        assert_eq!(one.room_count(), 1);
        assert_eq!(one.path_count(), 0);
    }

    #[test]
    fn test_triangulation_failure_for_two_rooms() {
        let err = Layout::generate(config(4, 2)).unwrap_err();
        assert!(matches!(err, MapGenError::TriangulationFailed(_)));

        let prim = MapConfigBuilder::new()
            .seed(4)
            .point_count(2)
            .unwrap()
            .strategy(SpanningTreeStrategy::Prim)
            .build()
            .unwrap();
        assert_eq!(Layout::generate(prim).unwrap().path_count(), 1);
    }

    #[test]
    fn test_room_cells_cover_map() {
        let cfg = MapConfigBuilder::new()
            .seed(21)
            .point_count(40)
            .unwrap()
            .region_half_extent(50.0)
            .unwrap()
            .room_cells(true)
            .build()
            .unwrap();
        let layout = Layout::generate(cfg).unwrap();

        assert_eq!(layout.cells().len(), 40);
        for (id, cell) in layout.cells().iter().enumerate() {
            assert_eq!(cell.id, id);
            assert_eq!(Some(cell.center), layout.get_room(id));
        }
        assert!(layout.get_cell(40).is_none());
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_room_at() {
        let layout = Layout::generate(config(42, 100)).unwrap();

        for id in [0, 17, 99] {
            let room = layout.get_room(id).unwrap();
            assert_eq!(layout.find_room_at(room), Some(id));
        }

        let empty = Layout::empty(config(42, 100));
        assert_eq!(empty.find_room_at(DVec2::ZERO), None);
    }
}
