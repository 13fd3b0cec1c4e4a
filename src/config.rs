//! Map Configuration and Builder
//!
//! This module provides configuration types for deterministic room-and-path map generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MapGenError, Result};

/// Largest accepted point count
///
/// The Prim strategy works over the complete graph, so the frontier grows
/// quadratically with the point count.
pub const MAX_POINT_COUNT: usize = 10_000;

/// Algorithm used to extract the spanning tree
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanningTreeStrategy {
    /// Union-find over the deduplicated Delaunay edges
    ///
    /// Requires a successful triangulation.
    #[default]
    Kruskal,
    /// Growing frontier over the complete graph of points
    ///
    /// Does not need a triangulation and works for any point count.
    Prim,
}

impl SpanningTreeStrategy {
    /// Whether this strategy builds its candidate edges from the triangulation
    pub fn needs_triangulation(self) -> bool {
        matches!(self, SpanningTreeStrategy::Kruskal)
    }

    /// Get a human-readable name for this strategy
    pub fn name(self) -> &'static str {
        match self {
            SpanningTreeStrategy::Kruskal => "Kruskal",
            SpanningTreeStrategy::Prim => "Prim",
        }
    }
}

/// What a generation run does with sampled points sharing a location
///
/// The policy applies to every run, whatever the strategy and whether room
/// cells are requested, so a seed always yields the same rooms.
///
/// There is no pass-through variant. The triangulation always unifies exact
/// duplicates, so an unmerged copy would join no candidate edge and a Kruskal
/// run could only end in `DisconnectedCandidateGraph`. `Reject` surfaces that
/// condition up front and names both indices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Unify duplicates into the first point at that location
    ///
    /// The merged input indices are dropped from the emitted layout and the
    /// surviving points are renumbered in their original relative order.
    #[default]
    Merge,
    /// Fail the triangulation on the first duplicate location
    Reject,
}

/// Configuration for deterministic map generation
///
/// The same configuration will always produce the identical layout, so a map
/// can be shared or saved as its configuration and regenerated on load.
///
/// # Example
///
/// ```rust
/// use rust_map_generation::*;
///
/// let config = MapConfigBuilder::new()
///     .seed(42)
///     .point_count(50)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: MapConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Random seed for point sampling
    pub seed: u32,

    /// Number of rooms to sample
    pub point_count: usize,

    /// Rooms are sampled inside `[-region_half_extent, region_half_extent]` on both axes
    pub region_half_extent: f64,

    /// Spanning tree algorithm
    pub strategy: SpanningTreeStrategy,

    /// Duplicate location handling during triangulation
    pub duplicate_policy: DuplicatePolicy,

    /// Radius of a placed room
    pub room_radius: f64,

    /// Width of a placed path
    pub path_width: f64,

    /// Compute each room's Voronoi cell clipped to the sampling square
    pub room_cells: bool,
}

impl MapConfig {
    /// Minimum corner of the sampling square
    #[inline]
    pub fn region_min(&self) -> glam::DVec2 {
        glam::DVec2::splat(-self.region_half_extent)
    }

    /// Maximum corner of the sampling square
    #[inline]
    pub fn region_max(&self) -> glam::DVec2 {
        glam::DVec2::splat(self.region_half_extent)
    }

    /// Check the range constraints that `MapConfigBuilder` enforces
    ///
    /// Fields are public and may be edited after `build`, so every
    /// generation run validates its configuration before sampling.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        point_count_in_range(self.point_count)?;
        positive("region half extent", self.region_half_extent)?;
        positive("room radius", self.room_radius)?;
        positive("path width", self.path_width)?;
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating MapConfig with validation
///
/// Setters for range-constrained values reject out-of-range input with
/// `InvalidConfig` instead of clamping it.
///
/// # Example
///
/// ```rust
/// use rust_map_generation::*;
///
/// let config = MapConfigBuilder::new()
///     .seed(12345)
///     .point_count(200)
///     .unwrap()
///     .region_half_extent(500.0)
///     .unwrap()
///     .strategy(SpanningTreeStrategy::Prim)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count, 200);
/// ```
#[derive(Debug, Clone)]
pub struct MapConfigBuilder {
    seed: Option<u32>,
    point_count: usize,
    region_half_extent: f64,
    strategy: SpanningTreeStrategy,
    duplicate_policy: DuplicatePolicy,
    room_radius: f64,
    path_width: f64,
    room_cells: bool,
}

impl MapConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - point_count: 100
    /// - region_half_extent: 1000.0
    /// - strategy: Kruskal
    /// - duplicate_policy: Merge
    /// - room_radius: 50.0
    /// - path_width: 10.0
    /// - room_cells: false
    pub fn new() -> Self {
        Self {
            seed: None,
            point_count: 100,
            region_half_extent: 1000.0,
            strategy: SpanningTreeStrategy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            room_radius: 50.0,
            path_width: 10.0,
            room_cells: false,
        }
    }

    /// Set the random seed for point sampling
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of rooms
    ///
    /// Zero and one are accepted and produce a map without paths.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if count > `MAX_POINT_COUNT`
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        self.point_count = point_count_in_range(count)?;
        Ok(self)
    }

    /// Set the half-width/height of the sampling square
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the extent is not finite or <= 0.0
    pub fn region_half_extent(mut self, extent: f64) -> Result<Self> {
        self.region_half_extent = positive("region half extent", extent)?;
        Ok(self)
    }

    /// Set the spanning tree algorithm
    pub fn strategy(mut self, strategy: SpanningTreeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the duplicate location policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the radius of a placed room
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is not finite or <= 0.0
    pub fn room_radius(mut self, radius: f64) -> Result<Self> {
        self.room_radius = positive("room radius", radius)?;
        Ok(self)
    }

    /// Set the width of a placed path
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the width is not finite or <= 0.0
    pub fn path_width(mut self, width: f64) -> Result<Self> {
        self.path_width = positive("path width", width)?;
        Ok(self)
    }

    /// Compute Voronoi cells for every room
    pub fn room_cells(mut self, enabled: bool) -> Self {
        self.room_cells = enabled;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<MapConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        let config = MapConfig {
            seed,
            point_count: self.point_count,
            region_half_extent: self.region_half_extent,
            strategy: self.strategy,
            duplicate_policy: self.duplicate_policy,
            room_radius: self.room_radius,
            path_width: self.path_width,
            room_cells: self.room_cells,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for MapConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn point_count_in_range(count: usize) -> Result<usize> {
    if count > MAX_POINT_COUNT {
        return Err(MapGenError::InvalidConfig(format!(
            "point count must be <= {} (got {})",
            MAX_POINT_COUNT, count
        )));
    }
    Ok(count)
}

fn positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MapGenError::InvalidConfig(format!(
            "{} must be finite and positive (got {})",
            name, value
        )));
    }
    Ok(value)
}
