//! Room-and-path map generation
//!
//! Scatters rooms at random inside a square, triangulates them, and connects
//! them with a minimum spanning tree of paths, so every room is reachable
//! without redundant connections. The result is engine-agnostic data handed
//! to a placement sink (Bevy, Godot, a custom engine, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use rust_map_generation::*;
//!
//! // Generate a layout
//! let config = MapConfigBuilder::new()
//!     .seed(42)
//!     .point_count(100).unwrap()
//!     .region_half_extent(1000.0).unwrap()
//!     .strategy(SpanningTreeStrategy::Kruskal)
//!     .build().unwrap();
//!
//! let layout = Layout::generate(config).unwrap();
//! println!("{} rooms, {} paths", layout.room_count(), layout.path_count());
//!
//! // Place it
//! let mut generator = MapGenerator::new(config, PlacementRecorder::new());
//! generator.generate_map().unwrap();
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-room lookups using KD-tree
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod error;
pub mod config;
pub mod edge;
pub mod cell;
pub mod generation;
pub mod mst;
pub mod layout;
pub mod placement;
pub mod generator;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{MapGenError, Result, TriangulationFailure};
pub use config::{
    DuplicatePolicy, MapConfig, MapConfigBuilder, SpanningTreeStrategy, MAX_POINT_COUNT,
};
pub use edge::Edge;
pub use cell::RoomCell;
pub use generation::{DelaunayResult, MergedVertex};
pub use mst::{SpanningTree, TreeStatus};
pub use layout::{Layout, PathSegment};
pub use placement::{LayoutSink, PathPlacement, PlacementPlan, PlacementRecorder, RoomPlacement};
pub use generator::MapGenerator;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam vectors for convenience
pub use glam::{DVec2, DVec3};
