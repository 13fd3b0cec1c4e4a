//! Core map generation pipeline
//!
//! Samples room positions, triangulates them, and extracts the spanning tree
//! of paths. Every stage works on freshly allocated data; nothing here
//! touches a previously emitted layout.

mod delaunay;
mod points;
mod voronoi;

pub use delaunay::{triangle_edges, triangulate, DelaunayResult, MergedVertex};
pub use points::{sample_points, sample_points_with};
pub use voronoi::{build_neighbor_lists, generate_cells};

use glam::DVec2;
use std::collections::hash_map::{Entry, HashMap};
use tracing::{debug, error, trace, warn};

use crate::cell::RoomCell;
use crate::config::{DuplicatePolicy, MapConfig, SpanningTreeStrategy};
use crate::error::{Result, TriangulationFailure};
use crate::mst::{complete_graph_edges, kruskal, prim, SpanningTree};

/// Pipeline output before it is bundled into a `Layout`
#[derive(Debug, Clone)]
pub struct RawLayout {
    /// Room positions; merged duplicates are already removed
    pub points: Vec<DVec2>,
    /// Spanning tree over `points`
    pub tree: SpanningTree,
    /// Room cells (empty unless requested and available)
    pub cells: Vec<RoomCell>,
    /// Input indices dropped by the duplicate merge policy
    pub merged: Vec<MergedVertex>,
}

/// Run the generation pipeline for a configuration
///
/// # Errors
///
/// - `InvalidConfig` if a configuration field is out of range
/// - `TriangulationFailed` if the Kruskal strategy cannot triangulate the points,
///   or a duplicate location is found under `DuplicatePolicy::Reject`
/// - `DisconnectedCandidateGraph` if the triangulation edges do not span the points
pub fn generate_raw_layout(config: &MapConfig) -> Result<RawLayout> {
    config.validate()?;

    // Step 1: Sample room positions
    let sampled = sample_points(config.point_count, config.region_half_extent, config.seed);
    debug!(
        count = sampled.len(),
        half_extent = config.region_half_extent,
        seed = config.seed,
        "sampled points"
    );

    // Step 2: Apply the duplicate policy, whatever the strategy
    let (points, merged) = merge_duplicates(sampled, config.duplicate_policy)?;

    // Step 3: Triangulate when the strategy or the room cells need it
    let candidates = triangulate_for(config, &points)?;

    // Step 4: Extract the spanning tree
    let tree = match (config.strategy, &candidates) {
        (SpanningTreeStrategy::Kruskal, Some(edges)) => kruskal(&points, edges)?.into_spanning()?,
        // Fewer than two points: nothing to connect
        (SpanningTreeStrategy::Kruskal, None) => SpanningTree::empty(points.len()),
        (SpanningTreeStrategy::Prim, _) => prim(&points),
    };

    // Step 5: Room cells
    let cells = if !config.room_cells {
        Vec::new()
    } else {
        let (min, max) = (config.region_min(), config.region_max());
        match &candidates {
            Some(edges) => generate_cells(&points, edges, min, max),
            // With two points or fewer every pair is a Voronoi neighbor
            None if points.len() <= 2 => {
                generate_cells(&points, &complete_graph_edges(points.len()), min, max)
            }
            None => Vec::new(),
        }
    };

    Ok(RawLayout {
        points,
        tree,
        cells,
        merged,
    })
}

fn triangulate_for(config: &MapConfig, points: &[DVec2]) -> Result<Option<Vec<(usize, usize)>>> {
    let wanted = match config.strategy {
        SpanningTreeStrategy::Kruskal => points.len() >= 2,
        SpanningTreeStrategy::Prim => config.room_cells && points.len() >= 3,
    };
    if !wanted {
        return Ok(None);
    }

    match triangulate(points, config.duplicate_policy) {
        Ok(result) => Ok(Some(result.edges)),
        Err(failure) if config.strategy.needs_triangulation() => {
            error!(%failure, points = points.len(), "Delaunay triangulation failed");
            Err(failure.into())
        }
        Err(failure) => {
            warn!(%failure, "triangulation failed, room cells unavailable");
            Ok(None)
        }
    }
}

/// Unify points sharing an exact location, keeping the first one
///
/// Survivors keep their original relative order and are renumbered densely.
/// Locations compare the way the triangulation compares them, so `-0.0` and
/// `0.0` are the same coordinate.
///
/// # Errors
///
/// Returns `DuplicateVertex` on the first shared location under
/// `DuplicatePolicy::Reject`.
fn merge_duplicates(
    points: Vec<DVec2>,
    policy: DuplicatePolicy,
) -> Result<(Vec<DVec2>, Vec<MergedVertex>)> {
    let mut first_at: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    let mut kept = Vec::with_capacity(points.len());
    let mut merged = Vec::new();

    for (index, point) in points.into_iter().enumerate() {
        // Adding zero folds -0.0 into 0.0
        let key = ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits());
        match first_at.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                kept.push(point);
            }
            Entry::Occupied(slot) => {
                let existing = *slot.get();
                match policy {
                    DuplicatePolicy::Merge => {
                        trace!(index, kept = existing, "merged duplicate point");
                        merged.push(MergedVertex { index, kept: existing });
                    }
                    DuplicatePolicy::Reject => {
                        let failure = TriangulationFailure::DuplicateVertex { index, existing };
                        return Err(failure.into());
                    }
                }
            }
        }
    }

    if !merged.is_empty() {
        debug!(
            merged = merged.len(),
            remaining = kept.len(),
            "removed merged duplicate points"
        );
    }

    Ok((kept, merged))
}
