//! Placement data for generated layouts
//!
//! Converts a `Layout` into engine-agnostic object transforms on the ground
//! plane (z = 0): one per room, one per path, plus the player spawn.

mod sink;

pub use sink::{LayoutSink, PlacementRecorder};

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::edge::Edge;
use crate::layout::Layout;

/// Transform of a placed room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomPlacement {
    /// Room index in the layout
    pub id: usize,
    /// Center of the room on the ground plane
    pub location: DVec3,
    /// Room radius
    pub radius: f64,
}

/// Transform of a placed path
///
/// The path object sits at its midpoint, rotated by `heading` around the
/// vertical axis, stretched to `length` along its local x and `width` along y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPlacement {
    /// Tree edge the path was built from
    pub edge: Edge,
    /// Center of room `edge.a`
    pub start: DVec3,
    /// Center of room `edge.b`
    pub end: DVec3,
    /// Midpoint between the rooms
    pub location: DVec3,
    /// Yaw in radians, measured from +x towards +y
    pub heading: f64,
    /// Distance between the rooms
    pub length: f64,
    /// Path width
    pub width: f64,
}

impl PathPlacement {
    /// Derive the transform of a path between two room centers
    pub fn new(edge: Edge, start: DVec3, end: DVec3, width: f64) -> Self {
        let delta = end - start;
        Self {
            edge,
            start,
            end,
            location: (start + end) * 0.5,
            heading: delta.y.atan2(delta.x),
            length: delta.length(),
            width,
        }
    }
}

/// Everything a placement collaborator needs to build one map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPlan {
    /// One entry per room, in room order
    pub rooms: Vec<RoomPlacement>,
    /// One entry per path, in tree order
    pub paths: Vec<PathPlacement>,
    /// Player spawn above the first room
    pub spawn: Option<DVec3>,
}

impl PlacementPlan {
    /// Build the plan for a layout using its configured room radius and path width
    pub fn from_layout(layout: &Layout) -> Self {
        let config = layout.config();

        let rooms = layout
            .points()
            .iter()
            .enumerate()
            .map(|(id, &point)| RoomPlacement {
                id,
                location: ground(point),
                radius: config.room_radius,
            })
            .collect();

        let paths = layout
            .paths()
            .map(|path| {
                PathPlacement::new(
                    path.edge,
                    ground(path.start),
                    ground(path.end),
                    config.path_width,
                )
            })
            .collect();

        // Raised by the room radius so the player lands on top of the room
        let spawn = layout
            .spawn_point()
            .map(|point| ground(point) + DVec3::Z * config.room_radius);

        Self { rooms, paths, spawn }
    }

    /// Get the number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Get the number of paths
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Check if the plan places nothing
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.paths.is_empty()
    }

    /// Send every placement to a sink (rooms, then paths, then spawn)
    ///
    /// Does not clear the sink; the caller decides when old objects go.
    pub fn emit<S: LayoutSink + ?Sized>(&self, sink: &mut S) {
        for room in &self.rooms {
            sink.place_room(room);
        }
        for path in &self.paths {
            sink.place_path(path);
        }
        if let Some(spawn) = self.spawn {
            sink.move_spawn(spawn);
        }

        debug!(
            rooms = self.rooms.len(),
            paths = self.paths.len(),
            "emitted placement plan"
        );
    }
}

/// Lift a map position onto the ground plane
#[inline]
fn ground(point: DVec2) -> DVec3 {
    point.extend(0.0)
}
