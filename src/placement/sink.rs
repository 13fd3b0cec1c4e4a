//! Placement sinks: where a finished layout is sent

use glam::DVec3;

use super::{PathPlacement, RoomPlacement};

/// Trait for the collaborator that turns a layout into placed objects
///
/// A generation run calls `clear` first, then `place_room` once per room,
/// `place_path` once per path and finally `move_spawn`.
pub trait LayoutSink {
    /// Destroy everything placed by a previous run
    fn clear(&mut self);

    /// Place one room
    fn place_room(&mut self, room: &RoomPlacement);

    /// Place one path
    fn place_path(&mut self, path: &PathPlacement);

    /// Move the player spawn; ignored by default
    fn move_spawn(&mut self, _location: DVec3) {}
}

/// Sink that keeps every placement in memory
///
/// Useful for tests, headless tools, or as a staging buffer for engines that
/// spawn objects later.
#[derive(Debug, Clone, Default)]
pub struct PlacementRecorder {
    /// Rooms placed since the last clear
    pub rooms: Vec<RoomPlacement>,
    /// Paths placed since the last clear
    pub paths: Vec<PathPlacement>,
    /// Latest spawn location since the last clear
    pub spawn: Option<DVec3>,
    /// Number of times the sink was cleared
    pub clear_count: usize,
}

impl PlacementRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is currently placed
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.paths.is_empty()
    }
}

impl LayoutSink for PlacementRecorder {
    fn clear(&mut self) {
        self.rooms.clear();
        self.paths.clear();
        self.spawn = None;
        self.clear_count += 1;
    }

    fn place_room(&mut self, room: &RoomPlacement) {
        self.rooms.push(*room);
    }

    fn place_path(&mut self, path: &PathPlacement) {
        self.paths.push(*path);
    }

    fn move_spawn(&mut self, location: DVec3) {
        self.spawn = Some(location);
    }
}

impl<S: LayoutSink + ?Sized> LayoutSink for Box<S> {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn place_room(&mut self, room: &RoomPlacement) {
        (**self).place_room(room);
    }

    fn place_path(&mut self, path: &PathPlacement) {
        (**self).place_path(path);
    }

    fn move_spawn(&mut self, location: DVec3) {
        (**self).move_spawn(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn room(id: usize) -> RoomPlacement {
        RoomPlacement {
            id,
            location: DVec3::new(id as f64, 0.0, 0.0),
            radius: 1.0,
        }
    }

    #[test]
    fn test_recorder_collects_and_clears() {
        let mut recorder = PlacementRecorder::new();
        assert!(recorder.is_empty());

        recorder.place_room(&room(0));
        recorder.place_room(&room(1));
        recorder.place_path(&PathPlacement::new(
            Edge::new(0, 1, 1.0),
            DVec3::ZERO,
            DVec3::X,
            0.5,
        ));
        recorder.move_spawn(DVec3::Z);

        assert_eq!(recorder.rooms.len(), 2);
        assert_eq!(recorder.paths.len(), 1);
        assert_eq!(recorder.spawn, Some(DVec3::Z));

        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.spawn, None);
        assert_eq!(recorder.clear_count, 1);
    }

    #[test]
    fn test_boxed_sink() {
        let mut sink: Box<PlacementRecorder> = Box::default();
        sink.place_room(&room(3));
        LayoutSink::clear(&mut sink);
        assert_eq!(sink.clear_count, 1);
        assert!(sink.rooms.is_empty());
    }
}
