//! Stateful map generator driving a placement sink

use tracing::{info, warn};

use crate::config::MapConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::placement::{LayoutSink, PlacementPlan};

/// Owns a configuration, a placement sink and the currently emitted layout
///
/// Each call to [`MapGenerator::generate_map`] is one independent run: the
/// sink is cleared first, then the new layout is placed. A failed run leaves
/// the sink cleared and the current layout empty. Runs take `&mut self`, so
/// two runs can never overlap on the same generator.
///
/// # Example
///
/// ```
/// use rust_map_generation::*;
///
/// let config = MapConfigBuilder::new().seed(42).build().unwrap();
/// let mut generator = MapGenerator::new(config, PlacementRecorder::new());
///
/// generator.generate_map().unwrap();
/// assert_eq!(generator.sink().rooms.len(), generator.layout().room_count());
/// ```
pub struct MapGenerator<S> {
    config: MapConfig,
    sink: S,
    layout: Layout,
}

impl<S: LayoutSink> MapGenerator<S> {
    /// Create a generator; nothing is placed until `generate_map` runs
    pub fn new(config: MapConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            layout: Layout::empty(config),
        }
    }

    /// Configuration used by the next run
    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Replace the configuration used by the next run
    pub fn set_config(&mut self, config: MapConfig) {
        self.config = config;
    }

    /// Change only the seed used by the next run
    pub fn reseed(&mut self, seed: u32) {
        self.config.seed = seed;
    }

    /// Layout placed by the latest run (empty after a failed run)
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The placement sink
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the placement sink
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the generator, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Clear the previous map, generate a new one and place it
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` without touching the sink or the current layout
    /// when the configuration is out of range. Other pipeline errors happen
    /// after the sink was cleared, so their visible result is an empty map.
    pub fn generate_map(&mut self) -> Result<&Layout> {
        if let Err(err) = self.config.validate() {
            warn!(error = %err, "invalid configuration, map unchanged");
            return Err(err);
        }

        let had_rooms = !self.layout.is_empty();
        self.sink.clear();

        match Layout::generate(self.config) {
            Ok(layout) => {
                PlacementPlan::from_layout(&layout).emit(&mut self.sink);
                self.layout = layout;
                info!(
                    seed = self.config.seed,
                    rooms = self.layout.room_count(),
                    "map placed"
                );
                Ok(&self.layout)
            }
            Err(err) => {
                self.layout = Layout::empty(self.config);
                warn!(
                    seed = self.config.seed,
                    previous_map_destroyed = had_rooms,
                    error = %err,
                    "generation failed, map cleared"
                );
                Err(err)
            }
        }
    }
}

impl<S> std::fmt::Debug for MapGenerator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapGenerator")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
