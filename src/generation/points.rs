//! Uniform point sampling inside a square region
//!
//! Rooms are scattered uniformly at random: each coordinate is drawn
//! independently from `[-half_extent, half_extent]`. No attempt is made to
//! keep points apart, so duplicates are possible (if unlikely) and handled by
//! the duplicate policy before any spanning tree is built.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Sample `count` points in the square `[-half_extent, half_extent]²`
///
/// The same seed always produces the same points.
///
/// # Example
///
/// ```rust
/// use rust_map_generation::generation::sample_points;
///
/// let points = sample_points(100, 10.0, 42);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|p| p.abs().max_element() <= 10.0));
/// ```
pub fn sample_points(count: usize, half_extent: f64, seed: u32) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    sample_points_with(&mut rng, count, half_extent)
}

/// Sample `count` points in the square `[-half_extent, half_extent]²` from any random source
///
/// `half_extent` must be finite and positive; `MapConfigBuilder` enforces this
/// before a pipeline run reaches the sampler.
pub fn sample_points_with<R: Rng>(rng: &mut R, count: usize, half_extent: f64) -> Vec<DVec2> {
    debug_assert!(half_extent.is_finite() && half_extent > 0.0);

    (0..count)
        .map(|_| {
            let x = rng.gen_range(-half_extent..=half_extent);
            let y = rng.gen_range(-half_extent..=half_extent);
            DVec2::new(x, y)
        })
        .collect()
}
