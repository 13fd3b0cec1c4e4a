//! Error types for map generation

use thiserror::Error;

/// Reasons the triangulation stage can fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulationFailure {
    /// A planar triangulation needs at least three distinct points
    #[error("need at least 3 distinct points, got {count}")]
    TooFewPoints {
        /// Number of distinct points available
        count: usize,
    },

    /// Every point lies on a single line, so no triangle exists
    #[error("all {count} points are collinear")]
    Collinear {
        /// Number of distinct points available
        count: usize,
    },

    /// The triangulation library refused a coordinate (NaN, too large or too small)
    #[error("point {index} has an unsupported coordinate: {reason}")]
    InvalidCoordinate {
        /// Input index of the rejected point
        index: usize,
        /// Library-reported reason
        reason: String,
    },

    /// Two input points share a location and the policy forbids merging
    #[error("point {index} duplicates the location of point {existing}")]
    DuplicateVertex {
        /// Input index of the duplicate
        index: usize,
        /// Input index of the point that already holds the location
        existing: usize,
    },
}

/// Errors that can occur during map generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapGenError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The triangulation stage failed and the run was aborted
    #[error("triangulation failed: {0}")]
    TriangulationFailed(#[from] TriangulationFailure),

    /// The candidate edges did not connect every point
    #[error("candidate graph is disconnected: {components} components, {edges}/{expected} edges")]
    DisconnectedCandidateGraph {
        /// Number of connected components in the resulting forest
        components: usize,
        /// Number of edges the builder was able to take
        edges: usize,
        /// Number of edges a spanning tree would have
        expected: usize,
    },

    /// A candidate edge references a point outside the point sequence
    #[error("edge ({a}, {b}) references a point outside 0..{point_count}")]
    InvalidEdge {
        /// First endpoint
        a: usize,
        /// Second endpoint
        b: usize,
        /// Number of points available
        point_count: usize,
    },
}

impl MapGenError {
    /// Whether this error means the triangulation stage aborted the run
    pub fn is_triangulation_failure(&self) -> bool {
        matches!(self, MapGenError::TriangulationFailed(_))
    }
}

/// Result type alias for map generation
pub type Result<T> = std::result::Result<T, MapGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangulation_failure_converts() {
        let err: MapGenError = TriangulationFailure::TooFewPoints { count: 2 }.into();
        assert!(err.is_triangulation_failure());
        assert_eq!(
            err.to_string(),
            "triangulation failed: need at least 3 distinct points, got 2"
        );
    }

    #[test]
    fn test_disconnected_message() {
        let err = MapGenError::DisconnectedCandidateGraph {
            components: 2,
            edges: 3,
            expected: 4,
        };
        assert!(!err.is_triangulation_failure());
        assert!(err.to_string().contains("2 components"));
    }
}
