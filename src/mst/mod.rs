//! Minimum spanning tree extraction
//!
//! Two interchangeable builders share the `Edge` model:
//!
//! - [`kruskal`] sorts the Delaunay edges and joins components with a
//!   disjoint-set forest.
//! - [`prim`] grows a tree from point 0 over the complete graph using a
//!   binary-heap frontier, and needs no triangulation.
//!
//! Both return a [`SpanningTree`], which records whether the result actually
//! spans every point.

mod kruskal;
mod prim;
mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::DisjointSet;

use crate::edge::{total_weight, Edge};
use crate::error::{MapGenError, Result};

/// Whether a builder connected every point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStatus {
    /// One tree covering all points (also used for 0 and 1 points)
    Spanning,
    /// A forest; the candidate graph was disconnected
    Partial {
        /// Number of trees in the forest
        components: usize,
    },
}

/// Output of a spanning tree builder
///
/// Edges are listed in the order the builder accepted them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    point_count: usize,
}

impl SpanningTree {
    /// Wrap accepted edges; `edges` must be acyclic over `point_count` points
    pub(crate) fn from_forest(edges: Vec<Edge>, point_count: usize) -> Self {
        debug_assert!(edges.len() <= point_count.saturating_sub(1));
        Self { edges, point_count }
    }

    /// Tree without edges over `point_count` points
    pub fn empty(point_count: usize) -> Self {
        Self::from_forest(Vec::new(), point_count)
    }

    /// Accepted edges
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consume the tree, returning its edges
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Number of accepted edges
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was accepted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of points the tree was built over
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of edges a spanning tree over the same points has
    #[inline]
    pub fn expected_edge_count(&self) -> usize {
        self.point_count.saturating_sub(1)
    }

    /// Number of connected components (an acyclic forest has `V - E`)
    #[inline]
    pub fn components(&self) -> usize {
        self.point_count - self.edges.len()
    }

    /// Spanning or partial
    pub fn status(&self) -> TreeStatus {
        if self.components() <= 1 {
            TreeStatus::Spanning
        } else {
            TreeStatus::Partial {
                components: self.components(),
            }
        }
    }

    /// Whether every point is reachable from every other
    #[inline]
    pub fn is_spanning(&self) -> bool {
        self.status() == TreeStatus::Spanning
    }

    /// Sum of edge lengths
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// Turn a partial forest into a `DisconnectedCandidateGraph` error
    pub fn into_spanning(self) -> Result<Self> {
        match self.status() {
            TreeStatus::Spanning => Ok(self),
            TreeStatus::Partial { components } => Err(MapGenError::DisconnectedCandidateGraph {
                components,
                edges: self.edges.len(),
                expected: self.expected_edge_count(),
            }),
        }
    }
}

/// Every pair of `point_count` points, smallest index first
///
/// Feeding this to [`kruskal`] gives the same candidate graph [`prim`] explores.
pub fn complete_graph_edges(point_count: usize) -> Vec<(usize, usize)> {
    (0..point_count)
        .flat_map(|a| ((a + 1)..point_count).map(move |b| (a, b)))
        .collect()
}
