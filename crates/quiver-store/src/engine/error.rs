//! Error types for graph store operations.

use std::collections::TryReserveError;

use quiver_core::{EdgeId, EdgeKind, VertexId};
use thiserror::Error;

/// Errors that can occur in graph store operations.
///
/// Every failure is local, synchronous, and deterministic: it is raised at
/// the offending call and leaves the store unchanged. Misuse that a
/// pointer-based structure would leave undefined (stale handles, foreign
/// handles, non-endpoint vertices) is reported as a typed error instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No live vertex occupies the given slot.
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// No live edge occupies the given slot.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// The pair is already connected by an edge of this kind.
    #[error("{kind} edge already exists between {source} and {target}")]
    EdgeExists {
        /// Source vertex (first vertex for undirected edges).
        source: VertexId,
        /// Target vertex (second vertex for undirected edges).
        target: VertexId,
        /// Kind of the conflicting edge.
        kind: EdgeKind,
    },

    /// The pair is not connected by an edge of this kind.
    #[error("no {kind} edge between {source} and {target}")]
    NotConnected {
        /// Source vertex (first vertex for undirected edges).
        source: VertexId,
        /// Target vertex (second vertex for undirected edges).
        target: VertexId,
        /// Kind of edge that was looked up.
        kind: EdgeKind,
    },

    /// The vertex is not an endpoint of the edge.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint {
        /// The edge that was queried.
        edge: EdgeId,
        /// The vertex that is not on it.
        vertex: VertexId,
    },

    /// The operation needs both endpoints materialized, but the edge still
    /// has a pending frontier endpoint.
    #[error("edge {0} has an unresolved endpoint")]
    Unresolved(EdgeId),

    /// Frontier resolution was attempted on an edge with no pending
    /// endpoint.
    #[error("edge {0} is already fully resolved")]
    AlreadyResolved(EdgeId),

    /// The allocator could not satisfy a reservation request.
    #[error("allocation failed: {0}")]
    Capacity(#[from] TryReserveError),
}

/// Result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;
