//! Edge classification and adjacency selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an edge is directed or undirected.
///
/// Both kinds coexist in the same graph: a directed `A -> B`, a directed
/// `B -> A`, and an undirected `A - B` are three distinct edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// An ordered edge from a source vertex to a target vertex.
    Directed,
    /// An unordered edge between two vertices.
    Undirected,
}

impl EdgeKind {
    /// Returns true for directed edges.
    #[inline]
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// Selects one of the three per-vertex adjacency sets.
///
/// Every vertex keeps its incident edges in three disjoint sets: edges
/// leaving it, edges entering it, and undirected edges touching it. Most
/// edge-level queries take an `Adjacency` to say which set they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Adjacency {
    /// Directed edges with this vertex as source.
    #[default]
    Outgoing,
    /// Directed edges with this vertex as target.
    Incoming,
    /// Undirected edges touching this vertex.
    Undirected,
}

impl Adjacency {
    /// The set the same edge occupies on the opposite endpoint.
    ///
    /// An edge registered as `Outgoing` on its source is `Incoming` on its
    /// target; undirected edges are `Undirected` on both ends.
    #[inline]
    #[must_use]
    pub const fn reciprocal(self) -> Self {
        match self {
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
            Self::Undirected => Self::Undirected,
        }
    }

    /// The edge kind stored in this set.
    #[inline]
    #[must_use]
    pub const fn edge_kind(self) -> EdgeKind {
        match self {
            Self::Outgoing | Self::Incoming => EdgeKind::Directed,
            Self::Undirected => EdgeKind::Undirected,
        }
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outgoing => f.write_str("outgoing"),
            Self::Incoming => f.write_str("incoming"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}
