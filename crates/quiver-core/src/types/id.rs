//! Unique identifiers for vertices, edges, and frontier tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a vertex within one graph store.
///
/// A `VertexId` is the slot index the vertex was created at. It stays valid
/// for the lifetime of the vertex; removal tombstones the slot rather than
/// shifting neighbors, so other vertices' ids never move. Only an explicit
/// compaction pass reassigns ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a new `VertexId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Get the value as a store slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Unique identifier for an edge within one graph store.
///
/// Same contract as [`VertexId`]: the id is the creation slot index and is
/// stable until an explicit compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Create a new `EdgeId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Get the value as a store slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Opaque token naming a vertex that has not been materialized yet.
///
/// Frontier edges carry a token instead of a target id. The token is chosen
/// by the caller and handed back during resolution, so callers can encode
/// whatever addressing their generator understands (an offset into a work
/// queue, an external key, a PRNG seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrontierToken(u64);

impl FrontierToken {
    /// Create a new token from a raw u64 value.
    #[must_use]
    pub const fn new(token: u64) -> Self {
        Self(token)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for FrontierToken {
    fn from(token: u64) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for FrontierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
