//! Edge records and endpoints.
//!
//! An [`Edge`] owns its weight and the identities of the two vertices it
//! connects. Endpoints are ids, not references; a frontier edge may point at
//! a vertex that has not been materialized yet, in which case the endpoint
//! carries the caller's [`FrontierToken`] instead.

use serde::{Deserialize, Serialize};

use super::{EdgeKind, FrontierToken, VertexId};

/// One end of an edge.
///
/// `Pending` endpoints exist only on frontier edges and are turned into
/// `Resolved` by an explicit resolution step on the owning store, never as
/// a side effect of traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// A materialized vertex.
    Resolved(VertexId),
    /// A vertex the caller has promised to materialize later.
    Pending(FrontierToken),
}

impl Endpoint {
    /// The vertex id, if this endpoint is materialized.
    #[inline]
    #[must_use]
    pub const fn vertex(self) -> Option<VertexId> {
        match self {
            Self::Resolved(v) => Some(v),
            Self::Pending(_) => None,
        }
    }

    /// The token, if this endpoint is still pending.
    #[inline]
    #[must_use]
    pub const fn token(self) -> Option<FrontierToken> {
        match self {
            Self::Resolved(_) => None,
            Self::Pending(t) => Some(t),
        }
    }

    /// True for pending endpoints.
    #[inline]
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl From<VertexId> for Endpoint {
    fn from(v: VertexId) -> Self {
        Self::Resolved(v)
    }
}

/// An edge in the graph: a weight, a kind, and two endpoints.
///
/// For directed edges `source`/`target` are ordered; for undirected edges
/// the pair is stored in insertion order but the order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<U> {
    weight: U,
    kind: EdgeKind,
    source: Endpoint,
    target: Endpoint,
}

impl<U> Edge<U> {
    /// Create a directed edge between two materialized vertices.
    #[must_use]
    pub fn directed(source: VertexId, target: VertexId, weight: U) -> Self {
        Self {
            weight,
            kind: EdgeKind::Directed,
            source: Endpoint::Resolved(source),
            target: Endpoint::Resolved(target),
        }
    }

    /// Create an undirected edge between two materialized vertices.
    #[must_use]
    pub fn undirected(a: VertexId, b: VertexId, weight: U) -> Self {
        Self {
            weight,
            kind: EdgeKind::Undirected,
            source: Endpoint::Resolved(a),
            target: Endpoint::Resolved(b),
        }
    }

    /// Create a frontier edge: directed, with a pending target.
    #[must_use]
    pub fn frontier(source: VertexId, token: FrontierToken, weight: U) -> Self {
        Self {
            weight,
            kind: EdgeKind::Directed,
            source: Endpoint::Resolved(source),
            target: Endpoint::Pending(token),
        }
    }

    /// Shared access to the weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> &U {
        &self.weight
    }

    /// Mutable access to the weight.
    #[inline]
    pub fn weight_mut(&mut self) -> &mut U {
        &mut self.weight
    }

    /// Consume the record and return the weight.
    #[must_use]
    pub fn into_weight(self) -> U {
        self.weight
    }

    /// Whether this edge is directed or undirected.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// The source endpoint (first endpoint for undirected edges).
    #[inline]
    #[must_use]
    pub const fn source(&self) -> Endpoint {
        self.source
    }

    /// The target endpoint (second endpoint for undirected edges).
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Endpoint {
        self.target
    }

    /// Both endpoints as vertex ids, if both are materialized.
    ///
    /// For directed edges the pair is `(source, target)`.
    #[inline]
    #[must_use]
    pub fn resolved_endpoints(&self) -> Option<(VertexId, VertexId)> {
        Some((self.source.vertex()?, self.target.vertex()?))
    }

    /// Given one endpoint, the other, provided `vertex` is a materialized
    /// endpoint of this edge and the far end is materialized too.
    ///
    /// For a self-loop the opposite of the vertex is itself.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        let (a, b) = (self.source.vertex(), self.target.vertex());
        if a == Some(vertex) {
            b
        } else if b == Some(vertex) {
            a
        } else {
            None
        }
    }

    /// True while either endpoint is pending.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.source.is_pending() || self.target.is_pending()
    }

    /// The pending token, if any.
    #[inline]
    #[must_use]
    pub fn pending_token(&self) -> Option<FrontierToken> {
        self.source.token().or_else(|| self.target.token())
    }

    /// Rewrite both resolved endpoints through `f`.
    ///
    /// Pending endpoints keep their token. Used by compaction to translate
    /// old slot ids to the post-compaction layout.
    pub fn remap_endpoints<F>(&mut self, mut f: F)
    where
        F: FnMut(VertexId) -> VertexId,
    {
        if let Endpoint::Resolved(v) = self.source {
            self.source = Endpoint::Resolved(f(v));
        }
        if let Endpoint::Resolved(v) = self.target {
            self.target = Endpoint::Resolved(f(v));
        }
    }

    /// Replace the pending target with a materialized vertex.
    ///
    /// Returns `false` (leaving the edge untouched) if the target was
    /// already resolved.
    pub fn resolve_target(&mut self, vertex: VertexId) -> bool {
        if self.target.is_pending() {
            self.target = Endpoint::Resolved(vertex);
            true
        } else {
            false
        }
    }
}
