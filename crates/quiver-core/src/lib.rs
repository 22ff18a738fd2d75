//! Quiver Core
//!
//! This crate provides the fundamental types shared by every Quiver graph
//! engine: identifiers, vertex and edge records, and endpoint variants.
//!
//! # Overview
//!
//! - **Identifiers**: [`VertexId`], [`EdgeId`], and [`FrontierToken`] for
//!   referencing graph elements by slot index rather than by pointer
//! - **Records**: [`Vertex`] (payload plus adjacency bookkeeping) and
//!   [`Edge`] (weight plus endpoints)
//! - **Classification**: [`EdgeKind`] for directed/undirected edges,
//!   [`Adjacency`] for selecting one of a vertex's three adjacency sets
//! - **Endpoints**: [`Endpoint`] distinguishing materialized vertices from
//!   pending frontier targets
//!
//! Everything here is plain data with serde derives. The capability traits
//! and the concrete engine live in `quiver-store`; this crate has no
//! opinion about how records are stored.
//!
//! # Example
//!
//! ```
//! use quiver_core::{Adjacency, Edge, EdgeId, Vertex, VertexId};
//!
//! let mut a = Vertex::new("alpha");
//! let edge = Edge::directed(VertexId::new(0), VertexId::new(1), 2.5f64);
//!
//! // The store registers the edge on both endpoints; the record keeps the
//! // edge set and the neighbor reverse map in lock-step.
//! a.register(Adjacency::Outgoing, VertexId::new(1), EdgeId::new(0));
//!
//! assert_eq!(a.degree(Adjacency::Outgoing), 1);
//! assert_eq!(a.connecting_edge(Adjacency::Outgoing, VertexId::new(1)), Some(EdgeId::new(0)));
//! assert_eq!(edge.opposite(VertexId::new(0)), Some(VertexId::new(1)));
//! ```

#![deny(clippy::unwrap_used)]

pub mod types;

pub use types::{Adjacency, Edge, EdgeId, EdgeKind, Endpoint, FrontierToken, Vertex, VertexId};
