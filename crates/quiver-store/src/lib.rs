//! Quiver Store
//!
//! This crate provides the storage capability traits and the backend
//! implementations for Quiver graphs.
//!
//! # Overview
//!
//! The store layer separates *what a graph engine can do* from *how one is
//! built*. Callers program against the capability traits; an engine
//! implements them over whatever backing structure it likes. This is what
//! lets the facade in the `quiver` crate swap engines with a type
//! parameter.
//!
//! # Core Traits
//!
//! - [`VertexStore`] - Vertex ownership: creation, removal, payload access
//! - [`EdgeStore`] - Edge ownership: insertion, lookup, removal, adjacency
//! - [`GraphStore`] - The union of both, blanket-implemented
//! - [`FrontierStore`] - Edges into not-yet-materialized vertices
//!
//! # Error Handling
//!
//! All operations return [`GraphResult<T>`], an alias for
//! `Result<T, GraphError>`. Misuse that a pointer-based graph would leave
//! undefined (stale handles, cross-graph handles, non-endpoint vertices)
//! is a typed [`GraphError`] here.
//!
//! # Example
//!
//! ```
//! use quiver_core::Adjacency;
//! use quiver_store::backends::hash::HashGraph;
//! use quiver_store::{EdgeStore, GraphResult, VertexStore};
//!
//! fn example() -> GraphResult<()> {
//!     let mut graph: HashGraph<&str, u32> = HashGraph::new();
//!     let a = graph.add_vertex("a")?;
//!     let b = graph.add_vertex("b")?;
//!     let c = graph.add_vertex("c")?;
//!
//!     graph.add_directed_edge(a, b, 10)?;
//!     graph.add_directed_edge(b, c, 20)?;
//!
//!     assert_eq!(graph.edge_count(), 2);
//!     assert_eq!(graph.degree(b, Adjacency::Incoming)?, 1);
//!     assert_eq!(graph.degree(b, Adjacency::Outgoing)?, 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Modules
//!
//! - [`engine`] - Capability traits, handles, and error types
//! - [`backends`] - Concrete storage engines

#![deny(clippy::unwrap_used)]

pub mod backends;
pub mod engine;

pub use engine::{
    EdgeRef, EdgeStore, FrontierStore, GraphError, GraphResult, GraphStore, VertexRef, VertexStore,
};
