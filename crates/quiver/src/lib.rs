//! Quiver - An Embedded In-Memory Graph Store
//!
//! Quiver is a generic graph container: vertices carry a payload type `T`,
//! edges carry a weight type `U`, and the whole structure lives behind a
//! facade whose storage engine is a swappable type parameter.
//!
//! # Features
//!
//! - **Mixed-edge graphs**: directed, undirected, and both at once
//! - **O(1) connectivity**: per-vertex reverse maps answer "is X connected
//!   to Y" without scanning adjacency
//! - **Stable identities**: removal tombstones slots; ids only move on an
//!   explicit compaction pass
//! - **Frontier expansion**: edges into not-yet-materialized vertices,
//!   resolved on demand from a generator
//! - **Checked misuse**: stale handles, duplicate edges, and missing edges
//!   are typed errors, never undefined behavior
//!
//! # Quick Start
//!
//! ```
//! use quiver::{Graph, GraphResult};
//!
//! fn example() -> GraphResult<()> {
//!     let mut graph: Graph<&str, i64> = Graph::new();
//!
//!     let a = graph.add_vertex("a")?;
//!     let b = graph.add_vertex("b")?;
//!     graph.add_directed_edge(a, b, 10)?;
//!
//!     let edge = graph.directed_edge(a, b)?;
//!     assert_eq!(*edge, 10);
//!
//!     let (va, vb) = edge.vertices()?;
//!     assert!(va.is_connected_by_out_edge(&vb));
//!
//!     assert_eq!(graph.remove_directed_edge(a, b)?, 10);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Swapping Engines
//!
//! The facade forwards every operation to its engine, so application code
//! depends on [`Graph`] alone:
//!
//! ```
//! use quiver::backends::hash::HashGraph;
//! use quiver::Graph;
//!
//! // The default engine, spelled out. A different engine implementing the
//! // store traits drops in without changing any call site.
//! let graph: Graph<String, f32, HashGraph<String, f32>> = Graph::new();
//! assert_eq!(graph.vertex_count(), 0);
//! ```
//!
//! # Modules
//!
//! - [`graph`] - The [`Graph`] facade
//! - [`traversal`] - Breadth-first iteration and neighbor expansion
//! - [`order`] - Deterministic (weight, id)-sorted views of hash-ordered
//!   adjacency

#![deny(clippy::unwrap_used)]

pub mod graph;
pub mod order;
pub mod traversal;

pub use graph::Graph;

pub use quiver_core::{
    Adjacency, Edge, EdgeId, EdgeKind, Endpoint, FrontierToken, Vertex, VertexId,
};
pub use quiver_store::backends;
pub use quiver_store::backends::hash::{Compaction, HashGraph};
pub use quiver_store::{
    EdgeRef, EdgeStore, FrontierStore, GraphError, GraphResult, GraphStore, VertexRef, VertexStore,
};
