//! Hash-indexed in-memory backend.
//!
//! This module provides [`HashGraph`], the reference storage engine. It
//! keeps vertices and edges in dense slot vectors addressed by index and
//! expresses adjacency as per-vertex hash sets of edge ids plus
//! neighbor-to-edge reverse maps.
//!
//! # Characteristics
//!
//! - **O(1) amortized** insertion, removal, and pair-connectivity queries
//! - **Stable identities**: removal tombstones a slot; ids only move on an
//!   explicit [`HashGraph::compact`]
//! - **Pointer-free**: adjacency holds ids, never references, so a graph
//!   can be cloned, serialized, or sent across threads wholesale
//!
//! # Example
//!
//! ```
//! use quiver_store::backends::hash::HashGraph;
//! use quiver_store::{EdgeStore, GraphResult, VertexStore};
//!
//! fn example() -> GraphResult<()> {
//!     let mut graph: HashGraph<&str, f32> = HashGraph::new();
//!     let hub = graph.add_vertex("hub")?;
//!     let rim = graph.add_vertex("rim")?;
//!     graph.add_undirected_edge(hub, rim, 1.0)?;
//!
//!     assert!(graph.is_connected(hub, rim, quiver_core::Adjacency::Undirected)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod graph;
mod iter;

pub use graph::{Compaction, HashGraph};
pub use iter::{AdjacencyIds, EdgeIds, VertexIds, Weights};
