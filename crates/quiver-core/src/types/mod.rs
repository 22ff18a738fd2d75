//! Core data types for Quiver.
//!
//! This module defines the records a graph store is made of: identifiers,
//! vertex and edge records, endpoints, and the enums that classify edges and
//! select adjacency sets.

mod edge;
mod id;
mod kind;
mod vertex;


pub use edge::{Edge, Endpoint};
pub use id::{EdgeId, FrontierToken, VertexId};
pub use kind::{Adjacency, EdgeKind};
pub use vertex::Vertex;
