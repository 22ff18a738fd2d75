//! Graph capability traits and abstractions.
//!
//! This module defines the contracts any storage engine must satisfy:
//!
//! - [`VertexStore`] / [`EdgeStore`] - The two storage capabilities
//! - [`GraphStore`] - Their union, blanket-implemented
//! - [`FrontierStore`] - Optional pending-endpoint support
//! - [`VertexRef`] / [`EdgeRef`] - Validated per-object handles
//!
//! # Error Handling
//!
//! All operations return [`GraphResult<T>`], an alias for
//! `Result<T, GraphError>`. See [`GraphError`] for the failure taxonomy.

mod error;
mod handle;
mod traits;

pub use error::{GraphError, GraphResult};
pub use handle::{EdgeRef, VertexRef};
pub use traits::{EdgeStore, FrontierStore, GraphStore, VertexStore};
