//! Concrete storage backend implementations.
//!
//! Currently one backend ships: the hash-indexed in-memory engine in
//! [`hash`]. The capability traits in [`crate::engine`] are the contract a
//! future backend (e.g. a matrix-backed engine for dense graphs) would
//! implement instead.

pub mod hash;
