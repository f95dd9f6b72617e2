//! # Adapters Module
//!
//! Implementations of the outbound ports.

pub mod backend;

pub use backend::BackendFactory;
