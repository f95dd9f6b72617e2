//! # Ports Layer
//!
//! Dependencies the harness needs from the outside world. The only one is
//! a source of freshly keyed scheme instances.

pub mod outbound;

pub use outbound::SchemeFactory;
