//! # Signature Benchmark Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Cross-crate flows (scheme backends -> harness -> report)
//! └── benches/           # Criterion benches of the raw scheme operations
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bench-tests
//! cargo bench -p bench-tests
//! ```

pub mod integration;
