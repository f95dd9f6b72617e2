//! Cross-crate integration tests.

pub mod end_to_end;
pub mod failure_paths;
pub mod scheme_contract;
