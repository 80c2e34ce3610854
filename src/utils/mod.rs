// file: src/utils/mod.rs
// version: 1.0.0
// guid: 6c1e35a9-8f02-4d47-b16b-e9d5a2c40f78

//! Shared utilities

pub mod system;
pub mod validation;
