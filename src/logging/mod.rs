// file: src/logging/mod.rs
// version: 1.0.0
// guid: d38f02ba-5a79-4eb4-c83c-f6e2b9d17ae5

//! Logging infrastructure

pub mod logger;
