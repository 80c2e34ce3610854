// file: src/cli/mod.rs
// version: 1.0.0
// guid: a05c79ed-2d46-4b81-f50f-c3b9e6a84db2

//! Command line interface

pub mod args;
pub mod commands;
