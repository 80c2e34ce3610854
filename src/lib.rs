// file: src/lib.rs
// version: 1.0.0
// guid: 7d81c5f3-2e94-4b06-a1d8-90f4e6b27c15

//! # SmartOS Image Converter
//!
//! Converts a qcow2/vmdk/raw disk image into a SmartOS-distributable
//! compressed ZFS volume archive plus a metadata manifest, by orchestrating
//! `qemu-img`, `vmadm`, `zfs`, `gzip`, and the `create-manifest` helper.

pub mod cli;
pub mod config;
pub mod error;
pub mod image;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod utils;
pub mod vm;
pub mod zfs;

pub use error::{ConvertError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
