// file: src/image/mod.rs
// version: 1.0.0
// guid: c8d2a6f4-0e19-4b73-a25c-7f96e3b18d40

//! Source image handling: introspection and conversion

pub mod converter;
pub mod inspector;

pub use inspector::ImageInfo;
