// file: src/config/target.rs
// version: 1.0.0
// guid: b3e7f1a9-6c24-4d85-9f31-2a80d5c47e96

//! Target descriptor for a conversion run

use super::OsFamily;
use std::path::PathBuf;

/// Describes what a conversion run produces: a display name, an OS
/// classification, and the build stamp used to namespace output artifacts.
#[derive(Debug, Clone)]
pub struct ConversionTarget {
    /// Output base name (e.g. "Ubuntu")
    pub name: String,
    /// OS classification for the distribution manifest
    pub os: OsFamily,
    /// Build stamp, hour granularity (YYYYMMDDHH, UTC)
    pub stamp: String,
}

impl ConversionTarget {
    /// Create a target stamped with the current build hour
    pub fn new(name: impl Into<String>, os: OsFamily) -> Self {
        Self {
            name: name.into(),
            os,
            stamp: build_stamp(),
        }
    }

    /// Path of the compressed volume archive this run produces
    pub fn archive_path(&self) -> PathBuf {
        PathBuf::from(format!("{}-{}.zfs.gz", self.name, self.stamp))
    }

    /// Path of the distribution manifest this run produces
    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(format!("{}-{}.json", self.name, self.stamp))
    }
}

/// Build stamp for namespacing output artifacts
///
/// Hour granularity: two runs with the same name within the same hour
/// produce colliding artifact and snapshot names.
pub fn build_stamp() -> String {
    chrono::Utc::now().format("%Y%m%d%H").to_string()
}
