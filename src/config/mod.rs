// file: src/config/mod.rs
// version: 1.0.0
// guid: a9c4e2d7-1b58-4f36-8d02-5e7a93c1f6b8

//! Configuration module for the SmartOS image converter
//!
//! Holds the target descriptor for a conversion run and the closed set of
//! supported OS classifications.

pub mod target;

pub use target::{build_stamp, ConversionTarget};

use serde::{Deserialize, Serialize};

/// OS classification recorded in the distribution manifest
///
/// This is a closed set; anything else is rejected at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    #[serde(rename = "bsd")]
    Bsd,
    #[serde(rename = "illumos")]
    Illumos,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "smartos")]
    SmartOs,
    #[serde(rename = "windows")]
    Windows,
}

impl OsFamily {
    /// Get the OS family as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Bsd => "bsd",
            OsFamily::Illumos => "illumos",
            OsFamily::Linux => "linux",
            OsFamily::Other => "other",
            OsFamily::SmartOs => "smartos",
            OsFamily::Windows => "windows",
        }
    }
}

impl std::str::FromStr for OsFamily {
    type Err = crate::error::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bsd" => Ok(OsFamily::Bsd),
            "illumos" => Ok(OsFamily::Illumos),
            "linux" => Ok(OsFamily::Linux),
            "other" => Ok(OsFamily::Other),
            "smartos" => Ok(OsFamily::SmartOs),
            "windows" => Ok(OsFamily::Windows),
            _ => Err(crate::error::ConvertError::Validation(format!(
                "Unknown OS family: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
