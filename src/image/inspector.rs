// file: src/image/inspector.rs
// version: 1.0.0
// guid: d5f09b27-3a61-4c48-b890-1e6c72a4f5d3

//! Source image introspection via qemu-img

use crate::error::ConvertError;
use crate::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Deadline for qemu-img info; introspection reads only image headers
const INSPECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Headroom added on top of the source size when sizing the target quota
const QUOTA_HEADROOM_GB: u64 = 10;

/// Source image information reported by qemu-img
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// On-disk format tag (qcow2, vmdk, raw, ...)
    pub format: String,
    /// Virtual size in bytes
    pub virtual_size: u64,
}

impl ImageInfo {
    /// Parse qemu-img info JSON output
    pub fn from_json(json: &str) -> Result<Self> {
        let info: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            ConvertError::Image(format!("Failed to parse qemu-img output: {}", e))
        })?;

        let format = info["format"]
            .as_str()
            .ok_or_else(|| {
                ConvertError::Image("qemu-img output has no format field".to_string())
            })?
            .to_string();

        let virtual_size = info["virtual-size"].as_u64().ok_or_else(|| {
            ConvertError::Image("qemu-img output has no virtual-size field".to_string())
        })?;

        Ok(Self {
            format,
            virtual_size,
        })
    }

    /// Virtual size in whole megabytes
    pub fn size_mb(&self) -> u64 {
        self.virtual_size / 1024 / 1024
    }

    /// Target disk quota in gigabytes: source size rounded down, plus headroom
    pub fn quota_gb(&self) -> u64 {
        self.size_mb() / 1024 + QUOTA_HEADROOM_GB
    }
}

/// Inspect a source image with qemu-img info
pub async fn inspect<P: AsRef<Path>>(image_path: P) -> Result<ImageInfo> {
    let path = image_path.as_ref();
    debug!("Inspecting source image: {}", path.display());

    let output = Command::new("qemu-img")
        .args(["info", "--output=json"])
        .arg(path)
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(INSPECT_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "qemu-img info timed out after {} seconds",
                INSPECT_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Image(format!("Failed to run qemu-img info: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Image(format!(
            "qemu-img info failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    ImageInfo::from_json(&String::from_utf8_lossy(&output.stdout))
}
