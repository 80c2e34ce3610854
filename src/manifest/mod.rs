// file: src/manifest/mod.rs
// version: 1.0.0
// guid: 5b0d24f8-7e91-4c36-a05a-d8c4f1b39e67

//! Distribution manifest emission
//!
//! Delegates entirely to the external create-manifest helper and captures
//! its stdout verbatim.

use crate::config::ConversionTarget;
use crate::error::ConvertError;
use crate::Result;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::info;

/// Deadline for the manifest helper
const MANIFEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Arguments passed to the create-manifest helper
pub fn helper_args(
    archive: &Path,
    target: &ConversionTarget,
    size_mb: u64,
) -> Vec<OsString> {
    vec![
        OsString::from("-f"),
        archive.as_os_str().to_owned(),
        OsString::from("-n"),
        OsString::from(&target.name),
        OsString::from("-s"),
        OsString::from(size_mb.to_string()),
        OsString::from("-v"),
        OsString::from(&target.stamp),
        OsString::from("-o"),
        OsString::from(target.os.as_str()),
    ]
}

/// Run the helper and write its stdout to the manifest file
pub async fn emit(
    archive: &Path,
    target: &ConversionTarget,
    size_mb: u64,
    manifest_path: &Path,
) -> Result<()> {
    info!("Generating manifest {}", manifest_path.display());

    let output = Command::new("create-manifest")
        .args(helper_args(archive, target, size_mb))
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(MANIFEST_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "create-manifest timed out after {} seconds",
                MANIFEST_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Manifest(format!("Failed to run create-manifest: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Manifest(format!(
            "create-manifest failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    tokio::fs::write(manifest_path, &output.stdout).await?;

    info!("Manifest written to {}", manifest_path.display());
    Ok(())
}
