// file: src/image/converter.rs
// version: 1.0.0
// guid: e1a74c58-9d23-4f06-8b12-c4357e9a0d86

//! Streams a source image onto an ephemeral machine's raw block device

use crate::error::ConvertError;
use crate::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::info;
use uuid::Uuid;

/// Deadline for the full conversion; large images take a while
const CONVERT_TIMEOUT: Duration = Duration::from_secs(3600);

/// Convert the source image onto the machine's boot zvol
///
/// One-directional, non-resumable copy. A failure leaves the device in a
/// partially written state; the caller tears the machine down.
pub async fn convert_to_zvol<P: AsRef<Path>>(
    source: P,
    format: &str,
    machine: Uuid,
) -> Result<()> {
    let source = source.as_ref();
    let device = crate::zfs::zvol_device(machine);

    info!(
        "Converting {} ({}) onto {}",
        source.display(),
        format,
        device
    );

    let output = Command::new("qemu-img")
        .args(["convert", "-f", format, "-O", "raw"])
        .arg(source)
        .arg(&device)
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(CONVERT_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "qemu-img convert timed out after {} seconds",
                CONVERT_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Image(format!("Failed to run qemu-img convert: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Image(format!(
            "qemu-img convert failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    info!("Conversion completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::fs as async_fs;

    #[tokio::test]
    async fn test_convert_invalid_source() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.qcow2");
        let machine = Uuid::new_v4();

        let result = convert_to_zvol(&missing, "qcow2", machine).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_convert_bogus_image_content() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let source = temp_dir.path().join("bogus.qcow2");
        async_fs::write(&source, b"not a real qcow2").await.unwrap();
        let machine = Uuid::new_v4();

        // No zvol exists for a random UUID, so conversion must fail
        let result = convert_to_zvol(&source, "qcow2", machine).await;
        assert!(result.is_err());
    }
}
