// file: src/zfs/archive.rs
// version: 1.0.0
// guid: 4a9c13e7-6d80-4b25-9f49-c7b3e0a28d56

//! Serializes a snapshot to a compressed archive file

use crate::error::ConvertError;
use crate::Result;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::info;

/// Deadline for the full send/compress stream
const SEND_TIMEOUT: Duration = Duration::from_secs(3600);

/// Stream `zfs send` through gzip into the archive file
///
/// The sender's stdout is piped directly into the compressor's stdin, and
/// the compressor writes to the output file. Both exit statuses are checked.
pub async fn send_compressed<P: AsRef<Path>>(snapshot: &str, archive: P) -> Result<()> {
    let archive = archive.as_ref();
    info!("Archiving {} to {}", snapshot, archive.display());

    let mut sender = Command::new("zfs")
        .args(["send", snapshot])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ConvertError::Zfs(format!("Failed to spawn zfs send: {}", e)))?;

    let sender_stdout = sender
        .stdout
        .take()
        .ok_or_else(|| ConvertError::Zfs("zfs send produced no stdout handle".to_string()))?;
    let sender_stdout: Stdio = sender_stdout
        .try_into()
        .map_err(|e| ConvertError::Zfs(format!("Failed to wire zfs send stdout: {}", e)))?;

    let archive_file = std::fs::File::create(archive)?;

    let compressor = Command::new("gzip")
        .stdin(sender_stdout)
        .stdout(Stdio::from(archive_file))
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ConvertError::Zfs(format!("Failed to spawn gzip: {}", e)))?;

    let stream = async {
        let sender_output = sender.wait_with_output().await.map_err(|e| {
            ConvertError::Zfs(format!("Failed to wait for zfs send: {}", e))
        })?;
        let compressor_output = compressor.wait_with_output().await.map_err(|e| {
            ConvertError::Zfs(format!("Failed to wait for gzip: {}", e))
        })?;
        Ok::<_, ConvertError>((sender_output, compressor_output))
    };

    let (sender_output, compressor_output) = tokio::time::timeout(SEND_TIMEOUT, stream)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "zfs send timed out after {} seconds",
                SEND_TIMEOUT.as_secs()
            ))
        })??;

    if !sender_output.status.success() {
        return Err(ConvertError::Zfs(format!(
            "zfs send {} failed: {}",
            snapshot,
            String::from_utf8_lossy(&sender_output.stderr)
        )));
    }

    if !compressor_output.status.success() {
        return Err(ConvertError::Zfs(format!(
            "gzip failed: {}",
            String::from_utf8_lossy(&compressor_output.stderr)
        )));
    }

    info!("Archive written to {}", archive.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_nonexistent_snapshot() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let archive = temp_dir.path().join("out.zfs.gz");

        let result = send_compressed("zones/no-such-volume@nope", &archive).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_send_unwritable_archive_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let archive = temp_dir.path().join("missing-dir").join("out.zfs.gz");

        let result = send_compressed("zones/no-such-volume@nope", &archive).await;
        assert!(result.is_err());
    }
}
