// file: src/zfs/snapshot.rs
// version: 1.0.0
// guid: 3f8b02d6-5c79-4a14-8e38-b6a2d9f17c45

//! Point-in-time snapshots of converted volumes

use crate::error::ConvertError;
use crate::Result;
use std::time::Duration;
use tokio::process::Command;
use tracing::info;
use uuid::Uuid;

/// Deadline for snapshot creation
const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(120);

/// Snapshot a machine's boot volume, tagged with the build stamp
///
/// Fails if the snapshot already exists; same-hour reruns with the same
/// machine collide by design.
pub async fn create(machine: Uuid, stamp: &str) -> Result<String> {
    let snapshot = super::snapshot_name(machine, stamp);
    info!("Snapshotting {}", snapshot);

    let output = Command::new("zfs")
        .arg("snapshot")
        .arg(&snapshot)
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(SNAPSHOT_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "zfs snapshot timed out after {} seconds",
                SNAPSHOT_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Zfs(format!("Failed to run zfs snapshot: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Zfs(format!(
            "zfs snapshot {} failed: {}",
            snapshot,
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    Ok(snapshot)
}
