// file: src/vm/provisioner.rs
// version: 1.0.0
// guid: 1c5f82a6-3d90-4e74-a518-6b29f0d3c7e1

//! vmadm create/delete wrapper

use crate::error::ConvertError;
use crate::Result;
use regex::Regex;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};
use uuid::Uuid;

/// Deadline for machine create/delete; vmadm provisions a zvol synchronously
const VMADM_TIMEOUT: Duration = Duration::from_secs(300);

/// Create an ephemeral machine from a manifest file and return its UUID
///
/// vmadm confirms creation with a single human-readable line; the generated
/// UUID is extracted from it and validated, and anything else is an error.
pub async fn create<P: AsRef<Path>>(manifest_path: P) -> Result<Uuid> {
    let manifest_path = manifest_path.as_ref();
    info!("Creating ephemeral machine from {}", manifest_path.display());

    let output = Command::new("vmadm")
        .args(["create", "-f"])
        .arg(manifest_path)
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(VMADM_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "vmadm create timed out after {} seconds",
                VMADM_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Vm(format!("Failed to run vmadm create: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Vm(format!(
            "vmadm create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    // vmadm prints the confirmation on stderr
    let confirmation = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
    let uuid = parse_machine_uuid(&confirmation)?;

    info!("Created machine {}", uuid);
    Ok(uuid)
}

/// Delete a machine by UUID
pub async fn destroy(machine: Uuid) -> Result<()> {
    debug!("Deleting machine {}", machine);

    let output = Command::new("vmadm")
        .arg("delete")
        .arg(machine.to_string())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(VMADM_TIMEOUT, output)
        .await
        .map_err(|_| {
            ConvertError::Timeout(format!(
                "vmadm delete timed out after {} seconds",
                VMADM_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ConvertError::Vm(format!("Failed to run vmadm delete: {}", e)))?;

    if !output.status.success() {
        return Err(ConvertError::Vm(format!(
            "vmadm delete {} failed: {}",
            machine,
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    info!("Deleted machine {}", machine);
    Ok(())
}

/// Extract the generated machine UUID from vmadm's confirmation output
pub fn parse_machine_uuid(confirmation: &str) -> Result<Uuid> {
    let pattern = Regex::new(
        r"Successfully created VM ([0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})",
    )
    .map_err(|e| ConvertError::Vm(format!("Invalid UUID pattern: {}", e)))?;

    let captures = pattern.captures(confirmation).ok_or_else(|| {
        ConvertError::Vm(format!(
            "Could not find machine UUID in vmadm output: {}",
            confirmation.trim()
        ))
    })?;

    Uuid::parse_str(&captures[1])
        .map_err(|e| ConvertError::Vm(format!("vmadm returned an invalid UUID: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_machine_uuid() {
        let uuid = parse_machine_uuid(
            "Successfully created VM 7b0a232a-08e0-11e2-9b2f-cf1a79d7b737\n",
        )
        .unwrap();
        assert_eq!(
            uuid.to_string(),
            "7b0a232a-08e0-11e2-9b2f-cf1a79d7b737"
        );
    }

    #[test]
    fn test_parse_machine_uuid_surrounding_noise() {
        let confirmation =
            "provisioning dataset...\nSuccessfully created VM 5b077276-08e1-11e2-b2bb-83c0eb1a018c";
        assert!(parse_machine_uuid(confirmation).is_ok());
    }

    #[test]
    fn test_parse_machine_uuid_rejects_garbage() {
        assert!(parse_machine_uuid("").is_err());
        assert!(parse_machine_uuid("Successfully created VM not-a-uuid").is_err());
        assert!(parse_machine_uuid("cannot create VM: insufficient space").is_err());
    }

    #[tokio::test]
    async fn test_destroy_without_vmadm() {
        // vmadm is not present on development machines; deletion must
        // surface an error rather than succeed silently
        let result = destroy(Uuid::new_v4()).await;
        assert!(result.is_err());
    }
}
