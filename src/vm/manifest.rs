// file: src/vm/manifest.rs
// version: 1.0.0
// guid: 0a93e5c1-7f48-4d26-9b35-e2d80c16f4a7

//! Machine manifest submitted to vmadm

use serde::{Deserialize, Serialize};

/// Manifest for the throwaway KVM machine used as the conversion target
///
/// The machine never boots; it exists only so a zvol of the right size is
/// provisioned under the zones pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineManifest {
    pub brand: String,
    pub alias: String,
    pub hostname: String,
    pub autoboot: bool,
    pub ram: u32,
    pub max_physical_memory: u32,
    /// Dataset quota in GB
    pub quota: u64,
    pub disks: Vec<MachineDisk>,
}

/// Disk entry in a machine manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineDisk {
    pub boot: bool,
    pub model: String,
    /// Disk size in MB
    pub size: u64,
}

impl MachineManifest {
    /// Build the manifest for an ephemeral conversion target
    pub fn ephemeral(name: &str, quota_gb: u64, disk_size_mb: u64) -> Self {
        Self {
            brand: "kvm".to_string(),
            alias: name.to_string(),
            hostname: name.to_string(),
            autoboot: false,
            ram: 4096,
            max_physical_memory: 4096,
            quota: quota_gb,
            disks: vec![MachineDisk {
                boot: true,
                model: "virtio".to_string(),
                size: disk_size_mb,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_manifest_shape() {
        let manifest = MachineManifest::ephemeral("Ubuntu", 15, 5120);

        assert_eq!(manifest.brand, "kvm");
        assert_eq!(manifest.alias, "Ubuntu");
        assert_eq!(manifest.hostname, "Ubuntu");
        assert!(!manifest.autoboot);
        assert_eq!(manifest.ram, 4096);
        assert_eq!(manifest.max_physical_memory, 4096);
        assert_eq!(manifest.quota, 15);
        assert_eq!(manifest.disks.len(), 1);
        assert!(manifest.disks[0].boot);
        assert_eq!(manifest.disks[0].model, "virtio");
        assert_eq!(manifest.disks[0].size, 5120);
    }

    #[test]
    fn test_manifest_serializes_to_vmadm_json() {
        let manifest = MachineManifest::ephemeral("test", 12, 2048);
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["brand"], "kvm");
        assert_eq!(json["autoboot"], false);
        assert_eq!(json["quota"], 12);
        assert_eq!(json["disks"][0]["model"], "virtio");
        assert_eq!(json["disks"][0]["size"], 2048);
    }

    #[test]
    fn test_manifest_round_trip() {
        let manifest = MachineManifest::ephemeral("rt", 11, 1536);
        let json = serde_json::to_string(&manifest).unwrap();
        let back: MachineManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.alias, "rt");
        assert_eq!(back.disks[0].size, 1536);
    }
}
