// file: src/zfs/mod.rs
// version: 1.0.0
// guid: 2e7a91c5-4b68-4f03-9d27-a5f1c8e06b34

//! ZFS volume naming, snapshots, and serialization

pub mod archive;
pub mod snapshot;

use uuid::Uuid;

/// Pool hosting machine datasets
const ZONES_POOL: &str = "zones";

/// Dataset backing a machine's boot disk
pub fn boot_volume(machine: Uuid) -> String {
    format!("{}/{}-disk0", ZONES_POOL, machine)
}

/// Raw character device node for a machine's boot disk
pub fn zvol_device(machine: Uuid) -> String {
    format!("/dev/zvol/rdsk/{}", boot_volume(machine))
}

/// Snapshot name for a machine's boot disk at a given build stamp
pub fn snapshot_name(machine: Uuid, stamp: &str) -> String {
    format!("{}@{}", boot_volume(machine), stamp)
}
