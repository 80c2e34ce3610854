// file: src/pipeline/mod.rs
// version: 1.0.0
// guid: 9f4b68dc-1c35-4a70-e49e-b2a8d5f73ca1

//! The conversion pipeline
//!
//! One linear sequence of steps, each a single external command. All run
//! state lives in the pipeline struct; resources are recorded as they are
//! acquired so cleanup can release them whether or not the run succeeded.

use crate::config::ConversionTarget;
use crate::image::{converter, inspector};
use crate::vm::{provisioner, MachineManifest};
use crate::{manifest, zfs, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// Scratch file holding the machine manifest between build and submit
const SCRATCH_MANIFEST: &str = "blank.json";

/// Paths of the artifacts a successful run leaves behind
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub archive: PathBuf,
    pub manifest: PathBuf,
}

/// Pipeline state for one conversion run
pub struct ConversionPipeline {
    source: PathBuf,
    target: ConversionTarget,
    scratch_manifest: Option<PathBuf>,
    machine: Option<Uuid>,
}

impl ConversionPipeline {
    pub fn new<P: AsRef<Path>>(source: P, target: ConversionTarget) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            target,
            scratch_manifest: None,
            machine: None,
        }
    }

    /// Run the pipeline to completion
    ///
    /// Stops at the first failing step. Call [`cleanup`](Self::cleanup)
    /// afterwards regardless of the result.
    pub async fn run(&mut self) -> Result<ConversionOutcome> {
        let image = inspector::inspect(&self.source).await?;
        info!(
            "Source image: {} format, {} MB virtual size",
            image.format,
            image.size_mb()
        );

        let quota = image.quota_gb();
        info!("Target disk quota: {} GB", quota);

        let machine_manifest =
            MachineManifest::ephemeral(&self.target.name, quota, image.size_mb());
        let scratch = PathBuf::from(SCRATCH_MANIFEST);
        tokio::fs::write(&scratch, serde_json::to_vec_pretty(&machine_manifest)?).await?;
        self.scratch_manifest = Some(scratch.clone());

        let machine = provisioner::create(&scratch).await?;
        self.machine = Some(machine);

        converter::convert_to_zvol(&self.source, &image.format, machine).await?;

        let snapshot = zfs::snapshot::create(machine, &self.target.stamp).await?;

        let archive = self.target.archive_path();
        zfs::archive::send_compressed(&snapshot, &archive).await?;

        let manifest_path = self.target.manifest_path();
        manifest::emit(&archive, &self.target, image.size_mb(), &manifest_path).await?;

        Ok(ConversionOutcome {
            archive,
            manifest: manifest_path,
        })
    }

    /// Release everything the run acquired
    ///
    /// Runs after both successful and failed runs. Failures here are logged
    /// and never mask the pipeline's own result.
    pub async fn cleanup(&mut self) {
        if let Some(scratch) = self.scratch_manifest.take() {
            if let Err(e) = tokio::fs::remove_file(&scratch).await {
                warn!("Failed to remove {}: {}", scratch.display(), e);
            }
        }

        if let Some(machine) = self.machine.take() {
            if let Err(e) = provisioner::destroy(machine).await {
                warn!("Failed to delete machine {}: {}", machine, e);
            }
        }
    }
}
