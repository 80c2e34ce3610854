// file: src/cli/commands.rs
// version: 1.0.0
// guid: c27e91af-4f68-4da3-b72b-e5d1a8c06fd4

//! Command implementations for the CLI

use crate::{
    config::{ConversionTarget, OsFamily},
    pipeline::ConversionPipeline,
    utils::system::SystemUtils,
    utils::validation,
    Result,
};
use std::path::Path;
use tracing::{info, warn};

/// Convert a source image into an archive plus manifest
pub async fn convert_command(image: &Path, name: &str, os: OsFamily) -> Result<()> {
    // Input checks come first; no external tool runs for an invalid source
    validation::validate_source_image(image)?;
    SystemUtils::require_prerequisites()?;

    if !SystemUtils::is_root() {
        warn!("Not running as root - vmadm and zfs operations will likely fail");
    }

    let target = ConversionTarget::new(name, os);
    info!(
        "Converting {} to {} (os {}, build {})",
        image.display(),
        target.archive_path().display(),
        target.os,
        target.stamp
    );

    let mut pipeline = ConversionPipeline::new(image, target);
    let result = pipeline.run().await;
    pipeline.cleanup().await;
    let outcome = result?;

    info!("Archive: {}", outcome.archive.display());
    info!("Manifest: {}", outcome.manifest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_command_missing_source() {
        let result =
            convert_command(Path::new("/nonexistent/disk.qcow2"), "test", OsFamily::Linux)
                .await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_convert_command_directory_source() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let result = convert_command(temp_dir.path(), "test", OsFamily::Linux).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a regular file"));
    }
}
