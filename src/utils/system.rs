// file: src/utils/system.rs
// version: 1.0.0
// guid: 8e3a57cb-0b24-4f69-d38d-a1f7c4e62b90

//! System utility functions

use crate::error::ConvertError;
use crate::Result;
use tracing::debug;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check that every external collaborator the pipeline needs is present
    ///
    /// Returns the list of missing commands, empty when all are available.
    pub fn check_prerequisites() -> Vec<String> {
        let required_commands = ["qemu-img", "vmadm", "zfs", "gzip", "create-manifest"];

        let mut missing = Vec::new();
        for cmd in &required_commands {
            if !Self::command_exists(cmd) {
                missing.push(cmd.to_string());
            } else {
                debug!("Found required command: {}", cmd);
            }
        }

        missing
    }

    /// Check if running as root
    ///
    /// vmadm and zfs both require root; the pipeline warns up front instead
    /// of failing three steps in.
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    /// Fail fast when collaborators are missing
    pub fn require_prerequisites() -> Result<()> {
        let missing = Self::check_prerequisites();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConvertError::System(format!(
                "Missing required commands: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(SystemUtils::command_exists("ls"));
        assert!(!SystemUtils::command_exists("nonexistent-command-12345"));
    }

    #[test]
    fn test_check_prerequisites_reports_missing() {
        // vmadm only exists on SmartOS; on development machines the check
        // must report it rather than panic
        let missing = SystemUtils::check_prerequisites();
        assert!(missing.iter().all(|m| !m.is_empty()));
    }
}
