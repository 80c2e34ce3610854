// file: src/cli/args.rs
// version: 1.0.0
// guid: b16d80fe-3e57-4c92-a61a-d4c0f7b95ec3

//! Command line argument definitions

use crate::config::OsFamily;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartos-image-converter")]
#[command(about = "Convert a disk image into a SmartOS-distributable ZFS volume archive")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Source disk image (qcow2, vmdk, or raw)
    #[arg(short = 'i', long)]
    pub image: PathBuf,

    /// Output base name for the archive and manifest
    #[arg(short = 'n', long)]
    pub name: String,

    /// OS classification recorded in the manifest
    #[arg(short = 'o', long, value_enum, ignore_case = true)]
    pub os: OsArg,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

/// OS family argument for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OsArg {
    Bsd,
    Illumos,
    Linux,
    Other,
    Smartos,
    Windows,
}

impl From<OsArg> for OsFamily {
    fn from(os: OsArg) -> Self {
        match os {
            OsArg::Bsd => OsFamily::Bsd,
            OsArg::Illumos => OsFamily::Illumos,
            OsArg::Linux => OsFamily::Linux,
            OsArg::Other => OsFamily::Other,
            OsArg::Smartos => OsFamily::SmartOs,
            OsArg::Windows => OsFamily::Windows,
        }
    }
}

impl From<OsFamily> for OsArg {
    fn from(os: OsFamily) -> Self {
        match os {
            OsFamily::Bsd => OsArg::Bsd,
            OsFamily::Illumos => OsArg::Illumos,
            OsFamily::Linux => OsArg::Linux,
            OsFamily::Other => OsArg::Other,
            OsFamily::SmartOs => OsArg::Smartos,
            OsFamily::Windows => OsArg::Windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_os_arg_maps_to_os_family() {
        assert_eq!(OsFamily::from(OsArg::Linux), OsFamily::Linux);
        assert_eq!(OsFamily::from(OsArg::Smartos), OsFamily::SmartOs);
        assert_eq!(OsFamily::from(OsArg::Other), OsFamily::Other);
    }

    #[test]
    fn test_parse_required_flags() {
        let cli = Cli::try_parse_from([
            "smartos-image-converter",
            "-i",
            "disk.qcow2",
            "-n",
            "Ubuntu",
            "-o",
            "linux",
        ])
        .unwrap();

        assert_eq!(cli.image, PathBuf::from("disk.qcow2"));
        assert_eq!(cli.name, "Ubuntu");
        assert!(matches!(cli.os, OsArg::Linux));
    }

    #[test]
    fn test_parse_os_case_insensitive() {
        let cli = Cli::try_parse_from([
            "smartos-image-converter",
            "-i",
            "disk.qcow2",
            "-n",
            "Ubuntu",
            "-o",
            "Linux",
        ])
        .unwrap();
        assert!(matches!(cli.os, OsArg::Linux));
    }

    #[test]
    fn test_parse_rejects_unknown_os() {
        let result = Cli::try_parse_from([
            "smartos-image-converter",
            "-i",
            "disk.qcow2",
            "-n",
            "Ubuntu",
            "-o",
            "solaris",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_flags() {
        assert!(Cli::try_parse_from(["smartos-image-converter"]).is_err());
        assert!(
            Cli::try_parse_from(["smartos-image-converter", "-i", "disk.qcow2"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "smartos-image-converter",
            "-i",
            "disk.qcow2",
            "-n",
            "Ubuntu",
        ])
        .is_err());
    }
}
