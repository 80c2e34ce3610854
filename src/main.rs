// file: src/main.rs
// version: 1.0.0
// guid: f50b24dc-7c91-4ad6-e05e-b8a4d1f39ca7

//! SmartOS Image Converter - Main entry point

use clap::Parser;
use smartos_image_converter::{
    cli::{args::Cli, commands::convert_command},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting conversion...");
        cleanup_on_exit().await;
    };

    let command_future = convert_command(&cli.image, &cli.name, cli.os.into());

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Conversion interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}

/// Cleanup function called on interrupt
///
/// The scratch manifest is the only artifact with a fixed name; a machine
/// created before the interrupt has to be deleted by hand.
async fn cleanup_on_exit() {
    let _ = tokio::fs::remove_file("blank.json").await;
    warn!("An ephemeral machine may remain; check vmadm list");
}
