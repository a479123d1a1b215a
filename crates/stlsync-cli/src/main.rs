mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use stlsync::config::ConfigManager;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = ConfigManager::load(cli.config.as_deref(), cli.no_config)
        .context("Failed to load configuration")?;
    config.dry_run |= cli.dry_run;

    tracing::debug!(?config, "effective configuration");

    // Copies a dry run only pretended to make, so the map preview includes them
    let pending = match &cli.source_dir {
        Some(source_dir) => {
            commands::CopyModels::execute(source_dir, &cli.dest_dir, &config)
                .context("Failed to copy models")?
                .pending
        }
        None => Vec::new(),
    };

    commands::UpdateMap::execute(&cli.dest_dir, &cli.map_file, &pending, &config)
        .context("Failed to update map file")?;

    Ok(())
}
