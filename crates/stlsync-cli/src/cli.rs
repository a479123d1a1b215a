use clap::Parser;
use std::path::PathBuf;

/// Update an STL standard library and its component map
///
/// Optionally copies new and changed STL models from a source tree into the
/// library, then indexes every model in the library into a JSON component map.
#[derive(Parser, Debug)]
#[command(name = "stlsync")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Copy new and updated STL models from this directory tree
    #[arg(long, value_name = "PATH")]
    pub source_dir: Option<PathBuf>,

    /// Destination directory within the standard library repository
    #[arg(value_name = "DEST_DIR")]
    pub dest_dir: PathBuf,

    /// Path to a new or existing component map file to update
    #[arg(value_name = "MAP_FILE")]
    pub map_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without copying files or writing the map
    #[arg(long)]
    pub dry_run: bool,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}
