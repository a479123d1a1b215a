//! Diagnostic logging setup
//!
//! User-facing notices go to stdout via `println!`; this only configures the
//! `tracing` diagnostics, which are written to stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output
/// for this tool and warnings only are shown by default.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "stlsync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}
