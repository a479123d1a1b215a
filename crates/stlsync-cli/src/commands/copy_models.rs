use std::path::Path;

use anyhow::Context;
use stlsync::config::Config;
use stlsync::sync::{CopyReporter, CopyResult, ModelCopier};

pub struct CopyModels;

impl CopyModels {
    pub fn execute(
        source_dir: &Path,
        dest_dir: &Path,
        config: &Config,
    ) -> anyhow::Result<CopyResult> {
        tracing::debug!(
            source = %source_dir.display(),
            dest = %dest_dir.display(),
            dry_run = config.dry_run,
            "executing copy phase"
        );

        let copier = ModelCopier::new(config).context("Failed to initialize model copier")?;
        let result = copier
            .copy(source_dir, dest_dir)
            .context("Copy operation failed")?;

        println!();
        print!("{}", CopyReporter::generate_summary(&result));

        Ok(result)
    }
}
