use std::path::Path;

use anyhow::Context;
use stlsync::config::Config;
use stlsync::map::{MapReporter, MapUpdater};
use stlsync::scanner::ModelFile;

pub struct UpdateMap;

impl UpdateMap {
    pub fn execute(
        dest_dir: &Path,
        map_file: &Path,
        pending: &[ModelFile],
        config: &Config,
    ) -> anyhow::Result<()> {
        tracing::debug!(
            dest = %dest_dir.display(),
            map = %map_file.display(),
            dry_run = config.dry_run,
            pending = pending.len(),
            "executing map update"
        );

        let updater = MapUpdater::new(config).context("Failed to initialize map updater")?;
        let result = updater
            .update_with_pending(dest_dir, map_file, pending)
            .context("Map update failed")?;

        print!("{}", MapReporter::generate_summary(&result));

        Ok(())
    }
}
