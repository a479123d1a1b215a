//! Map update reporting

use std::fmt::Write;

use super::MapUpdateResult;

/// Map update reporter
pub struct MapReporter;

impl MapReporter {
    /// Generate the closing summary for a map update
    #[must_use]
    pub fn generate_summary(result: &MapUpdateResult) -> String {
        let mut output = String::new();

        output.push('\n');
        if result.written {
            let _ = writeln!(output, "Wrote map file: {}", result.map_file.display());
        } else {
            let _ = writeln!(output, "Map file not written: {}", result.map_file.display());
        }
        let _ = writeln!(output, "Total unique components in map: {}", result.total);

        output
    }
}
