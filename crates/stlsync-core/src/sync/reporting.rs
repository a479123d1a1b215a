//! Copy reporting and statistics

use std::fmt::Write;

use super::CopyResult;

/// Copy phase reporter
pub struct CopyReporter;

impl CopyReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &CopyResult) -> String {
        let mut output = String::new();

        output.push_str("=== Copy Summary ===\n");
        let _ = writeln!(output, "New:       {}", result.copied);
        let _ = writeln!(output, "Updated:   {}", result.updated);
        let _ = writeln!(output, "Unchanged: {}", result.unchanged);

        if result.total_copies() == 0 {
            output.push_str("Library already up to date\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let result = CopyResult {
            copied: 5,
            updated: 3,
            unchanged: 2,
            ..CopyResult::default()
        };

        let summary = CopyReporter::generate_summary(&result);

        assert!(summary.contains("New:       5"));
        assert!(summary.contains("Updated:   3"));
        assert!(summary.contains("Unchanged: 2"));
        assert!(!summary.contains("up to date"));
    }

    #[test]
    fn test_summary_nothing_copied() {
        let result = CopyResult {
            unchanged: 4,
            ..CopyResult::default()
        };

        let summary = CopyReporter::generate_summary(&result);
        assert!(summary.contains("Library already up to date"));
    }
}
