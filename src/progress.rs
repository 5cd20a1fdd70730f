//! Progress bar display for artifact extraction

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for extracting artifacts out of an APK Set
pub struct ProgressDisplay {
    artifact_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with the total artifact count
    pub fn new(total_artifacts: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let artifact_pb = ProgressBar::new(total_artifacts);
        artifact_pb.set_style(style);

        Self { artifact_pb }
    }

    /// Update to show the artifact currently being extracted
    pub fn update(&self, entry: &str) {
        self.artifact_pb.set_message(truncate_entry(entry));
        self.artifact_pb.inc(1);
    }

    /// Finish the bar after a successful extraction
    pub fn finish(&self) {
        self.artifact_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.artifact_pb.abandon();
    }
}

/// Truncate a long entry path to its tail for display
///
/// Splits on a character boundary, so multi-byte path segments never panic.
fn truncate_entry(entry: &str) -> String {
    const MAX_DISPLAY_BYTES: usize = 50;
    if entry.len() <= MAX_DISPLAY_BYTES {
        return entry.to_string();
    }
    let tail_start = entry
        .char_indices()
        .rev()
        .nth(46)
        .map_or(0, |(index, _)| index);
    format!("...{}", &entry[tail_start..])
}
