//! Progress display while loading inputs and writing the collage

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks decoding of the input files followed by composition and save
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call `initialize` to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar sized for `file_count` inputs
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix("Loading");
        self.bar = bar;
    }

    /// Report which input is being decoded
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark the current input as decoded
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Switch the display to the composition stage
    pub fn start_compose(&self, columns: u32, rows: u32) {
        self.bar.set_prefix("Composing");
        self.bar.set_message(format!("{columns}x{rows} grid"));
    }

    /// Clean up the progress display
    pub fn finish(&self, output: &Path) {
        self.bar.finish_with_message(format!("saved {}", output.display()));
    }

    /// Current number of decoded inputs
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
