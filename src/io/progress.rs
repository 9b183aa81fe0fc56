//! Merge-round progress bars with automatic batching for large file sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one file: name, rounds merged, rounds needed
#[derive(Clone, Debug, Default)]
struct FileState {
    name: String,
    merged: usize,
    rounds: usize,
}

/// Coordinates progress display for one or many reconstructions
///
/// Each file gets a bar counting merge rounds. Large batches add a single
/// bar counting files, and only the most recent files keep a round bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Allocate bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(ROUND_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Start tracking a file that needs `rounds` merges
    pub fn start_file(&mut self, index: usize, path: &Path, rounds: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                name,
                merged: 0,
                rounds,
            };
        }
        self.update_bars();
    }

    /// Record that `round` merges are complete for a file
    pub fn update_round(&mut self, index: usize, round: usize) {
        if let Some(state) = self.files.get_mut(index) {
            state.merged = round;
        }
        self.update_bars();
    }

    /// Mark a file as finished
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.files.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.merged = state.rounds;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of per-file bars allocated
    pub fn file_bar_count(&self) -> usize {
        self.file_bars.len()
    }

    /// Whether a batch-level bar is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    // Shows the most recently started files in the available bars
    fn update_bars(&self) {
        let active: Vec<&FileState> = self.files.iter().filter(|f| !f.name.is_empty()).collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.rounds as u64);
            bar.set_position(state.merged as u64);
            let width = state.rounds.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.merged, state.rounds));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
