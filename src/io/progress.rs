//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Textures: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch stitching
///
/// Shows one bar per texture reporting composited frames, and adds an
/// aggregate bar when the batch grows past the individual-bar threshold.
/// Bars form a rolling window over the most recently started files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `current_frame`, `frame_count`) per file
    file_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Batch mode keeps large directory runs from spamming the terminal
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(FRAME_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a new file and its frame count
    pub fn start_file(&mut self, index: usize, path: &Path, frame_count: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, frame_count);
        }
        self.update_bars();
    }

    /// Report a composited frame for the given file
    pub fn update_frame(&mut self, index: usize, frame: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = frame;
        }
        self.update_bars();
    }

    /// Mark a file as fully stitched and advance the batch bar
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All textures stitched");
        }
        let _ = self.multi_progress.clear();
    }

    /// Redraw the rolling window of the most recently started files
    fn update_bars(&self) {
        let started: Vec<&(String, usize, usize)> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let window_start = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(window_start..).unwrap_or(&[]);

        for (bar, (name, frame, frame_count)) in self.file_bars.iter().zip(visible) {
            bar.set_length(*frame_count as u64);
            bar.set_position(*frame as u64);
            bar.set_prefix(name.clone());
            bar.set_message(format!("frame {frame}/{frame_count}"));
        }

        // Blank any bars beyond the started files
        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
