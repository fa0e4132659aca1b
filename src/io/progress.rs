//! Progress display for the load and placement phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for one assembly run
///
/// One bar tracks the parallel tile construction, a second one the
/// sequential placements. Both are safe to tick from worker threads.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    load_bar: ProgressBar,
    place_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with empty bars
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();

        let load_bar = multi_progress.add(ProgressBar::new(0));
        load_bar.set_style(PHASE_STYLE.clone());
        load_bar.set_prefix("Loading");

        let place_bar = multi_progress.add(ProgressBar::new(0));
        place_bar.set_style(PHASE_STYLE.clone());
        place_bar.set_prefix("Placing");

        Self {
            multi_progress,
            load_bar,
            place_bar,
        }
    }

    /// Size both bars for a grid of `tile_count` tiles
    pub fn initialize(&self, tile_count: usize) {
        self.load_bar.set_length(tile_count as u64);
        self.place_bar.set_length(tile_count as u64);
    }

    /// Report one constructed tile
    pub fn tile_loaded(&self) {
        self.load_bar.inc(1);
    }

    /// Report one placement at `(column, row)`
    pub fn tile_placed(&self, column: usize, row: usize) {
        self.place_bar.inc(1);
        self.place_bar.set_message(format!("({column}, {row})"));
    }

    /// Number of tiles constructed so far
    pub fn loaded(&self) -> u64 {
        self.load_bar.position()
    }

    /// Number of placements reported so far
    pub fn placed(&self) -> u64 {
        self.place_bar.position()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.load_bar.finish();
        self.place_bar.finish_with_message("done");
        let _ = self.multi_progress.clear();
    }

    /// Stop both bars where they are after a failed run
    pub fn abandon(&self) {
        self.load_bar.abandon();
        self.place_bar.abandon_with_message("failed");
    }

    /// Whether both bars have stopped
    pub fn is_finished(&self) -> bool {
        self.load_bar.is_finished() && self.place_bar.is_finished()
    }
}
