//! Terminal progress display for the assembly search

use crate::io::configuration::{BACKTRACK_REPORT_INTERVAL, PROGRESS_BAR_WIDTH, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{spinner}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows how deep the backtracking search has reached
///
/// The bar length is the number of grid cells; its position is the deepest
/// cell filled so far. Backtracks are tallied in the message. Drawing goes to
/// stderr and is suppressed when stderr is not a terminal.
pub struct SearchProgress {
    bar: ProgressBar,
    deepest: usize,
    backtracks: u64,
}

impl SearchProgress {
    /// Progress bar drawn on stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            None,
            ProgressDrawTarget::stderr(),
        ))
    }

    /// Progress tracker that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(SEARCH_STYLE.clone());
        Self {
            bar,
            deepest: 0,
            backtracks: 0,
        }
    }

    /// Reset for a search over the given number of grid cells
    pub fn start(&mut self, cells: usize) {
        self.deepest = 0;
        self.backtracks = 0;
        self.bar.set_length(cells as u64);
        self.bar.set_position(0);
        self.bar.set_message("searching");
        self.bar
            .enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    }

    /// Record that `depth` cells are now filled
    pub fn placed(&mut self, depth: usize) {
        if depth > self.deepest {
            self.deepest = depth;
            self.bar.set_position(depth as u64);
        }
    }

    /// Record one undone placement
    ///
    /// The message is refreshed every [`BACKTRACK_REPORT_INTERVAL`] backtracks
    /// and never for a hidden bar.
    pub fn backtracked(&mut self) {
        self.backtracks += 1;
        if self.backtracks.is_multiple_of(BACKTRACK_REPORT_INTERVAL) && !self.bar.is_hidden() {
            self.bar
                .set_message(format!("{} backtracks", self.backtracks));
        }
    }

    /// Deepest number of cells filled so far
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Number of placements undone so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Clear the display once the search ends
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::hidden()
    }
}
