//! Terminal progress for tile size searches

use crate::algorithm::search::SearchObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::tiles::TileSize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar advanced once per searched tile size
///
/// The message shows the size just tried and the running number of
/// placements that hit the requested subdomain count.
pub struct SearchProgress {
    bar: Option<ProgressBar>,
    matches: usize,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a progress reporter; the bar appears when the search starts
    pub const fn new() -> Self {
        Self {
            bar: None,
            matches: 0,
        }
    }

    /// Placements matching the target seen so far
    pub const fn matches(&self) -> usize {
        self.matches
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] Sizes: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl SearchObserver for SearchProgress {
    fn started(&mut self, sizes: usize) {
        let bar = ProgressBar::new(sizes as u64);
        bar.set_style(Self::style());
        self.bar = Some(bar);
        self.matches = 0;
    }

    fn size_searched(&mut self, size: TileSize, matches: usize) {
        self.matches += matches;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!(
                "nx={} ny={}: {matches} valid ({} total)",
                size.nx, size.ny, self.matches
            ));
            bar.inc(1);
        }
    }

    fn finished(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
