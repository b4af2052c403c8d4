//! Two-phase progress tracking for library scanning and mosaic assembly

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display across the mosaic pipeline
///
/// Shows one bar per phase: indexing the image library, then assembling
/// the output canvas. Every method takes `&self`, so a shared reference
/// can be handed to worker threads and ticked concurrently.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    scan_bar: ProgressBar,
    assembly_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static ASSEMBLY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager with both phase bars prepared
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();

        let scan_bar = multi_progress.add(ProgressBar::new(0));
        scan_bar.set_style(SCAN_STYLE.clone());

        let assembly_bar = multi_progress.add(ProgressBar::new(0));
        assembly_bar.set_style(ASSEMBLY_STYLE.clone());

        Self {
            multi_progress,
            scan_bar,
            assembly_bar,
        }
    }

    /// Begin the library scan phase over `total_files` candidates
    pub fn start_scan(&self, total_files: u64) {
        self.scan_bar.reset();
        self.scan_bar.set_length(total_files);
        self.scan_bar.set_message("Indexing library");
    }

    /// Record one scanned library file
    pub fn scan_tick(&self) {
        self.scan_bar.inc(1);
    }

    /// Complete the scan phase, reporting usable and skipped file counts
    pub fn finish_scan(&self, entries: usize, skipped: usize) {
        if skipped > 0 {
            self.scan_bar.finish_with_message(format!(
                "Indexed {entries} images ({skipped} skipped)"
            ));
        } else {
            self.scan_bar
                .finish_with_message(format!("Indexed {entries} images"));
        }
    }

    /// Begin the assembly phase over `total_cells` grid cells
    pub fn start_assembly(&self, total_cells: u64) {
        self.assembly_bar.reset();
        self.assembly_bar.set_length(total_cells);
        self.assembly_bar.set_message("Assembling mosaic");
    }

    /// Record one assembled cell
    pub fn assembly_tick(&self) {
        self.assembly_bar.inc(1);
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.assembly_bar.finish_with_message("Mosaic complete");
        let _ = self.multi_progress.clear();
    }
}
