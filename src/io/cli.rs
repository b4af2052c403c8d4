//! Command-line interface for building photo mosaics

use crate::io::configuration::{DEFAULT_MOSAIC_PIXELS, DEFAULT_SOURCE_PIXELS, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::export_image;
use crate::io::progress::ProgressManager;
use crate::mosaic::orchestrator::{MosaicOrchestrator, MosaicParameters};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Build a photo mosaic from a library of images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Directory of candidate library images
    #[arg(short, long, value_name = "DIR")]
    pub library: PathBuf,

    /// Source photo to rebuild; a random library image when omitted
    #[arg(short, long, alias = "source-filename", value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Edge length of a source sampling cell in pixels
    #[arg(long, alias = "spx", default_value_t = DEFAULT_SOURCE_PIXELS, value_name = "N")]
    pub source_pixels: u32,

    /// Edge length of a rendered tile in pixels
    #[arg(long, alias = "mpx", default_value_t = DEFAULT_MOSAIC_PIXELS, value_name = "N")]
    pub mosaic_pixels: u32,

    /// Output file; defaults to mosaic_<source name> next to the source
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible source selection
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Scale library tiles once up front and keep them in memory
    #[arg(long)]
    pub cache_tiles: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives a complete mosaic run from parsed CLI arguments
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the mosaic and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, source resolution,
    /// the library scan, assembly, or the final save fails
    pub fn process(&self) -> Result<()> {
        let parameters = MosaicParameters {
            source_pixels: self.cli.source_pixels,
            mosaic_pixels: self.cli.mosaic_pixels,
        };

        let mut orchestrator = MosaicOrchestrator::new(&self.cli.library, parameters)?;

        if let Some(source) = &self.cli.source {
            orchestrator.set_source(source);
        }

        if let Some(seed) = self.cli.seed {
            orchestrator.set_seed(seed);
        }

        if self.cli.cache_tiles {
            orchestrator.enable_tile_cache();
        }

        let output = orchestrator.create_mosaic(self.progress_manager.as_ref())?;

        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&output.source_path));

        export_image(&output.canvas, &output_path)?;

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        // Allow print for user feedback about where the output landed
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Saved mosaic to: {}", output_path.display());
        }

        Ok(())
    }

    // mosaic_<source name>, placed beside the source image
    fn default_output_path(source_path: &Path) -> PathBuf {
        let file_name = source_path.file_name().unwrap_or_default();
        let output_name = format!("{OUTPUT_PREFIX}{}", file_name.to_string_lossy());

        if let Some(parent) = source_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
