//! End-to-end pipeline orchestration from disk inputs to finished canvas

use crate::io::configuration::{
    DEFAULT_MOSAIC_PIXELS, DEFAULT_SOURCE_PIXELS, MIN_MOSAIC_PIXELS, MIN_SOURCE_PIXELS,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::load_rgb_image;
use crate::io::progress::ProgressManager;
use crate::library::index::{LibraryIndex, TileStrategy};
use crate::mosaic::assembler::assemble;
use image::RgbImage;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Grid geometry parameters for a mosaic run
#[derive(Clone, Copy, Debug)]
pub struct MosaicParameters {
    /// Edge length of a source grid cell in pixels
    pub source_pixels: u32,
    /// Edge length of a rendered tile in pixels
    pub mosaic_pixels: u32,
}

impl Default for MosaicParameters {
    fn default() -> Self {
        Self {
            source_pixels: DEFAULT_SOURCE_PIXELS,
            mosaic_pixels: DEFAULT_MOSAIC_PIXELS,
        }
    }
}

impl MosaicParameters {
    /// Validate both edge lengths against their lower bounds
    ///
    /// # Errors
    ///
    /// Returns an error if either edge length is below its minimum
    pub fn validate(&self) -> Result<()> {
        if self.source_pixels < MIN_SOURCE_PIXELS {
            return Err(invalid_parameter(
                "source_pixels",
                &self.source_pixels,
                &format!("must be at least {MIN_SOURCE_PIXELS}"),
            ));
        }

        if self.mosaic_pixels < MIN_MOSAIC_PIXELS {
            return Err(invalid_parameter(
                "mosaic_pixels",
                &self.mosaic_pixels,
                &format!("must be at least {MIN_MOSAIC_PIXELS}"),
            ));
        }

        Ok(())
    }
}

/// A finished mosaic together with the source it was built from
#[derive(Debug)]
pub struct MosaicOutput {
    /// The assembled canvas
    pub canvas: RgbImage,
    /// Path of the source image, which matters when it was drawn at
    /// random from the library
    pub source_path: PathBuf,
}

/// Drives a complete mosaic run
///
/// Owns the run configuration and sequences the pipeline: resolve the
/// source image, index the library, assemble the canvas.
pub struct MosaicOrchestrator {
    library_root: PathBuf,
    parameters: MosaicParameters,
    strategy: TileStrategy,
    source: Option<PathBuf>,
    seed: Option<u64>,
}

impl MosaicOrchestrator {
    /// Create an orchestrator over the library at `library_root`
    ///
    /// Parameters are validated immediately, before any filesystem
    /// access happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation
    pub fn new(library_root: &Path, parameters: MosaicParameters) -> Result<Self> {
        parameters.validate()?;

        Ok(Self {
            library_root: library_root.to_path_buf(),
            parameters,
            strategy: TileStrategy::default(),
            source: None,
            seed: None,
        })
    }

    /// Use a specific source image instead of a random library pick
    pub fn set_source(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
    }

    /// Cache scaled tiles in memory instead of re-reading them per cell
    pub const fn enable_tile_cache(&mut self) {
        self.strategy = TileStrategy::CacheThumbnails;
    }

    /// Fix the seed used for random source selection
    pub const fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Run the full pipeline and return the finished mosaic
    ///
    /// An explicit source is checked and loaded before the library
    /// scan starts, so a bad source path fails fast. Without an
    /// explicit source, one library image is drawn at random after
    /// the scan and used as the source.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The explicit source is missing or fails to decode
    /// - The library scan finds no usable images
    /// - Assembly of any cell fails
    pub fn create_mosaic(&self, progress: Option<&ProgressManager>) -> Result<MosaicOutput> {
        let explicit = match &self.source {
            Some(path) => {
                if !path.is_file() {
                    return Err(MosaicError::SourceNotFound { path: path.clone() });
                }
                Some((path.clone(), load_rgb_image(path)?))
            }
            None => None,
        };

        let library = LibraryIndex::build(
            &self.library_root,
            self.strategy,
            self.parameters.mosaic_pixels,
            progress,
        )?;

        let (source_path, source) = match explicit {
            Some(resolved) => resolved,
            None => {
                let path = self.pick_random_source(&library)?;
                let image = load_rgb_image(&path)?;
                (path, image)
            }
        };

        let canvas = assemble(&source, &library, self.parameters.source_pixels, progress)?;

        Ok(MosaicOutput {
            canvas,
            source_path,
        })
    }

    // Draw one indexed entry to serve as the source image
    fn pick_random_source(&self, library: &LibraryIndex) -> Result<PathBuf> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        library
            .entries()
            .choose(&mut rng)
            .map(|entry| entry.path.clone())
            .ok_or_else(|| MosaicError::EmptyLibrary {
                path: self.library_root.clone(),
            })
    }
}
