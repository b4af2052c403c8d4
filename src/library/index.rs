//! Library directory scanning and color indexing

use crate::color::average_color;
use crate::io::configuration::TILE_FILTER;
use crate::io::error::{MosaicError, Result};
use crate::io::image::load_rgb_image;
use crate::io::progress::ProgressManager;
use image::{Rgb, RgbImage, imageops};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Tile sourcing strategy used during assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStrategy {
    /// Re-read and resize each matched image when a cell needs it
    ///
    /// Memory use stays independent of library size, at the cost of
    /// repeated decodes for entries that win many cells.
    #[default]
    LoadOnDemand,

    /// Resize every library image once during the scan and keep the
    /// thumbnails in memory
    CacheThumbnails,
}

/// A single indexed library image
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    /// Path the image was loaded from
    pub path: PathBuf,
    /// Mean color of the full image
    pub color: Rgb<u8>,
    /// Pre-scaled tile, present under `TileStrategy::CacheThumbnails`
    pub thumbnail: Option<RgbImage>,
}

/// Color index over a directory of library images
///
/// Entries are ordered by path, so repeated runs over the same
/// directory produce identical indices regardless of filesystem
/// iteration order.
#[derive(Debug, Clone)]
pub struct LibraryIndex {
    root: PathBuf,
    entries: Vec<LibraryEntry>,
    tile_size: u32,
    skipped: usize,
}

impl LibraryIndex {
    /// Scan `root` and index every decodable image in it
    ///
    /// Every regular file is a candidate; decodability is decided by
    /// attempting to load it, so image files with misleading or missing
    /// extensions still index. Files that fail to open or decode are
    /// skipped and counted rather than failing the scan. Decoding runs
    /// across all CPU cores.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root` cannot be read as a directory
    /// - No file in `root` decodes as an image
    pub fn build(
        root: &Path,
        strategy: TileStrategy,
        tile_size: u32,
        progress: Option<&ProgressManager>,
    ) -> Result<Self> {
        let files = collect_candidate_files(root)?;

        if let Some(pm) = progress {
            pm.start_scan(files.len() as u64);
        }

        let entries: Vec<LibraryEntry> = files
            .par_iter()
            .filter_map(|path| {
                let entry = index_file(path, strategy, tile_size);
                if let Some(pm) = progress {
                    pm.scan_tick();
                }
                entry
            })
            .collect();

        let skipped = files.len() - entries.len();

        if let Some(pm) = progress {
            pm.finish_scan(entries.len(), skipped);
        }

        if entries.is_empty() {
            return Err(MosaicError::EmptyLibrary {
                path: root.to_path_buf(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            entries,
            tile_size,
            skipped,
        })
    }

    /// Get the directory this index was built from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the indexed entries in path order
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Get the number of indexed images
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of files skipped during the scan
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Get the edge length tiles are produced at
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Produce the square tile image for entry `index`
    ///
    /// Under `CacheThumbnails` this clones the pre-scaled thumbnail.
    /// Otherwise the entry's file is re-read and resized, which can
    /// fail if the file changed since the scan.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index` is outside the entry list
    /// - An on-demand load cannot open or decode the entry's file
    pub fn tile(&self, index: usize) -> Result<RgbImage> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| MosaicError::InvalidEntryIndex {
                index,
                entry_count: self.entries.len(),
            })?;

        if let Some(thumbnail) = &entry.thumbnail {
            return Ok(thumbnail.clone());
        }

        let image = load_rgb_image(&entry.path)?;
        Ok(imageops::resize(
            &image,
            self.tile_size,
            self.tile_size,
            TILE_FILTER,
        ))
    }
}

// Returns None when the file is unreadable or not a decodable image
fn index_file(path: &Path, strategy: TileStrategy, tile_size: u32) -> Option<LibraryEntry> {
    let image = load_rgb_image(path).ok()?;
    let color = average_color(&image);

    let thumbnail = match strategy {
        TileStrategy::LoadOnDemand => None,
        TileStrategy::CacheThumbnails => {
            Some(imageops::resize(&image, tile_size, tile_size, TILE_FILTER))
        }
    };

    Some(LibraryEntry {
        path: path.to_path_buf(),
        color,
        thumbnail,
    })
}

fn collect_candidate_files(root: &Path) -> Result<Vec<PathBuf>> {
    let dir = std::fs::read_dir(root).map_err(|e| MosaicError::FileSystem {
        path: root.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in dir {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: root.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
