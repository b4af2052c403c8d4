//! Image loading and export with content-based format detection

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB
///
/// The format is detected from the file contents rather than the file
/// extension, so misnamed images still load. Any alpha channel is
/// dropped by the RGB conversion.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The contents are not a decodable image
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "open image",
            source: e,
        })?
        .decode()
        .map(DynamicImage::into_rgb8)
        .map_err(|e| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save an assembled canvas to `output_path`
///
/// The encoder is chosen from the path's extension. Missing parent
/// directories are created first.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_image(image: &RgbImage, output_path: &Path) -> Result<()> {
    // A bare filename has an empty parent
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
