//! Error types and context management for mosaic operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Requested source image is missing or not a regular file
    SourceNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Library directory yielded no decodable images
    ///
    /// Occurs when the directory is empty, contains only non-image
    /// files, or every image in it fails to decode.
    EmptyLibrary {
        /// Path to the library directory
        path: PathBuf,
    },

    /// Mosaic parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Matched entry index exceeds the library entry list
    InvalidEntryIndex {
        /// The invalid entry index
        index: usize,
        /// Number of entries in the library
        entry_count: usize,
    },

    /// Failed to produce the replacement tile for a grid cell
    ///
    /// Fatal to the whole run: a skipped cell would leave a hole in
    /// the output canvas.
    CellProcessing {
        /// Grid row of the failing cell
        row: u32,
        /// Grid column of the failing cell
        col: u32,
        /// Underlying failure
        source: Box<MosaicError>,
    },

    /// Failed to save the assembled mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::SourceNotFound { path } => {
                write!(f, "Source image '{}' not found", path.display())
            }
            Self::EmptyLibrary { path } => {
                write!(f, "No usable images found in library '{}'", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidEntryIndex { index, entry_count } => {
                write!(
                    f,
                    "Library entry index {index} is out of bounds (entries: {entry_count})"
                )
            }
            Self::CellProcessing { row, col, source } => {
                write!(f, "Failed to build tile for cell ({row}, {col}): {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::CellProcessing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Enriches errors with the grid cell being processed when they occurred
pub trait WithCell<T> {
    /// Wrap any error from this Result in a `CellProcessing` error
    ///
    /// # Errors
    ///
    /// Propagates the original error, annotated with the failing cell
    fn with_cell(self, row: u32, col: u32) -> Result<T>;
}

impl<T, E> WithCell<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_cell(self, row: u32, col: u32) -> Result<T> {
        self.map_err(|e| MosaicError::CellProcessing {
            row,
            col,
            source: Box::new(e.into()),
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_cell_wraps_error() {
        let result: std::result::Result<(), MosaicError> = Err(MosaicError::InvalidEntryIndex {
            index: 7,
            entry_count: 3,
        });

        let err = result.with_cell(4, 9).unwrap_err();
        match err {
            MosaicError::CellProcessing { row, col, source } => {
                assert_eq!(row, 4);
                assert_eq!(col, 9);
                assert!(matches!(
                    *source,
                    MosaicError::InvalidEntryIndex { index: 7, .. }
                ));
            }
            _ => unreachable!("Expected CellProcessing error type"),
        }
    }
}
