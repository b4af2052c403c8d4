//! Photo mosaic generation from a library of images
//!
//! The pipeline partitions a source photograph into a grid of cells, matches
//! each cell's average color against an indexed image library, and rebuilds
//! the photograph as a composite of scaled library tiles.

#![forbid(unsafe_code)]

/// Color measurement and comparison in RGB space
pub mod color;
/// Input/output operations, progress display, and error handling
pub mod io;
/// Image library indexing and nearest-color matching
pub mod library;
/// Mosaic construction from grid partition to finished canvas
pub mod mosaic;

pub use io::error::{MosaicError, Result};
