//! Image library indexing and color matching
//!
//! This module covers everything that happens to the tile library:
//! - Directory scanning and color indexing
//! - Nearest-color entry matching
//! - Tile production for matched entries

/// Library scanning and the color index
pub mod index;
/// Nearest-color matching against indexed entries
pub mod matcher;

pub use index::{LibraryEntry, LibraryIndex, TileStrategy};
pub use matcher::find_best_match;
