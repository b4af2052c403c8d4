//! Nearest-color matching against the library index

use crate::color::distance_squared;
use crate::io::error::{MosaicError, Result};
use crate::library::index::{LibraryEntry, LibraryIndex};
use image::Rgb;

/// Find the entry whose mean color is nearest to `target`
///
/// Distance is squared Euclidean in RGB space. Ties resolve to the
/// entry earliest in the list, so a given library and target always
/// produce the same match. Returns `None` when `entries` is empty.
#[must_use]
pub fn find_best_match(target: Rgb<u8>, entries: &[LibraryEntry]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for (index, entry) in entries.iter().enumerate() {
        let distance = distance_squared(target, entry.color);
        match best {
            // Strict improvement only, so the first of equals wins
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

impl LibraryIndex {
    /// Find the index of the entry nearest to `target`
    ///
    /// # Errors
    ///
    /// Returns an error if the index holds no entries
    pub fn best_match(&self, target: Rgb<u8>) -> Result<usize> {
        find_best_match(target, self.entries()).ok_or_else(|| MosaicError::EmptyLibrary {
            path: self.root().to_path_buf(),
        })
    }
}
