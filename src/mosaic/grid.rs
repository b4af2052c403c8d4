//! Grid partitioning of a source image into square cells
//!
//! Provides the cell geometry the rest of the pipeline iterates over.
//! Every source pixel belongs to exactly one cell; cells in the last
//! row or column shrink to the image boundary instead of reading past
//! it.

/// A single rectangular region of the source grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Grid row of this cell
    pub row: u32,
    /// Grid column of this cell
    pub col: u32,
    /// Horizontal pixel offset of the cell's left edge
    pub x: u32,
    /// Vertical pixel offset of the cell's top edge
    pub y: u32,
    /// Cell width in pixels, clamped at the right image edge
    pub width: u32,
    /// Cell height in pixels, clamped at the bottom image edge
    pub height: u32,
}

/// Row-major partition of an image into square cells
///
/// Interior cells are `cell_size` pixels on each edge. The grid always
/// covers the whole image, so when the image dimensions are not exact
/// multiples of `cell_size` the final row and column hold partial cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    image_width: u32,
    image_height: u32,
    cell_size: u32,
    rows: u32,
    cols: u32,
}

impl CellGrid {
    /// Partition an `image_width` by `image_height` image into cells
    ///
    /// A zero-size image produces an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is zero
    #[must_use]
    pub const fn new(image_width: u32, image_height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell_size must be positive");

        Self {
            image_width,
            image_height,
            cell_size,
            rows: image_height.div_ceil(cell_size),
            cols: image_width.div_ceil(cell_size),
        }
    }

    /// Get the number of cell rows in the grid
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Get the number of cell columns in the grid
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Get the edge length of an interior cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Get the total number of cells in the grid
    pub const fn cell_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Get the geometry of the cell at `row`, `col`
    ///
    /// Returns `None` when the position lies outside the grid.
    pub const fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        // In-bounds positions imply x < image_width and y < image_height,
        // so the subtractions below cannot underflow
        let x = col * self.cell_size;
        let y = row * self.cell_size;

        Some(Cell {
            row,
            col,
            x,
            y,
            width: min_u32(self.cell_size, self.image_width - x),
            height: min_u32(self.cell_size, self.image_height - y),
        })
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let grid = *self;
        (0..grid.rows)
            .flat_map(move |row| (0..grid.cols).map(move |col| (row, col)))
            .filter_map(move |(row, col)| grid.cell(row, col))
    }
}

// Ord::min is not usable in const fn
const fn min_u32(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}
