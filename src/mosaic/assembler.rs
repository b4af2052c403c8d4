//! Parallel mosaic assembly from a source image and library index
//!
//! Assembly runs in two phases. Cells are first mapped to tiles in
//! parallel: each worker crops its region of the source, averages it,
//! matches the average against the library, and produces the tile
//! image. The finished tiles are then pasted into the canvas
//! sequentially, so the output is identical regardless of worker
//! scheduling.

use crate::color::average_color;
use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, WithCell, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::library::index::LibraryIndex;
use crate::mosaic::grid::{Cell, CellGrid};
use image::{RgbImage, imageops};
use rayon::prelude::*;

/// Assemble a mosaic of `source` from the images indexed in `library`
///
/// The source is partitioned into `source_pixels`-sized cells and each
/// cell is replaced by the library tile whose mean color is nearest to
/// the cell's mean color. Tile edge length comes from the index. The
/// first failing cell aborts the whole assembly.
///
/// # Errors
///
/// Returns an error if:
/// - `source_pixels` is zero
/// - The output canvas would exceed the maximum supported dimension
/// - Any cell fails to produce its tile, typically because an
///   on-demand tile load failed
pub fn assemble(
    source: &RgbImage,
    library: &LibraryIndex,
    source_pixels: u32,
    progress: Option<&ProgressManager>,
) -> Result<RgbImage> {
    if source_pixels == 0 {
        return Err(invalid_parameter(
            "source_pixels",
            &source_pixels,
            &"cell size must be positive",
        ));
    }

    let grid = CellGrid::new(source.width(), source.height(), source_pixels);
    let tile_size = library.tile_size();
    let canvas_width = checked_canvas_extent(grid.cols(), tile_size)?;
    let canvas_height = checked_canvas_extent(grid.rows(), tile_size)?;

    if let Some(pm) = progress {
        pm.start_assembly(grid.cell_count());
    }

    let cells: Vec<Cell> = grid.cells().collect();
    let tiles: Vec<(Cell, RgbImage)> = cells
        .par_iter()
        .map(|cell| {
            let tile = build_cell_tile(source, library, cell).with_cell(cell.row, cell.col)?;
            if let Some(pm) = progress {
                pm.assembly_tick();
            }
            Ok((*cell, tile))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut canvas = RgbImage::new(canvas_width, canvas_height);
    for (cell, tile) in &tiles {
        imageops::replace(
            &mut canvas,
            tile,
            i64::from(cell.col) * i64::from(tile_size),
            i64::from(cell.row) * i64::from(tile_size),
        );
    }

    Ok(canvas)
}

// Crop, average, match, and produce the tile for one cell
fn build_cell_tile(source: &RgbImage, library: &LibraryIndex, cell: &Cell) -> Result<RgbImage> {
    let region = imageops::crop_imm(source, cell.x, cell.y, cell.width, cell.height).to_image();
    let color = average_color(&region);
    let entry_index = library.best_match(color)?;
    library.tile(entry_index)
}

fn checked_canvas_extent(cells: u32, tile_size: u32) -> Result<u32> {
    let extent = u64::from(cells) * u64::from(tile_size);
    if extent > u64::from(MAX_CANVAS_DIMENSION) {
        return Err(invalid_parameter(
            "mosaic_pixels",
            &extent,
            &format!(
                "{cells} cells of {tile_size} pixels exceed the \
                 {MAX_CANVAS_DIMENSION} pixel canvas limit"
            ),
        ));
    }
    Ok(extent as u32)
}
