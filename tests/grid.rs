//! Validates grid partitioning geometry and iteration order

use photomosaic::mosaic::grid::CellGrid;

// Tests dimensions when the image divides evenly
#[test]
fn test_exact_division_grid() {
    let grid = CellGrid::new(40, 40, 20);

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.cell_count(), 4);

    for cell in grid.cells() {
        assert_eq!(cell.width, 20);
        assert_eq!(cell.height, 20);
    }
}

// Tests clamping of the final row and column
// Verified by removing the boundary clamp
#[test]
fn test_partial_edge_cells_clamp_to_image() {
    let grid = CellGrid::new(50, 45, 20);

    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 3);

    let last = grid.cell(2, 2).unwrap();
    assert_eq!(last.x, 40);
    assert_eq!(last.y, 40);
    assert_eq!(last.width, 10);
    assert_eq!(last.height, 5);

    let interior = grid.cell(0, 0).unwrap();
    assert_eq!(interior.width, 20);
    assert_eq!(interior.height, 20);
}

// Tests that cells cover every pixel exactly once
// Verified by shrinking the grid by one cell
#[test]
fn test_cells_partition_the_image() {
    let (width, height, cell_size) = (37, 23, 10);
    let grid = CellGrid::new(width, height, cell_size);

    let mut covered = vec![false; (width * height) as usize];
    for cell in grid.cells() {
        for y in cell.y..cell.y + cell.height {
            for x in cell.x..cell.x + cell.width {
                let index = (y * width + x) as usize;
                assert!(!covered[index], "Pixel ({x}, {y}) covered twice");
                covered[index] = true;
            }
        }
    }

    assert!(covered.iter().all(|&seen| seen), "Uncovered pixels remain");
}

// Tests row-major iteration order
// Verified by swapping the nesting of the iterator
#[test]
fn test_cells_iterate_row_major() {
    let grid = CellGrid::new(30, 20, 10);

    let positions: Vec<(u32, u32)> = grid.cells().map(|cell| (cell.row, cell.col)).collect();
    assert_eq!(
        positions,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_out_of_range_cell_is_none() {
    let grid = CellGrid::new(40, 40, 20);

    assert!(grid.cell(2, 0).is_none());
    assert!(grid.cell(0, 2).is_none());
    assert!(grid.cell(1, 1).is_some());
}

// Tests the degenerate zero-size image
#[test]
fn test_zero_size_image_yields_empty_grid() {
    let grid = CellGrid::new(0, 0, 10);

    assert_eq!(grid.cell_count(), 0);
    assert_eq!(grid.cells().count(), 0);
}

// Tests a cell size larger than the image
#[test]
fn test_oversized_cell_covers_whole_image() {
    let grid = CellGrid::new(15, 12, 100);

    assert_eq!(grid.cell_count(), 1);
    let only = grid.cell(0, 0).unwrap();
    assert_eq!(only.width, 15);
    assert_eq!(only.height, 12);
}
