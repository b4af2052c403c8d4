//! Mosaic construction from grid partition to finished canvas
//!
//! This module contains the construction pipeline:
//! - Grid partitioning of the source image
//! - Parallel cell-to-tile assembly
//! - Run orchestration over sources and libraries on disk

/// Parallel mosaic assembly
pub mod assembler;
/// Grid partitioning of a source image
pub mod grid;
/// End-to-end pipeline orchestration
pub mod orchestrator;

pub use assembler::assemble;
pub use grid::{Cell, CellGrid};
pub use orchestrator::{MosaicOrchestrator, MosaicOutput, MosaicParameters};
