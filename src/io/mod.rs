//! Input/output operations for the mosaic pipeline
//!
//! This module contains everything that touches the outside world:
//! - Command-line parsing and run driving
//! - Image loading and export
//! - Progress display
//! - Error types and runtime configuration

/// Command-line interface and run driver
pub mod cli;
/// Mosaic constants and runtime configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Image loading and export with format detection
pub mod image;
/// Progress tracking for the scan and assembly phases
pub mod progress;

pub use error::{MosaicError, Result};
pub use progress::ProgressManager;
