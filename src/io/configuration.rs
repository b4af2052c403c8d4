//! Mosaic constants and runtime configuration defaults

// Grid geometry defaults, in pixels per cell edge
/// Default edge length of a source grid cell
pub const DEFAULT_SOURCE_PIXELS: u32 = 20;
/// Default edge length of a rendered mosaic tile
pub const DEFAULT_MOSAIC_PIXELS: u32 = 85;

// Lower bounds enforced during parameter validation
/// Minimum edge length of a source grid cell
pub const MIN_SOURCE_PIXELS: u32 = 10;
/// Minimum edge length of a rendered mosaic tile
pub const MIN_MOSAIC_PIXELS: u32 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 100_000;

/// Resampling filter used when scaling library images to tile size
pub const TILE_FILTER: image::imageops::FilterType = image::imageops::FilterType::CatmullRom;

// Output settings
/// Prefix added to derived output filenames
pub const OUTPUT_PREFIX: &str = "mosaic_";
