//! Color measurement and comparison in RGB space

/// Mean color computation over pixel regions
pub mod average;
/// Distance metrics between colors
pub mod distance;

pub use average::average_color;
pub use distance::distance_squared;
