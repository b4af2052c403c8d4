//! Mean color computation over pixel regions

use image::{Rgb, RgbImage};

/// Compute the mean RGB color of every pixel in `region`
///
/// Channel sums accumulate in `u64`, so overflow is impossible for any
/// image the `image` crate can represent. An empty region averages to
/// black.
#[must_use]
pub fn average_color(region: &RgbImage) -> Rgb<u8> {
    let pixel_count = u64::from(region.width()) * u64::from(region.height());
    if pixel_count == 0 {
        return Rgb([0, 0, 0]);
    }

    let mut sum_r = 0_u64;
    let mut sum_g = 0_u64;
    let mut sum_b = 0_u64;
    for pixel in region.pixels() {
        let [r, g, b] = pixel.0;
        sum_r += u64::from(r);
        sum_g += u64::from(g);
        sum_b += u64::from(b);
    }

    // Integer division truncates toward zero, matching the u8 channel depth
    Rgb([
        (sum_r / pixel_count) as u8,
        (sum_g / pixel_count) as u8,
        (sum_b / pixel_count) as u8,
    ])
}
