//! Distance metrics between colors

use image::Rgb;

/// Squared Euclidean distance between two colors in RGB space
///
/// The square root is omitted: matching only compares distances, and
/// squaring preserves their ordering. Arithmetic stays in integers,
/// with a maximum possible value of `3 * 255^2`.
#[must_use]
pub const fn distance_squared(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    let [r1, g1, b1] = a.0;
    let [r2, g2, b2] = b.0;
    let dr = r1.abs_diff(r2) as u32;
    let dg = g1.abs_diff(g2) as u32;
    let db = b1.abs_diff(b2) as u32;
    dr * dr + dg * dg + db * db
}
