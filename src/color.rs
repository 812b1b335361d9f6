//! 8-bit RGB color helpers.
//!
//! Pixels are opaque `image::Rgb<u8>` triples; averaging is the only color
//! arithmetic in the pipeline and is shared by shading and antialiasing.

use image::Rgb;

/// Background color for rays that miss the sphere (opaque white).
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Average a non-empty slice of colors channel by channel.
///
/// Channels are summed into a `u32` and divided by the count, so the result
/// truncates toward zero: black and white average to 127, not 128.
pub fn average_color(colors: &[Rgb<u8>]) -> Rgb<u8> {
    let mut sums = [0u32; 3];
    for color in colors {
        for (sum, channel) in sums.iter_mut().zip(color.0) {
            *sum += u32::from(channel);
        }
    }
    let count = colors.len() as u32;
    Rgb(sums.map(|sum| (sum / count) as u8))
}
