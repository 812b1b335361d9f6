//! Supersampling resolve via repeated 2x2 box filtering.

use image::RgbImage;
use log::debug;

use crate::color::average_color;

/// Halve the buffer dimensions `levels` times with a 2x2 box filter.
///
/// Each output pixel is the truncating average of the four source pixels in
/// its 2x2 block. Every level requires even dimensions; rendering at
/// `base * 2^levels` guarantees this all the way down.
///
/// # Panics
///
/// Panics if the buffer width or height is odd at any level.
pub fn downsample(mut image: RgbImage, levels: u32) -> RgbImage {
    for level in 0..levels {
        let (width, height) = image.dimensions();
        assert!(
            width % 2 == 0 && height % 2 == 0,
            "cannot halve a {}x{} buffer at antialias level {}",
            width,
            height,
            level
        );
        debug!("antialias level {}: {}x{} -> {}x{}", level, width, height, width / 2, height / 2);

        image = RgbImage::from_fn(width / 2, height / 2, |x, y| {
            average_color(&[
                *image.get_pixel(2 * x, 2 * y),
                *image.get_pixel(2 * x + 1, 2 * y),
                *image.get_pixel(2 * x, 2 * y + 1),
                *image.get_pixel(2 * x + 1, 2 * y + 1),
            ])
        });
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn quadrants_collapse_to_their_own_color() {
        let colors = [
            Rgb([255, 0, 0]),
            Rgb([0, 255, 0]),
            Rgb([0, 0, 255]),
            Rgb([40, 80, 120]),
        ];
        let image = RgbImage::from_fn(4, 4, |x, y| {
            let quadrant = (y / 2) * 2 + x / 2;
            colors[quadrant as usize]
        });

        let half = downsample(image, 1);
        assert_eq!(half.dimensions(), (2, 2));
        for (x, y, pixel) in half.enumerate_pixels() {
            assert_eq!(*pixel, colors[(y * 2 + x) as usize]);
        }
    }

    #[test]
    fn distinct_block_averages_with_truncation() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([0, 10, 255]));
        image.put_pixel(1, 0, Rgb([255, 20, 0]));
        image.put_pixel(0, 1, Rgb([0, 30, 0]));
        image.put_pixel(1, 1, Rgb([255, 41, 0]));

        let half = downsample(image, 1);
        assert_eq!(half.dimensions(), (1, 1));
        // (0+255+0+255)/4 = 127, (10+20+30+41)/4 = 25, (255+0+0+0)/4 = 63
        assert_eq!(*half.get_pixel(0, 0), Rgb([127, 25, 63]));
    }

    #[test]
    fn uniform_buffer_is_unchanged_by_any_depth() {
        let color = Rgb([175, 55, 55]);
        let image = RgbImage::from_pixel(8, 4, color);

        let resolved = downsample(image, 2);
        assert_eq!(resolved.dimensions(), (2, 1));
        for pixel in resolved.pixels() {
            assert_eq!(*pixel, color);
        }
    }

    #[test]
    fn zero_levels_is_a_no_op() {
        let image = RgbImage::from_pixel(3, 5, Rgb([1, 2, 3]));
        let same = downsample(image, 0);
        assert_eq!(same.dimensions(), (3, 5));
    }

    #[test]
    #[should_panic(expected = "cannot halve")]
    fn odd_dimensions_are_rejected() {
        let image = RgbImage::new(3, 2);
        let _ = downsample(image, 1);
    }
}
