//! Camera projection, per-pixel shading and the rasterizer.

use glam::Vec3A;
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::color::{self, BACKGROUND};
use crate::sphere::Sphere;

/// Pinhole camera fixed at the world origin, looking down -Z.
///
/// Only the image dimensions and the field of view are configurable; there
/// is deliberately no look-at or positioning support.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Field of view in degrees
    pub fov: f32,
}

impl Camera {
    /// Create a camera for the given resolution and field of view.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
        }
    }

    /// Render the scene into an 8-bit RGB buffer.
    ///
    /// Maps every pixel to a camera ray and shades it. Every pixel is a pure
    /// function of its coordinates, so the loop is parallelized with rayon
    /// and the output is deterministic regardless of scheduling.
    pub fn render(&self, sphere: &Sphere, light: Vec3A) -> RgbImage {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let tan_half_fov = (self.fov.to_radians() / 2.0).tan();

        let mut image = RgbImage::new(self.image_width, self.image_height);

        info!("Shading {}x{} pixels using {} CPU cores...", self.image_width, self.image_height, rayon::current_num_threads());
        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            // x is normalized by the height on both axes; kept as-is because
            // it changes the silhouette whenever width != height.
            let xx = (2.0 * (x as f32 + 0.5) - width) * tan_half_fov / height;
            let yy = (1.0 - 2.0 * (y as f32 + 0.5) / height) * tan_half_fov;
            *pixel = shade(xx, yy, sphere, light);
            pb.inc(1);
        });

        pb.finish();
        image
    }
}

/// Shade the camera ray through screen coordinates (x, y).
///
/// A miss returns the white background. A hit mixes an exponentially
/// brightened white with the sphere's flat color. `cos_a` is not a true
/// cosine: the light vector in the numerator is left unnormalized while the
/// denominator divides by its length only once, so values above 1.0 occur
/// when the hit point is close to the light; the cast to `u8` saturates.
pub fn shade(x: f32, y: f32, sphere: &Sphere, light: Vec3A) -> Rgb<u8> {
    let direction = Vec3A::new(x, y, -1.0).normalize_or_zero();
    let Some(point) = sphere.hit_point(direction) else {
        return BACKGROUND;
    };

    let normal = (point - sphere.center).normalize_or_zero();
    let to_light = light - point;
    let cos_a = normal.dot(to_light) / to_light.length();

    // Exponential brightening curve, maps [0, 1] roughly onto [1/1024, 1].
    let factor = (1.0 + cos_a) / 2.0;
    let factor = (10.0 * factor).exp2() / 1024.0;

    let lit = Rgb([(factor * 255.0) as u8; 3]);
    color::average_color(&[lit, sphere.albedo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const LIGHT: Vec3A = Vec3A::new(-15.0, 15.0, 20.0);

    fn test_sphere() -> Sphere {
        Sphere::new(Vec3A::new(0.0, 0.0, -9.0), 4.0, Rgb([240, 0, 0]))
    }

    #[test]
    fn camera_ray_directions_are_unit_length() {
        let direction = Vec3A::new(0.3, -0.7, -1.0).normalize_or_zero();
        assert_abs_diff_eq!(direction.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec3A::ZERO.normalize_or_zero(), Vec3A::ZERO);
    }

    #[test]
    fn dot_is_symmetric_and_bilinear() {
        let a = Vec3A::new(1.0, 2.0, 3.0);
        let b = Vec3A::new(-4.0, 0.5, 9.0);
        let c = Vec3A::new(0.25, -1.5, 2.0);
        assert_abs_diff_eq!(a.dot(b), b.dot(a));
        assert_abs_diff_eq!((2.0 * a + b).dot(c), 2.0 * a.dot(c) + b.dot(c), epsilon = 1e-4);
    }

    #[test]
    fn length_is_positive_unless_zero() {
        assert!(Vec3A::new(0.0, -2.0, 1.0).length() > 0.0);
        assert_eq!(Vec3A::ZERO.length(), 0.0);
    }

    #[test]
    fn shade_outside_silhouette_is_background() {
        assert_eq!(shade(10.0, 10.0, &test_sphere(), LIGHT), BACKGROUND);
        assert_eq!(shade(-10.0, 0.0, &test_sphere(), LIGHT), BACKGROUND);
    }

    #[test]
    fn shade_at_silhouette_center_mixes_lit_white_and_albedo() {
        let Rgb([r, g, b]) = shade(0.0, 0.0, &test_sphere(), LIGHT);
        // Average of a gray lit tone (l, l, l) and (240, 0, 0): the green
        // and blue channels stay equal and red exceeds them by 240/2.
        assert_eq!(g, b);
        assert_eq!(u32::from(r) - u32::from(g), 120);
        assert!(g > 0, "center of the sphere must not be black");
    }

    #[test]
    fn render_colors_center_and_leaves_corners_white() {
        let camera = Camera::new(64, 48, 60.0);
        let image = camera.render(&test_sphere(), LIGHT);
        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(63, 47), BACKGROUND);
        assert_ne!(*image.get_pixel(32, 24), BACKGROUND);
    }
}
