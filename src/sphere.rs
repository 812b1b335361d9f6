//! Sphere primitive and ray intersection.
//!
//! Rays are cast from the world origin, so a direction alone identifies a
//! ray and the intersection test reduces to projecting the sphere center
//! onto that direction.

use glam::Vec3A;
use image::Rgb;

/// Sphere with a flat color, placed in front of the camera.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Flat surface color mixed into every lit pixel.
    pub albedo: Rgb<u8>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, albedo: Rgb<u8>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            albedo,
        }
    }

    /// Entry point of a ray cast from the world origin, if any.
    ///
    /// `ray_direction` must be a unit vector. The center is projected onto
    /// the ray; a center behind the origin or a perpendicular distance
    /// greater than the radius is a miss. A distance exactly equal to the
    /// radius (tangent ray) still counts as a hit, which fixes the visible
    /// silhouette edge. The near intersection is always returned, never the
    /// exit point.
    pub fn hit_point(&self, ray_direction: Vec3A) -> Option<Vec3A> {
        // sphere center projection on the ray
        let p = ray_direction.dot(self.center);
        if p < 0.0 {
            return None;
        }

        // distance between sphere center and ray
        let d = (self.center.length_squared() - p * p).sqrt();
        if d > self.radius {
            return None;
        }

        let delta = (self.radius * self.radius - d * d).sqrt();
        Some(ray_direction * (p - delta))
    }
}
