//! Pinhole camera for primary ray generation.
//!
//! The camera sits at the world origin looking down -Z. The image plane is
//! placed at `z = -width / (2 * tan(fov / 2))` so one pixel spans one world
//! unit. Rays are generated column by column: `x` is the outer loop and `y`
//! the inner loop, so ray `x * height + y` belongs to pixel `(x, y)`.

use lumen_math::Vec3;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Create a camera with the given field of view and resolution.
    pub fn new(fov_degrees: f32, width: u32, height: u32) -> Self {
        Self {
            fov_degrees,
            width,
            height,
        }
    }

    /// Total number of pixels (and rays).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Distance from the pinhole to the image plane.
    pub fn image_plane_distance(&self) -> f32 {
        let half_fov = self.fov_degrees.to_radians() / 2.0;
        self.width as f32 / (2.0 * half_fov.tan())
    }

    /// Index of the ray for pixel `(x, y)`.
    #[inline]
    pub fn ray_index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Pixel `(x, y)` for a ray index.
    #[inline]
    pub fn pixel_for_index(&self, index: usize) -> (u32, u32) {
        let height = self.height as usize;
        ((index / height) as u32, (index % height) as u32)
    }

    /// Generate one unit direction per pixel, column-major.
    pub fn generate_rays(&self) -> Vec<Vec3> {
        let z = self.image_plane_distance();
        let base = Vec3::new(
            -(self.width as f32) / 2.0 + 0.5,
            -(self.height as f32) / 2.0 + 0.5,
            -z,
        );

        let mut rays = Vec::with_capacity(self.pixel_count());
        for i in 0..self.width {
            for j in 0..self.height {
                let direction = base + Vec3::new(i as f32, j as f32, 0.0);
                rays.push(direction.normalize_or_zero());
            }
        }

        rays
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(55.0, 512, 512)
    }
}

/// Generate primary ray directions for a field of view and resolution.
pub fn generate_rays(fov_degrees: f32, width: u32, height: u32) -> Vec<Vec3> {
    Camera::new(fov_degrees, width, height).generate_rays()
}
