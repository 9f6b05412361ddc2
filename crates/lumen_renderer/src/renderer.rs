//! Frame driver: shades one primary ray per pixel into a pixel buffer.
//!
//! Pixels are independent and the scene is read-only, so rays are shaded in
//! parallel with rayon when `RenderConfig::parallel` is set. Each result is
//! written to its own slot, so parallel and sequential renders are identical.

use std::time::Instant;

use crate::shading::ray_color;
use crate::Camera;
use lumen_core::{Color, Scene};
use lumen_math::{Ray, Vec3};
use rayon::prelude::*;
use thiserror::Error;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of surface hits per primary ray (reflection budget)
    pub max_depth: u32,
    /// Offset along the normal for shadow and reflection rays
    pub shadow_epsilon: f32,
    /// Color returned when a ray hits nothing
    pub background: Color,
    /// Shade pixels on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            shadow_epsilon: 1e-4,
            background: Color::ZERO,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Set the reflection budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable parallel shading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Errors reported by the frame driver.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Expected {expected} rays for the image, got {found}")]
    RayCountMismatch { expected: usize, found: usize },
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB. Values outside [0, 1] are clamped.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        (255.0 * clamp_01(color.x)) as u8,
        (255.0 * clamp_01(color.y)) as u8,
        (255.0 * clamp_01(color.z)) as u8,
    ]
}

/// A width x height grid of linear RGB colors.
///
/// `(x, y)` with `y = 0` is the bottom row of the displayed image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new pixel buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Convert to an image with the usual top-left origin.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, self.height - 1 - y)))
        })
    }
}

/// Shade a single primary ray from the camera origin.
pub fn render_pixel(scene: &Scene, direction: Vec3, config: &RenderConfig) -> Color {
    let ray = Ray::new(Vec3::ZERO, direction);
    ray_color(&ray, scene, config.max_depth, config)
}

/// Render precomputed ray directions into a pixel buffer.
///
/// `rays` must hold `width * height` directions in camera order (see
/// [`Camera::ray_index`]).
pub fn render(
    scene: &Scene,
    rays: &[Vec3],
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<PixelBuffer, RenderError> {
    let expected = width as usize * height as usize;
    if rays.len() != expected {
        return Err(RenderError::RayCountMismatch {
            expected,
            found: rays.len(),
        });
    }

    // Placement only depends on the resolution
    let camera = Camera {
        width,
        height,
        ..Camera::default()
    };
    Ok(render_rays(scene, rays, &camera, config))
}

/// Render a scene with a pinhole camera at the origin.
///
/// This is the single entry point a display shell needs.
pub fn render_scene(scene: &Scene, fov_degrees: f32, width: u32, height: u32) -> PixelBuffer {
    render_scene_with(
        scene,
        &Camera::new(fov_degrees, width, height),
        &RenderConfig::default(),
    )
}

/// Render a scene with an explicit camera and configuration.
pub fn render_scene_with(scene: &Scene, camera: &Camera, config: &RenderConfig) -> PixelBuffer {
    let rays = camera.generate_rays();
    render_rays(scene, &rays, camera, config)
}

/// Shade `rays` and store each color at the pixel `camera` assigns it.
fn render_rays(
    scene: &Scene,
    rays: &[Vec3],
    camera: &Camera,
    config: &RenderConfig,
) -> PixelBuffer {
    if !scene.is_empty() && scene.active_light().is_none() {
        log::warn!("Scene '{}' has no light source; all surfaces render black", scene.name);
    }

    log::info!(
        "Rendering {}x{} ({} shapes, max depth {}, {})",
        camera.width,
        camera.height,
        scene.shape_count(),
        config.max_depth,
        if config.parallel { "parallel" } else { "single thread" }
    );
    let start = Instant::now();

    let colors: Vec<Color> = if config.parallel {
        rays.par_iter()
            .map(|direction| render_pixel(scene, *direction, config))
            .collect()
    } else {
        rays.iter()
            .map(|direction| render_pixel(scene, *direction, config))
            .collect()
    };

    let mut buffer = PixelBuffer::new(camera.width, camera.height);
    for (index, color) in colors.into_iter().enumerate() {
        let (x, y) = camera.pixel_for_index(index);
        buffer.set(x, y, color);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    buffer
}
