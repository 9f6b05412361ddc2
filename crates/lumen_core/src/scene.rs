//! Scene model for Lumen.
//!
//! A scene is a flat collection of spheres, triangles, planes and point
//! lights, kept in the order they were declared. Scenes are built once by
//! the loader and are read-only afterwards, so a render can share one
//! `&Scene` across any number of threads.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values conventionally 0-1, never clamped here)
pub type Color = Vec3;

/// Phong reflectance parameters shared by every shape kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Diffuse color (`Cr` in scene files)
    pub diffuse: Color,

    /// Specular color (`Cp` in scene files)
    pub specular: Color,

    /// Phong exponent (highlight tightness, >= 0)
    pub phong: f32,
}

impl Surface {
    pub fn new(diffuse: Color, specular: Color, phong: f32) -> Self {
        Self {
            diffuse,
            specular,
            phong,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            diffuse: Color::new(0.5, 0.5, 0.5), // Grey default
            specular: Color::ZERO,
            phong: 1.0,
        }
    }
}

/// A sphere. Spheres are the only mirror-reflective shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

/// A single triangle with vertices `a`, `b`, `c`.
///
/// The geometric normal is `cross(b - a, c - a)`, so the winding order decides
/// which side is lit. It is never flipped toward the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub surface: Surface,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, surface: Surface) -> Self {
        Self { a, b, c, surface }
    }

    /// Unit face normal, or zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}

/// An infinite plane through `point` with normal `normal`.
///
/// The normal does not need to be unit length; it is normalized at use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
    pub surface: Surface,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3, surface: Surface) -> Self {
        Self {
            normal,
            point,
            surface,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,

    /// Light color (`Cl`), scales diffuse and specular terms
    pub color: Color,

    /// Ambient color (`Ca`), applied everywhere including shadows
    pub ambient: Color,
}

impl LightSource {
    pub fn new(position: Vec3, color: Color, ambient: Color) -> Self {
        Self {
            position,
            color,
            ambient,
        }
    }
}

/// The complete scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (usually the file stem)
    pub name: String,

    pub spheres: Vec<Sphere>,
    pub triangles: Vec<Triangle>,
    pub planes: Vec<Plane>,

    /// Lights in declaration order. Only the first one is used for shading.
    pub lights: Vec<LightSource>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn add_plane(&mut self, plane: Plane) {
        self.planes.push(plane);
    }

    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// The light used for shading.
    ///
    /// A scene may declare several lights, but only the first one declared
    /// ever contributes. Returns `None` when the scene has no lights.
    pub fn active_light(&self) -> Option<&LightSource> {
        self.lights.first()
    }

    /// Total number of shapes (spheres + triangles + planes).
    pub fn shape_count(&self) -> usize {
        self.spheres.len() + self.triangles.len() + self.planes.len()
    }

    /// True if the scene has no shapes. Lights alone do not count.
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }
}
