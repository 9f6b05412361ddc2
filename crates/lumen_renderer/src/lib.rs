//! Lumen Renderer - Recursive Phong ray tracer.
//!
//! Casts one ray per pixel from a pinhole camera at the origin, finds the
//! nearest surface by linear scan, and shades it with a single point light:
//! - Ambient, diffuse and Phong specular terms
//! - Hard shadows from a secondary ray toward the light
//! - Mirror reflection off spheres, with a bounded bounce budget

mod camera;
mod hittable;
mod intersect;
mod renderer;
mod shading;

pub use camera::{generate_rays, Camera};
pub use hittable::{is_occluded, scene_objects, HitRecord, Hittable, ShapeRef};
pub use intersect::{
    intersect_plane, intersect_sphere, intersect_triangle, reflect, TriangleHit, PARALLEL_EPSILON,
};
pub use renderer::{
    clamp_01, color_to_rgb8, render, render_pixel, render_scene, render_scene_with, PixelBuffer,
    RenderConfig, RenderError,
};
pub use shading::{direct_lighting, ray_color, DirectLighting};

/// Re-export scene and math types used in the public API
pub use lumen_core::{Color, LightSource, Plane, Scene, Sphere, Surface, Triangle};
pub use lumen_math::{Interval, Ray, Vec3};
