//! Hittable trait and HitRecord for ray-object intersection.

use crate::intersect::{intersect_plane, intersect_sphere, intersect_triangle};
use lumen_core::{Plane, Scene, Sphere, Surface, Triangle};
use lumen_math::{Interval, Ray, Vec3};

/// Which shape produced a hit.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Sphere(&'a Sphere),
    Triangle(&'a Triangle),
    Plane(&'a Plane),
}

impl<'a> ShapeRef<'a> {
    /// Shading parameters of the shape.
    pub fn surface(&self) -> &'a Surface {
        match *self {
            ShapeRef::Sphere(s) => &s.surface,
            ShapeRef::Triangle(t) => &t.surface,
            ShapeRef::Plane(p) => &p.surface,
        }
    }

    /// Only spheres spawn reflection rays.
    pub fn is_reflective(&self) -> bool {
        matches!(self, ShapeRef::Sphere(_))
    }
}

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Geometric surface normal (unit length, not flipped toward the ray)
    pub normal: Vec3,
    /// Barycentric weights for triangle hits, zero otherwise
    pub u: f32,
    pub v: f32,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// The shape that was hit
    pub shape: ShapeRef<'a>,
}

impl<'a> HitRecord<'a> {
    /// Shading parameters at the hit.
    pub fn surface(&self) -> &'a Surface {
        self.shape.surface()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object at a parameter strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = intersect_sphere(ray, self.center, self.radius)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: (p - self.center).normalize_or_zero(),
            u: 0.0,
            v: 0.0,
            t,
            shape: ShapeRef::Sphere(self),
        })
    }
}

impl Hittable for Triangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let hit = intersect_triangle(ray, self.a, self.b, self.c)?;
        if !ray_t.surrounds(hit.t) {
            return None;
        }

        Some(HitRecord {
            p: ray.at(hit.t),
            normal: self.normal(),
            u: hit.beta,
            v: hit.gamma,
            t: hit.t,
            shape: ShapeRef::Triangle(self),
        })
    }
}

impl Hittable for Plane {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = intersect_plane(ray, self.point, self.normal)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            p: ray.at(t),
            normal: self.normal.normalize_or_zero(),
            u: 0.0,
            v: 0.0,
            t,
            shape: ShapeRef::Plane(self),
        })
    }
}

/// Every shape in the scene in scan order: spheres, triangles, planes.
pub fn scene_objects(scene: &Scene) -> impl Iterator<Item = &dyn Hittable> {
    let spheres = scene.spheres.iter().map(|s| s as &dyn Hittable);
    let triangles = scene.triangles.iter().map(|t| t as &dyn Hittable);
    let planes = scene.planes.iter().map(|p| p as &dyn Hittable);
    spheres.chain(triangles).chain(planes)
}

/// Nearest hit across the whole scene (linear scan).
///
/// Each candidate must be strictly nearer than the best so far, so on an
/// exact tie the shape scanned first keeps the hit.
impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in scene_objects(self) {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

/// True if anything in the scene is hit strictly between 0 and `max_t`.
pub fn is_occluded(scene: &Scene, ray: &Ray, max_t: f32) -> bool {
    let interval = Interval::FORWARD.with_max(max_t);
    scene_objects(scene).any(|object| object.hit(ray, interval).is_some())
}
