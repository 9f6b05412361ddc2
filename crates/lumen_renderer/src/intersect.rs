//! Ray/primitive intersection math.
//!
//! Pure functions, no scene state. Every function returns `None` unless the
//! ray hits at a strictly positive, finite parameter `t`. Degenerate inputs
//! (zero direction, ray parallel to a plane, collinear triangle vertices)
//! resolve to `None` as well.

use lumen_math::{Mat3, Ray, Vec3};

/// Cosine between the ray and a surface normal below which the ray is
/// treated as parallel to the surface.
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Hit on a triangle: ray parameter plus barycentric weights.
///
/// The hit point is `a + beta * (b - a) + gamma * (c - a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub t: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// Intersect a ray with a sphere.
///
/// Solves `|o + t*d - c|^2 = r^2` and returns the near root only. The far
/// root is never used, so a ray starting inside a sphere does not hit it.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let d = ray.direction();
    let oc = ray.origin() - center;

    let a = d.dot(d);
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || a == 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    positive(t)
}

/// Intersect a ray with triangle `(a, b, c)`.
///
/// Solves `[d, -u, -v] * [t, beta, gamma]^T = a - o` with `u = b - a` and
/// `v = c - a`. Boundaries are inclusive: hits on edges and vertices count.
pub fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<TriangleHit> {
    let u = b - a;
    let v = c - a;

    // det = d . (u x v), so scale it by |d| |u x v| to test the angle only
    let d = ray.direction();
    let system = Mat3::from_cols(d, -u, -v);
    let scale = d.length() * u.cross(v).length();
    if system.determinant().abs() <= PARALLEL_EPSILON * scale {
        return None;
    }

    let solution = system.inverse() * (a - ray.origin());
    let (t, beta, gamma) = (solution.x, solution.y, solution.z);

    if !(beta >= 0.0 && gamma >= 0.0 && beta + gamma <= 1.0) {
        return None;
    }

    positive(t).map(|t| TriangleHit { t, beta, gamma })
}

/// Intersect a ray with the plane through `point` with normal `normal`.
///
/// The normal need not be unit length. Both sides of the plane are hit.
pub fn intersect_plane(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    let d = ray.direction();
    let denom = d.dot(normal);
    if denom.abs() <= PARALLEL_EPSILON * d.length() * normal.length() {
        return None;
    }

    positive((point - ray.origin()).dot(normal) / denom)
}

/// Mirror `direction` about `normal` (unit length).
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

#[inline]
fn positive(t: f32) -> Option<f32> {
    (t.is_finite() && t > 0.0).then_some(t)
}
