//! Phong shading with hard shadows and mirror reflection.
//!
//! Shading uses the scene's active (first) light only. Spheres additionally
//! spawn a reflection ray and multiply their direct color by whatever the
//! reflection sees. Recursion is bounded by the `depth` budget; an exhausted
//! budget contributes black.

use crate::hittable::{is_occluded, HitRecord, Hittable};
use crate::intersect::reflect;
use crate::RenderConfig;
use lumen_core::{Color, LightSource, Scene};
use lumen_math::{Interval, Ray};

/// Local illumination at a hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLighting {
    /// Final direct color (ambient only when in shadow)
    pub color: Color,
    /// Lambert coefficient `max(0, n.l)`
    pub diffuse: f32,
    /// Specular coefficient `max(0, n.h)^phong`
    pub specular: f32,
    /// Whether the light is blocked
    pub in_shadow: bool,
}

/// Compute direct lighting for a hit from `light`.
///
/// `diffuse` and `specular` are reported even in shadow, but only the
/// ambient term reaches `color` then.
pub fn direct_lighting(
    ray: &Ray,
    rec: &HitRecord,
    light: &LightSource,
    scene: &Scene,
    config: &RenderConfig,
) -> DirectLighting {
    let surface = rec.surface();
    let normal = rec.normal;

    let l = (light.position - rec.p).normalize_or_zero();
    let h = (-ray.direction().normalize_or_zero() + l).normalize_or_zero();

    let diffuse = normal.dot(l).max(0.0);
    // Clamp before the power so negative bases never produce NaN
    let specular = normal.dot(h).max(0.0).powf(surface.phong);

    // Offset along the normal to avoid shadow acne
    let shadow_origin = rec.p + normal * config.shadow_epsilon;
    let to_light = light.position - shadow_origin;
    let shadow_ray = Ray::new(shadow_origin, to_light.normalize_or_zero());
    let in_shadow = is_occluded(scene, &shadow_ray, to_light.length());

    let color = if in_shadow {
        surface.diffuse * light.ambient
    } else {
        surface.diffuse * (light.ambient + light.color * diffuse)
            + light.color * surface.specular * specular
    };

    DirectLighting {
        color,
        diffuse,
        specular,
        in_shadow,
    }
}

/// Compute the color seen by a ray.
///
/// `depth` is the number of surface hits still allowed. At zero the result
/// is black, which bounds reflection chains between facing mirrors.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::FORWARD) else {
        return config.background;
    };

    // No light means no ambient term either
    let Some(light) = scene.active_light() else {
        return Color::ZERO;
    };

    let direct = direct_lighting(ray, &rec, light, scene, config).color;

    if !rec.shape.is_reflective() {
        return direct;
    }

    let bounce = Ray::new(
        rec.p + rec.normal * config.shadow_epsilon,
        reflect(ray.direction(), rec.normal),
    );
    direct * ray_color(&bounce, scene, depth - 1, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Plane, Sphere, Surface};
    use lumen_math::Vec3;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    fn white_light(position: Vec3) -> LightSource {
        LightSource::new(position, Color::ONE, Color::splat(0.2))
    }

    /// Ground plane y = 0 lit from straight above.
    fn ground_scene() -> Scene {
        let mut scene = Scene::new("ground");
        scene.add_plane(Plane::new(
            Vec3::Y,
            Vec3::ZERO,
            Surface::new(Color::new(0.5, 0.6, 0.7), Color::ZERO, 1.0),
        ));
        scene.add_light(white_light(Vec3::new(0.0, 10.0, 0.0)));
        scene
    }

    /// Ray from the side aimed at the origin on the ground.
    fn ground_ray() -> Ray {
        Ray::new(Vec3::new(3.0, 1.0, 0.0), Vec3::new(-3.0, -1.0, 0.0).normalize())
    }

    #[test]
    fn test_unshadowed_ground_is_fully_lit() {
        let scene = ground_scene();
        let rec = scene.hit(&ground_ray(), Interval::FORWARD).unwrap();
        let lit = direct_lighting(&ground_ray(), &rec, &scene.lights[0], &scene, &config());

        assert!(!lit.in_shadow);
        assert!((lit.diffuse - 1.0).abs() < 1e-5);
        let expected = Color::new(0.5, 0.6, 0.7) * (0.2 + lit.diffuse);
        assert!((lit.color - expected).length() < 1e-5);
    }

    #[test]
    fn test_blocked_light_gives_ambient_only() {
        let mut scene = ground_scene();
        // Occluder between the ground origin and the light, out of the ray's path
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Surface::default()));

        let rec = scene.hit(&ground_ray(), Interval::FORWARD).unwrap();
        let lit = direct_lighting(&ground_ray(), &rec, &scene.lights[0], &scene, &config());

        assert!(lit.in_shadow);
        assert_eq!(lit.color, Color::new(0.5, 0.6, 0.7) * Color::splat(0.2));
        assert_eq!(
            ray_color(&ground_ray(), &scene, 4, &config()),
            Color::new(0.5, 0.6, 0.7) * Color::splat(0.2)
        );
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let mut scene = ground_scene();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 20.0, 0.0), 1.0, Surface::default()));

        let rec = scene.hit(&ground_ray(), Interval::FORWARD).unwrap();
        let lit = direct_lighting(&ground_ray(), &rec, &scene.lights[0], &scene, &config());
        assert!(!lit.in_shadow);
    }

    #[test]
    fn test_specular_never_nan() {
        // Light below the ground: n.h is negative, phong is fractional
        let mut scene = Scene::new("under");
        scene.add_plane(Plane::new(
            Vec3::Y,
            Vec3::ZERO,
            Surface::new(Color::ONE, Color::ONE, 2.5),
        ));
        scene.add_light(white_light(Vec3::new(0.0, -5.0, 0.0)));

        let rec = scene.hit(&ground_ray(), Interval::FORWARD).unwrap();
        let lit = direct_lighting(&ground_ray(), &rec, &scene.lights[0], &scene, &config());

        assert_eq!(lit.diffuse, 0.0);
        assert!(!lit.specular.is_nan());
        assert!(!lit.color.is_nan());
    }

    #[test]
    fn test_only_first_light_is_used() {
        let mut dark_first = ground_scene();
        dark_first.lights.insert(
            0,
            LightSource::new(Vec3::new(0.0, 10.0, 0.0), Color::ZERO, Color::ZERO),
        );

        assert_eq!(ray_color(&ground_ray(), &dark_first, 4, &config()), Color::ZERO);
        assert!(ray_color(&ground_ray(), &ground_scene(), 4, &config()).length() > 0.0);
    }

    #[test]
    fn test_no_light_shades_black() {
        let mut scene = ground_scene();
        scene.lights.clear();
        assert_eq!(ray_color(&ground_ray(), &scene, 4, &config()), Color::ZERO);
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = ground_scene();
        let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let config = RenderConfig::default().with_background(Color::new(0.1, 0.2, 0.3));
        assert_eq!(ray_color(&up, &scene, 4, &config), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_zero_depth_is_black() {
        let scene = ground_scene();
        assert_eq!(ray_color(&ground_ray(), &scene, 0, &config()), Color::ZERO);
    }

    #[test]
    fn test_sphere_reflection_multiplies() {
        // Mirror sphere above a lit ground plane, looking straight down at it
        let mut scene = ground_scene();
        let sphere_surface = Surface::new(Color::ONE, Color::ZERO, 1.0);
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0, sphere_surface));
        scene.lights[0] = white_light(Vec3::new(0.0, 3.0, 10.0));

        let down = Ray::new(Vec3::new(0.0, 6.0, 0.0), -Vec3::Y);
        let color = ray_color(&down, &scene, 4, &config());

        // Reflection goes straight up and misses everything: black
        assert_eq!(color, Color::ZERO);

        // With a white background the sphere shows its direct color
        let config = RenderConfig::default().with_background(Color::ONE);
        let rec = scene.hit(&down, Interval::FORWARD).unwrap();
        let direct = direct_lighting(&down, &rec, &scene.lights[0], &scene, &config).color;
        assert_eq!(ray_color(&down, &scene, 4, &config), direct);
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mut scene = Scene::new("mirrors");
        let mirror = Surface::new(Color::ONE, Color::ONE, 8.0);
        scene.add_sphere(Sphere::new(Vec3::new(-2.0, 0.0, 0.0), 1.0, mirror));
        scene.add_sphere(Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0, mirror));
        scene.add_light(white_light(Vec3::new(0.0, 5.0, 0.0)));

        // Bounces back and forth along the x axis forever without a budget
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        for depth in [1, 2, 8, 16, 64] {
            let color = ray_color(&ray, &scene, depth, &config());
            assert_eq!(color, Color::ZERO);
        }
    }
}
