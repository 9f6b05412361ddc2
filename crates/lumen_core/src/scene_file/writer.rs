//! Scene description writer.
//!
//! Emits a scene in the same line format the parser reads. Floats use Rust's
//! shortest round-trip formatting, so parsing the output reproduces every
//! numeric field exactly.

use std::fmt::Write as _;
use std::path::Path;

use lumen_math::Vec3;

use super::lexer::ShapeKind;
use super::parser::ParseResult;
use crate::scene::{Scene, Surface};

/// Serialize a scene to scene-description text.
pub fn write_scene(scene: &Scene) -> String {
    let mut out = String::new();

    if !scene.name.is_empty() && !scene.name.contains('\n') {
        let _ = writeln!(out, "# {}", scene.name);
    }

    for sphere in &scene.spheres {
        header(&mut out, ShapeKind::Sphere);
        vec3_line(&mut out, sphere.center);
        scalar_line(&mut out, sphere.radius);
        surface_lines(&mut out, &sphere.surface);
    }

    for triangle in &scene.triangles {
        header(&mut out, ShapeKind::Triangle);
        vec3_line(&mut out, triangle.a);
        vec3_line(&mut out, triangle.b);
        vec3_line(&mut out, triangle.c);
        surface_lines(&mut out, &triangle.surface);
    }

    for plane in &scene.planes {
        header(&mut out, ShapeKind::Plane);
        vec3_line(&mut out, plane.normal);
        vec3_line(&mut out, plane.point);
        surface_lines(&mut out, &plane.surface);
    }

    for light in &scene.lights {
        header(&mut out, ShapeKind::Light);
        vec3_line(&mut out, light.position);
        vec3_line(&mut out, light.color);
        vec3_line(&mut out, light.ambient);
    }

    out
}

/// Write a scene description file.
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> ParseResult<()> {
    std::fs::write(path, write_scene(scene))?;
    Ok(())
}

fn header(out: &mut String, kind: ShapeKind) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(kind.keyword());
    out.push('\n');
}

fn vec3_line(out: &mut String, v: Vec3) {
    let _ = writeln!(out, "{} {} {}", v.x, v.y, v.z);
}

fn scalar_line(out: &mut String, value: f32) {
    let _ = writeln!(out, "{}", value);
}

fn surface_lines(out: &mut String, surface: &Surface) {
    vec3_line(out, surface.diffuse);
    vec3_line(out, surface.specular);
    scalar_line(out, surface.phong);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{LightSource, Sphere};
    use crate::scene_file::parse_scene;

    #[test]
    fn test_write_sphere_block() {
        let mut scene = Scene::default();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.5, -4.0),
            1.0,
            Surface::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE, 16.0),
        ));

        let text = write_scene(&scene);
        assert_eq!(text, "sphere\n0 0.5 -4\n1\n1 0 0\n1 1 1\n16\n");
    }

    #[test]
    fn test_name_is_written_as_comment() {
        let mut scene = Scene::new("sphere world");
        scene.add_light(LightSource::new(Vec3::Y, Vec3::ONE, Vec3::ZERO));

        let text = write_scene(&scene);
        assert!(text.starts_with("# sphere world\n"));

        // The comment must not open a sphere block
        let parsed = parse_scene(&text).unwrap();
        assert!(parsed.spheres.is_empty());
        assert_eq!(parsed.lights.len(), 1);
    }

    #[test]
    fn test_awkward_floats_survive() {
        let mut scene = Scene::default();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.1, 1.0 / 3.0, -1e-7),
            std::f32::consts::PI,
            Surface::new(Vec3::splat(0.7), Vec3::splat(0.3), 12.5),
        ));

        let parsed = parse_scene(&write_scene(&scene)).unwrap();
        assert_eq!(parsed.spheres, scene.spheres);
    }
}
