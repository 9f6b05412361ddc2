//! End-to-end render tests.

use lumen_core::parse_scene;
use lumen_renderer::{
    direct_lighting, render, render_scene, render_scene_with, Camera, Color, Hittable, Interval,
    LightSource, Ray, RenderConfig, Scene, Sphere, Surface, Vec3,
};

fn white_light(position: Vec3) -> LightSource {
    LightSource::new(position, Color::ONE, Color::splat(0.1))
}

#[test]
fn test_empty_scene_renders_black() {
    let mut scene = Scene::new("empty");
    let buffer = render_scene(&scene, 55.0, 16, 12);
    assert_eq!(buffer.pixels.len(), 16 * 12);
    assert!(buffer.pixels.iter().all(|c| *c == Color::ZERO));

    // A light alone does not change anything
    scene.add_light(white_light(Vec3::new(0.0, 5.0, 0.0)));
    let buffer = render_scene(&scene, 55.0, 16, 12);
    assert!(buffer.pixels.iter().all(|c| *c == Color::ZERO));
}

#[test]
fn test_center_pixel_faces_light() {
    // Large sphere on the forward axis, light directly behind the camera
    let mut scene = Scene::new("facing");
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.0, -10.0),
        8.0,
        Surface::new(Color::new(0.8, 0.8, 0.8), Color::ONE, 16.0),
    ));
    scene.add_light(white_light(Vec3::new(0.0, 0.0, 10.0)));

    let camera = Camera::new(55.0, 65, 65);
    let rays = camera.generate_rays();
    let ray = Ray::new(Vec3::ZERO, rays[camera.ray_index(32, 32)]);
    let config = RenderConfig::default();

    let rec = scene.hit(&ray, Interval::FORWARD).unwrap();
    let lit = direct_lighting(&ray, &rec, &scene.lights[0], &scene, &config);

    assert!((rec.t - 2.0).abs() < 1e-4);
    assert!((lit.diffuse - 1.0).abs() < 1e-4);
    assert!(!lit.in_shadow);

    // The sphere fills the frame: every primary ray hits it
    for direction in &rays {
        let ray = Ray::new(Vec3::ZERO, *direction);
        assert!(scene.hit(&ray, Interval::FORWARD).is_some());
    }
}

#[test]
fn test_facing_mirror_spheres_terminate() {
    let scene = parse_scene(include_str!("../../../scenes/mirrors.txt")).unwrap();
    assert_eq!(scene.spheres.len(), 2);

    for max_depth in [1, 8, 16] {
        let config = RenderConfig::default().with_max_depth(max_depth);
        let buffer = render_scene_with(&scene, &Camera::new(55.0, 24, 24), &config);
        assert_eq!(buffer.pixels.len(), 24 * 24);
        assert!(buffer.pixels.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let scene = parse_scene(
        "sphere
0 0 -6
1.5
0.7 0.2 0.2
0.5 0.5 0.5
32
plane
0 1 0
0 -1.5 0
0.6 0.6 0.6
0.1 0.1 0.1
4
triangle
-3 -1.5 -9
3 -1.5 -9
0 3 -9
0.2 0.3 0.8
0 0 0
1
light
2 6 0
1 1 1
0.1 0.1 0.1
",
    )
    .unwrap();

    let camera = Camera::new(55.0, 40, 30);
    let parallel = render_scene_with(&scene, &camera, &RenderConfig::default());
    let sequential = render_scene_with(
        &scene,
        &camera,
        &RenderConfig::default().with_parallel(false),
    );

    assert_eq!(parallel, sequential);
    // Something besides background was drawn
    assert!(parallel.pixels.iter().any(|c| *c != Color::ZERO));
}

#[test]
fn test_render_places_rays_column_major() {
    // Plane facing the camera; only pixel (2, 1) has its ray turned away
    let scene = parse_scene(
        "plane
0 0 1
0 0 -5
1 1 1
0 0 0
1
light
0 0 0
1 1 1
0 0 0
",
    )
    .unwrap();

    let camera = Camera::new(55.0, 3, 2);
    let mut rays = camera.generate_rays();
    rays[camera.ray_index(2, 1)] = Vec3::new(0.0, 0.0, 1.0);

    let buffer = render(&scene, &rays, 3, 2, &RenderConfig::default()).unwrap();
    assert_eq!(buffer.get(2, 1), Color::ZERO);
    assert!(buffer.get(0, 0).x > 0.0);
    assert!(buffer.get(1, 1).x > 0.0);
}

#[test]
fn test_no_nan_in_reference_style_scene() {
    let scene = parse_scene(include_str!("../../../scenes/scene1.txt")).unwrap();
    let buffer = render_scene(&scene, 55.0, 32, 32);
    assert!(buffer.pixels.iter().all(|c| c.is_finite()));
}
