//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it to PPM format.

use lumen_renderer::{
    color_to_rgb8, render_scene_with, Camera, Color, LightSource, Plane, PixelBuffer,
    RenderConfig, Scene, Sphere, Surface, Triangle, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    env_logger::init();

    log::info!("Lumen Ray Tracer - Simple Example");

    let scene = build_scene();
    log::info!("Scene has {} shapes", scene.shape_count());

    let camera = Camera::new(55.0, 640, 480);
    let config = RenderConfig::default().with_max_depth(8);

    log::info!("Rendering {}x{}...", camera.width, camera.height);

    let start = std::time::Instant::now();
    let image = render_scene_with(&scene, &camera, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    log::info!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple");

    // Ground
    scene.add_plane(Plane::new(
        Vec3::Y,
        Vec3::new(0.0, -1.5, 0.0),
        Surface::new(Color::new(0.6, 0.6, 0.55), Color::splat(0.1), 4.0),
    ));

    // Row of spheres with increasing shininess
    for (i, phong) in [4.0_f32, 16.0, 64.0].into_iter().enumerate() {
        let x = -2.5 + 2.5 * i as f32;
        scene.add_sphere(Sphere::new(
            Vec3::new(x, -0.5, -8.0),
            1.0,
            Surface::new(Color::new(0.9, 0.3 + 0.2 * i as f32, 0.2), Color::splat(0.7), phong),
        ));
    }

    // Backdrop triangle
    scene.add_triangle(Triangle::new(
        Vec3::new(-6.0, -1.5, -14.0),
        Vec3::new(6.0, -1.5, -14.0),
        Vec3::new(0.0, 5.0, -14.0),
        Surface::new(Color::new(0.2, 0.4, 0.8), Color::ZERO, 1.0),
    ));

    scene.add_light(LightSource::new(
        Vec3::new(3.0, 6.0, -2.0),
        Color::splat(0.9),
        Color::splat(0.15),
    ));

    scene
}

fn save_ppm(image: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    // PPM rows run top to bottom; row 0 of the buffer is the bottom
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let rgb = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
    }

    Ok(())
}
