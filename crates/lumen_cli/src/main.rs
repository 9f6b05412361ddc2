use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use lumen_core::{load_scene, save_scene, Scene};
use lumen_renderer::{render_scene_with, Camera, PixelBuffer, RenderConfig};

/// Render a text scene description with the Lumen ray tracer.
#[derive(Parser, Debug)]
#[command(name = "lumen", version)]
struct Args {
    /// Scene description file
    #[arg(default_value = "scenes/scene1.txt")]
    scene: PathBuf,

    /// Output image (format from extension, e.g. .png or .ppm)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 55.0)]
    fov: f32,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Maximum surface hits per pixel (bounds mirror reflections)
    #[arg(long, default_value_t = 10)]
    max_depth: u32,

    /// Shade pixels on the calling thread only
    #[arg(long)]
    single_thread: bool,

    /// Print the parsed scene as JSON and exit
    #[arg(long)]
    dump_json: bool,

    /// Write the parsed scene back out in scene format and exit
    #[arg(long, value_name = "PATH")]
    write_scene: Option<PathBuf>,
}

impl Args {
    fn camera(&self) -> Result<Camera> {
        ensure!(
            self.fov > 0.0 && self.fov < 180.0,
            "field of view must be between 0 and 180 degrees, got {}",
            self.fov
        );
        ensure!(
            self.width > 0 && self.height > 0,
            "image size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        Ok(Camera::new(self.fov, self.width, self.height))
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_max_depth(self.max_depth)
            .with_parallel(!self.single_thread)
    }
}

fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    buffer
        .to_image()
        .save(path)
        .with_context(|| format!("Failed to save image to {}", path.display()))
}

fn render(args: &Args, scene: &Scene) -> Result<()> {
    let camera = args.camera()?;
    let config = args.render_config();

    let start = Instant::now();
    let buffer = render_scene_with(scene, &camera, &config);
    log::info!("Frame complete in {:?}", start.elapsed());

    save_image(&buffer, &args.output)?;
    log::info!("Saved {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting Lumen");

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    if args.dump_json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    if let Some(path) = &args.write_scene {
        save_scene(&scene, path)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
        log::info!("Wrote scene to {}", path.display());
        return Ok(());
    }

    render(&args, &scene)
}
