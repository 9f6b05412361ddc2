//! Scene file loading.

use std::path::Path;

use super::parser::{ParseResult, SceneParser};
use crate::scene::Scene;

/// Load a scene description file.
///
/// The scene is named after the file stem. A missing or unreadable file is
/// reported as [`ParseError::Io`](super::ParseError::Io).
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scenes/scene1.txt")?;
/// println!("Loaded {} shapes", scene.shape_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> ParseResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");
    load_scene_from_string(&content, name)
}

/// Load a scene from a string (useful for testing).
pub fn load_scene_from_string(content: &str, name: &str) -> ParseResult<Scene> {
    let mut scene = Scene::new(name);
    SceneParser::new(content).parse_into(&mut scene)?;

    log::info!(
        "Loaded scene '{}': {} spheres, {} triangles, {} planes, {} lights",
        scene.name,
        scene.spheres.len(),
        scene.triangles.len(),
        scene.planes.len(),
        scene.lights.len()
    );

    if scene.lights.len() > 1 {
        log::warn!(
            "Scene '{}' declares {} lights; only the first is used",
            scene.name,
            scene.lights.len()
        );
    }

    Ok(scene)
}
