//! Lumen Core - Scene model and scene description format.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Triangle`, `Plane`, `LightSource`
//! - **Scene files**: parsing and writing the line-oriented text format
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/scene1.txt")?;
//! println!("Loaded {} shapes, {} lights",
//!     scene.shape_count(),
//!     scene.lights.len());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{Color, LightSource, Plane, Scene, Sphere, Surface, Triangle};
pub use scene_file::{
    load_scene, load_scene_from_string, parse_scene, save_scene, write_scene, ParseError,
    ParseResult,
};
