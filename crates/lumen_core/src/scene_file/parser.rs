//! Scene description parser.
//!
//! Turns scene text into a [`Scene`]. Each shape block is a keyword line
//! followed by a fixed number of data lines read strictly by position (see
//! [`ShapeKind::layout`]). Each data line must hold at least the expected
//! number of whitespace-separated floats; trailing tokens are ignored.
//!
//! Parsing is all-or-nothing: any malformed or truncated block aborts with a
//! [`ParseError`] and no partial scene is returned.

use std::collections::VecDeque;

use lumen_math::Vec3;
use thiserror::Error;

use super::lexer::{classify, LineKind, ShapeKind};
use crate::scene::{LightSource, Plane, Scene, Sphere, Surface, Triangle};

/// Errors that can occur while reading a scene description.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of file in {shape} block starting at line {line}")]
    UnexpectedEof { shape: ShapeKind, line: usize },

    #[error("Line {line}: expected {expected} value(s), found {found}")]
    MissingValue {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: {message}")]
    InvalidValue { line: usize, message: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// One data line of a block: its line number and values.
struct DataLine {
    line: usize,
    values: Vec<f32>,
}

impl DataLine {
    fn vec3(&self) -> Vec3 {
        Vec3::new(self.values[0], self.values[1], self.values[2])
    }

    fn scalar(&self) -> f32 {
        self.values[0]
    }
}

/// Line-by-line scene parser.
pub struct SceneParser<'a> {
    lines: VecDeque<(usize, &'a str)>,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser over scene text.
    pub fn new(content: &'a str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(i, s)| (i + 1, s))
            .collect();

        Self { lines }
    }

    /// Parse every block into `scene`, preserving file order per shape kind.
    pub fn parse_into(&mut self, scene: &mut Scene) -> ParseResult<()> {
        while let Some((line_num, line)) = self.lines.pop_front() {
            match classify(line) {
                LineKind::ShapeHeader(kind) => self.parse_block(kind, line_num, scene)?,
                LineKind::Data => {
                    log::debug!("Skipping unrecognized line {}: {}", line_num, line.trim());
                }
                LineKind::Blank | LineKind::Comment => {}
            }
        }

        Ok(())
    }

    /// Parse the data lines following a keyword line.
    fn parse_block(
        &mut self,
        kind: ShapeKind,
        header_line: usize,
        scene: &mut Scene,
    ) -> ParseResult<()> {
        let mut data = Vec::with_capacity(kind.layout().len());
        for &count in kind.layout() {
            data.push(self.read_data_line(kind, header_line, count)?);
        }

        match kind {
            ShapeKind::Sphere => {
                let radius = &data[1];
                if radius.scalar() <= 0.0 {
                    return Err(ParseError::InvalidValue {
                        line: radius.line,
                        message: format!("sphere radius must be positive, got {}", radius.scalar()),
                    });
                }
                let surface = surface_from(&data[2], &data[3], &data[4])?;
                scene.add_sphere(Sphere::new(data[0].vec3(), radius.scalar(), surface));
            }
            ShapeKind::Triangle => {
                let surface = surface_from(&data[3], &data[4], &data[5])?;
                scene.add_triangle(Triangle::new(
                    data[0].vec3(),
                    data[1].vec3(),
                    data[2].vec3(),
                    surface,
                ));
            }
            ShapeKind::Plane => {
                let normal = &data[0];
                if normal.vec3() == Vec3::ZERO {
                    return Err(ParseError::InvalidValue {
                        line: normal.line,
                        message: "plane normal must be non-zero".to_string(),
                    });
                }
                let surface = surface_from(&data[2], &data[3], &data[4])?;
                scene.add_plane(Plane::new(normal.vec3(), data[1].vec3(), surface));
            }
            ShapeKind::Light => {
                scene.add_light(LightSource::new(data[0].vec3(), data[1].vec3(), data[2].vec3()));
            }
        }

        Ok(())
    }

    /// Pop the next physical line and read `count` floats from it.
    fn read_data_line(
        &mut self,
        kind: ShapeKind,
        header_line: usize,
        count: usize,
    ) -> ParseResult<DataLine> {
        let (line_num, line) = self.lines.pop_front().ok_or(ParseError::UnexpectedEof {
            shape: kind,
            line: header_line,
        })?;

        let values = parse_floats(line, count, line_num)?;
        Ok(DataLine {
            line: line_num,
            values,
        })
    }
}

/// Build a surface from diffuse, specular and phong data lines.
fn surface_from(diffuse: &DataLine, specular: &DataLine, phong: &DataLine) -> ParseResult<Surface> {
    if phong.scalar() < 0.0 {
        return Err(ParseError::InvalidValue {
            line: phong.line,
            message: format!("phong exponent must be non-negative, got {}", phong.scalar()),
        });
    }
    Ok(Surface::new(diffuse.vec3(), specular.vec3(), phong.scalar()))
}

/// Read the first `count` whitespace-separated floats from a line.
fn parse_floats(line: &str, count: usize, line_num: usize) -> ParseResult<Vec<f32>> {
    let tokens: Vec<&str> = line.split_whitespace().take(count).collect();
    if tokens.len() < count {
        return Err(ParseError::MissingValue {
            line: line_num,
            expected: count,
            found: tokens.len(),
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            let value: f32 = token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_num,
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(ParseError::InvalidNumber {
                    line: line_num,
                    token: token.to_string(),
                });
            }
            Ok(value)
        })
        .collect()
}

/// Parse scene text into a new scene.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    let mut scene = Scene::default();
    SceneParser::new(content).parse_into(&mut scene)?;
    Ok(scene)
}
