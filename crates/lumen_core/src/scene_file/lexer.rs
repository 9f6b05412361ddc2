//! Line classification for scene description files.
//!
//! Scene files are line oriented. A keyword line opens a shape block and is
//! followed by a fixed number of data lines. Classification follows these
//! rules:
//!
//! - A line containing `#` anywhere is a comment, even if it also contains
//!   a keyword.
//! - Otherwise keywords are matched as substrings, tried in the order
//!   `sphere`, `triangle`, `plane`, `light`. The first match wins, so
//!   `"sphere light"` opens a sphere block.
//! - Whitespace-only lines are blank.
//! - Everything else is a data line. Data lines outside a block are skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker that turns a whole line into a comment.
pub const COMMENT_MARKER: char = '#';

/// The kinds of shape block a scene file can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Sphere,
    Triangle,
    Plane,
    Light,
}

impl ShapeKind {
    /// All kinds, in keyword matching order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Sphere,
        ShapeKind::Triangle,
        ShapeKind::Plane,
        ShapeKind::Light,
    ];

    /// Keyword that opens a block of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Plane => "plane",
            ShapeKind::Light => "light",
        }
    }

    /// Number of values expected on each data line of the block, in order.
    pub fn layout(self) -> &'static [usize] {
        match self {
            // center / radius / diffuse / specular / phong
            ShapeKind::Sphere => &[3, 1, 3, 3, 1],
            // a / b / c / diffuse / specular / phong
            ShapeKind::Triangle => &[3, 3, 3, 3, 3, 1],
            // normal / point / diffuse / specular / phong
            ShapeKind::Plane => &[3, 3, 3, 3, 1],
            // position / light color / ambient
            ShapeKind::Light => &[3, 3, 3],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classification of a single physical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    ShapeHeader(ShapeKind),
    Data,
}

/// Classify one line of a scene file.
pub fn classify(line: &str) -> LineKind {
    if line.contains(COMMENT_MARKER) {
        return LineKind::Comment;
    }

    if let Some(kind) = ShapeKind::ALL
        .into_iter()
        .find(|kind| line.contains(kind.keyword()))
    {
        return LineKind::ShapeHeader(kind);
    }

    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("sphere"), LineKind::ShapeHeader(ShapeKind::Sphere));
        assert_eq!(classify("triangle"), LineKind::ShapeHeader(ShapeKind::Triangle));
        assert_eq!(classify("plane"), LineKind::ShapeHeader(ShapeKind::Plane));
        assert_eq!(classify("light"), LineKind::ShapeHeader(ShapeKind::Light));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        assert_eq!(
            classify("  big red sphere here"),
            LineKind::ShapeHeader(ShapeKind::Sphere)
        );
        assert_eq!(
            classify("groundplane"),
            LineKind::ShapeHeader(ShapeKind::Plane)
        );
        // "highlight" contains "light"
        assert_eq!(
            classify("highlight"),
            LineKind::ShapeHeader(ShapeKind::Light)
        );
    }

    #[test]
    fn test_hash_anywhere_suppresses_keyword() {
        assert_eq!(classify("# sphere"), LineKind::Comment);
        assert_eq!(classify("sphere # the red one"), LineKind::Comment);
        assert_eq!(classify("#"), LineKind::Comment);
    }

    #[test]
    fn test_first_keyword_in_order_wins() {
        // sphere is tested before light regardless of position in the line
        assert_eq!(
            classify("light sphere"),
            LineKind::ShapeHeader(ShapeKind::Sphere)
        );
        assert_eq!(
            classify("plane triangle"),
            LineKind::ShapeHeader(ShapeKind::Triangle)
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(classify("Sphere"), LineKind::Data);
    }

    #[test]
    fn test_blank_and_data() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
        assert_eq!(classify("1.0 2.0 3.0"), LineKind::Data);
        assert_eq!(classify("scene one"), LineKind::Data);
    }

    #[test]
    fn test_layout_line_counts() {
        assert_eq!(ShapeKind::Sphere.layout().len(), 5);
        assert_eq!(ShapeKind::Triangle.layout().len(), 6);
        assert_eq!(ShapeKind::Plane.layout().len(), 5);
        assert_eq!(ShapeKind::Light.layout().len(), 3);
    }
}
