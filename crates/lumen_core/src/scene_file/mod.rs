//! Text scene description format.
//!
//! ## Format
//!
//! ```text
//! sphere
//! 0 0 -5          center
//! 1               radius
//! 0.8 0.1 0.1     diffuse color (Cr)
//! 1 1 1           specular color (Cp)
//! 32              phong exponent
//!
//! triangle        a / b / c / Cr / Cp (3 floats each), then phong
//! plane           normal / point / Cr / Cp (3 floats each), then phong
//! light           position / light color (Cl) / ambient color (Ca)
//! ```
//!
//! Any line containing `#` is a comment. See [`lexer`] for the exact line
//! classification rules.

pub mod lexer;
mod loader;
mod parser;
mod writer;

pub use lexer::{classify, LineKind, ShapeKind};
pub use loader::*;
pub use parser::*;
pub use writer::*;
