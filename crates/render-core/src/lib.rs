//! Core rendering abstractions for badge documents.
//!
//! This crate provides the pieces shared by every output backend:
//! - `Scene` and `DrawCommand`, the positioned primitives of one page
//! - `RasterImage`, decoded pixel data ready to embed
//! - `DocumentRenderer` trait for turning a scene into document bytes
//! - WinAnsi text encoding and Helvetica metrics used for text measurement

mod error;
mod image;
mod scene;
mod traits;
pub mod text;

pub use error::RenderError;
pub use image::{PixelFormat, RasterImage};
pub use scene::{DrawCommand, ImageDraw, LineSegment, Scene, TextRun};
pub use traits::DocumentRenderer;
