pub mod color;
pub mod geometry;
pub mod style;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use style::{FontFace, Stroke, TextStyle};
