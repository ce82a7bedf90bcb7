use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The font faces available to badge text. Both map onto the standard
/// PDF Type1 Helvetica family, so no font files are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    /// The PostScript name of the standard font backing this face.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub font: FontFace,
    pub size: f32,
    #[serde(default)]
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font: FontFace, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }

    pub const fn bold(size: f32, color: Color) -> Self {
        Self::new(FontFace::Bold, size, color)
    }

    pub const fn regular(size: f32, color: Color) -> Self {
        Self::new(FontFace::Regular, size, color)
    }
}

/// Line painting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
