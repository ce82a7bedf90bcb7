use crate::image::RasterImage;
use crate::text::text_width;
use badge_types::{Point, Rect, Size, Stroke, TextStyle};
use std::collections::BTreeMap;

/// A single line of text drawn at a baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub style: TextStyle,
}

impl TextRun {
    /// Approximate ink box: from the descender to the cap height.
    pub fn bounds(&self) -> Rect {
        let size = self.style.size;
        Rect::new(
            self.origin.x,
            self.origin.y - size * 0.25,
            text_width(&self.text, &self.style),
            size,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// Places a registered image, stretched to fill `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraw {
    pub image: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text(TextRun),
    Line(LineSegment),
    Image(ImageDraw),
}

impl DrawCommand {
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Text(run) => run.bounds(),
            DrawCommand::Line(line) => {
                let x = line.from.x.min(line.to.x);
                let y = line.from.y.min(line.to.y);
                Rect::new(
                    x,
                    y,
                    (line.from.x - line.to.x).abs(),
                    (line.from.y - line.to.y).abs(),
                )
            }
            DrawCommand::Image(draw) => draw.rect,
        }
    }
}

/// One page of positioned primitives, painted in order.
///
/// Coordinates are PDF points with the origin at the bottom-left corner.
/// Images are registered once under a resource name and referenced by
/// [`ImageDraw`] commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub page_size: Size,
    pub title: Option<String>,
    pub images: BTreeMap<String, RasterImage>,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            title: None,
            images: BTreeMap::new(),
            commands: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_image(&mut self, name: impl Into<String>, image: RasterImage) {
        self.images.insert(name.into(), image);
    }

    pub fn draw_text(&mut self, text: impl Into<String>, origin: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text(TextRun {
            text: text.into(),
            origin,
            style,
        }));
    }

    pub fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands
            .push(DrawCommand::Line(LineSegment { from, to, stroke }));
    }

    pub fn draw_image(&mut self, name: impl Into<String>, rect: Rect) {
        self.commands.push(DrawCommand::Image(ImageDraw {
            image: name.into(),
            rect,
        }));
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn image_draws(&self) -> impl Iterator<Item = &ImageDraw> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image(draw) => Some(draw),
            _ => None,
        })
    }

    /// Finds the first text run whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|run| run.text == text)
    }
}
