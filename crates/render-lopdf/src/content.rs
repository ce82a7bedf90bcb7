use badge_render_core::text::encode_win_ansi;
use badge_render_core::{DrawCommand, ImageDraw, LineSegment, RenderError, Scene, TextRun};
use badge_types::{Color, FontFace};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use crate::renderer::{FONT_BOLD, FONT_REGULAR};

fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => FONT_REGULAR,
        FontFace::Bold => FONT_BOLD,
    }
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().into_iter().map(Object::Real).collect()
}

/// Accumulates the operations of one page content stream.
pub(crate) struct PageContent<'a> {
    scene: &'a Scene,
    ops: Vec<Operation>,
}

impl<'a> PageContent<'a> {
    pub(crate) fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            ops: Vec::with_capacity(scene.commands.len() * 6),
        }
    }

    pub(crate) fn draw_all(mut self) -> Result<Content, RenderError> {
        for command in &self.scene.commands {
            match command {
                DrawCommand::Text(run) => self.draw_text(run),
                DrawCommand::Line(line) => self.draw_line(line),
                DrawCommand::Image(draw) => self.draw_image(draw)?,
            }
        }
        Ok(Content {
            operations: self.ops,
        })
    }

    fn draw_text(&mut self, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(font_resource(run.style.font).as_bytes().to_vec()),
                Object::Real(run.style.size),
            ],
        ));
        self.ops
            .push(Operation::new("rg", color_operands(run.style.color)));
        self.ops.push(Operation::new(
            "Td",
            vec![Object::Real(run.origin.x), Object::Real(run.origin.y)],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&run.text),
                StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn draw_line(&mut self, line: &LineSegment) {
        self.ops.push(Operation::new("q", vec![]));
        self.ops
            .push(Operation::new("w", vec![Object::Real(line.stroke.width)]));
        self.ops
            .push(Operation::new("RG", color_operands(line.stroke.color)));
        self.ops.push(Operation::new(
            "m",
            vec![Object::Real(line.from.x), Object::Real(line.from.y)],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![Object::Real(line.to.x), Object::Real(line.to.y)],
        ));
        self.ops.push(Operation::new("S", vec![]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    fn draw_image(&mut self, draw: &ImageDraw) -> Result<(), RenderError> {
        if !self.scene.images.contains_key(&draw.image) {
            return Err(RenderError::MissingImage(draw.image.clone()));
        }
        let rect = draw.rect;
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                Object::Real(rect.width),
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(rect.height),
                Object::Real(rect.x),
                Object::Real(rect.y),
            ],
        ));
        self.ops.push(Operation::new(
            "Do",
            vec![Object::Name(draw.image.as_bytes().to_vec())],
        ));
        self.ops.push(Operation::new("Q", vec![]));
        Ok(())
    }
}
