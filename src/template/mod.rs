//! Badge layout and content configuration.
//!
//! Every string and every coordinate used to compose a badge lives in a
//! [`BadgeTemplate`]. The built-in CNOL 2025 template is the `Default`;
//! other templates are loaded from camelCase JSON.

mod defaults;

use crate::error::TemplateError;
use crate::qr::{MAX_MODULE_PX, MAX_QUIET_ZONE};
use badge_types::{Point, Size, Stroke, TextStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTemplate {
    pub layout: LayoutConfig,
    pub content: ContentConfig,
    pub assets: AssetNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page: Size,
    pub fold_lines: FoldLines,
    pub logo: ImagePlacement,
    pub title: TextPlacement,
    pub venue: TextPlacement,
    pub poster: ImagePlacement,
    pub identity: IdentityLayout,
    pub qr: QrLayout,
    pub notices: NoticeLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldLines {
    pub horizontal_y: f32,
    pub vertical_x: f32,
    pub stroke: Stroke,
}

/// An image drawn at `scale` times its pixel size, shrunk further if that
/// would exceed `max_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlacement {
    pub position: Point,
    pub scale: f32,
    pub max_size: Size,
}

impl ImagePlacement {
    pub fn fitted_size(&self, native: Size) -> Size {
        native.scale(self.scale).fit_within(self.max_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPlacement {
    pub position: Point,
    pub style: TextStyle,
}

/// The stacked `<label> : <value>` lines. `origin` is the baseline of the
/// name line; each following line sits `line_spacing` lower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityLayout {
    pub origin: Point,
    pub line_spacing: f32,
    pub name_style: TextStyle,
    pub field_style: TextStyle,
    /// Lines wider than this are set in a smaller size.
    pub max_width: f32,
    pub min_font_size: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrLayout {
    pub position: Point,
    /// Edge length of the square on the page, in points.
    pub size: f32,
    /// Raster pixels per QR module.
    pub module_px: u32,
    /// Light border, in modules.
    pub quiet_zone: u32,
    #[serde(default)]
    pub error_correction: ErrorCorrection,
}

/// Vertical flow of the notice sections. `origin` is the baseline of the
/// first heading; text flows downwards and must stay above `min_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeLayout {
    pub origin: Point,
    pub line_height: f32,
    pub heading_gap: f32,
    pub section_gap: f32,
    pub min_y: f32,
    pub heading_style: TextStyle,
    pub line_style: TextStyle,
}

/// One positioned line produced by [`NoticeLayout::flow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowedLine<'a> {
    pub text: &'a str,
    pub baseline: f32,
    pub heading: bool,
}

impl NoticeLayout {
    pub fn flow<'a>(&self, sections: &'a [NoticeSection]) -> Vec<FlowedLine<'a>> {
        let mut lines = Vec::new();
        let mut cursor = self.origin.y;
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                cursor -= self.section_gap;
            }
            if !section.heading.is_empty() {
                lines.push(FlowedLine {
                    text: &section.heading,
                    baseline: cursor,
                    heading: true,
                });
                cursor -= self.heading_gap;
            }
            for line in &section.lines {
                lines.push(FlowedLine {
                    text: line,
                    baseline: cursor,
                    heading: false,
                });
                cursor -= self.line_height;
            }
        }
        lines
    }

    pub fn style_for(&self, line: &FlowedLine<'_>) -> TextStyle {
        if line.heading {
            self.heading_style
        } else {
            self.line_style
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLabels {
    pub name: String,
    pub role: String,
    pub city: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSection {
    pub heading: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    /// Written to the PDF document information, followed by the holder's name.
    pub document_title: String,
    pub title: String,
    pub venue: String,
    pub labels: FieldLabels,
    pub label_separator: String,
    #[serde(default)]
    pub notices: Vec<NoticeSection>,
}

/// Names of the static images, as understood by the asset provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetNames {
    pub logo: String,
    pub poster: String,
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), TemplateError> {
    if condition {
        Ok(())
    } else {
        Err(TemplateError::Invalid(message()))
    }
}

fn ensure_text_style(what: &str, style: &TextStyle) -> Result<(), TemplateError> {
    ensure(style.size > 0.0, || {
        format!("{} font size must be positive, got {}", what, style.size)
    })
}

impl BadgeTemplate {
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let template: BadgeTemplate = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded badge template from {}", path.display());
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the geometric constraints composition relies on.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let layout = &self.layout;
        ensure(layout.page.is_positive(), || {
            format!(
                "page dimensions must be positive, got {}x{}",
                layout.page.width, layout.page.height
            )
        })?;

        for (what, placement) in [("logo", &layout.logo), ("poster", &layout.poster)] {
            ensure(placement.scale > 0.0, || {
                format!("{} scale must be positive, got {}", what, placement.scale)
            })?;
            ensure(placement.max_size.is_positive(), || {
                format!("{} maximum size must be positive", what)
            })?;
        }

        ensure(layout.qr.size > 0.0, || {
            format!("QR size must be positive, got {}", layout.qr.size)
        })?;
        ensure((1..=MAX_MODULE_PX).contains(&layout.qr.module_px), || {
            format!(
                "QR module size must be between 1 and {} pixels, got {}",
                MAX_MODULE_PX, layout.qr.module_px
            )
        })?;
        ensure(layout.qr.quiet_zone <= MAX_QUIET_ZONE, || {
            format!(
                "QR quiet zone must be at most {} modules, got {}",
                MAX_QUIET_ZONE, layout.qr.quiet_zone
            )
        })?;

        ensure_text_style("title", &layout.title.style)?;
        ensure_text_style("venue", &layout.venue.style)?;
        ensure_text_style("name", &layout.identity.name_style)?;
        ensure_text_style("field", &layout.identity.field_style)?;
        ensure_text_style("notice heading", &layout.notices.heading_style)?;
        ensure_text_style("notice line", &layout.notices.line_style)?;
        ensure(layout.identity.min_font_size > 0.0, || {
            "identity minimum font size must be positive".to_string()
        })?;

        let notices = &layout.notices;
        ensure(notices.line_height > 0.0, || {
            format!("notice line height must be positive, got {}", notices.line_height)
        })?;
        let flowed = notices.flow(&self.content.notices);
        if let Some(lowest) = flowed.last() {
            ensure(lowest.baseline >= notices.min_y, || {
                format!(
                    "notice text reaches y={} which is below the minimum of {}",
                    lowest.baseline, notices.min_y
                )
            })?;
        }

        Ok(())
    }
}
