use crate::content::PageContent;
use crate::xobject;
use badge_render_core::{DocumentRenderer, RenderError, Scene};
use badge_types::FontFace;
use lopdf::{Dictionary, Document, Object, StringFormat, dictionary};

/// Resource name of the regular text face.
pub const FONT_REGULAR: &str = "F1";
/// Resource name of the bold text face.
pub const FONT_BOLD: &str = "F2";

const PRODUCER: &str = concat!("cnol-badge ", env!("CARGO_PKG_VERSION"));

/// Renders a [`Scene`] to a single-page PDF 1.7 document.
///
/// No creation or modification dates are written, so identical scenes
/// produce byte-identical files.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    compress: bool,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles Flate compression of content and image streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    fn font_resources(doc: &mut Document) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (resource, face) in [(FONT_REGULAR, FontFace::Regular), (FONT_BOLD, FontFace::Bold)] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(resource, font_id);
        }
        fonts
    }

    fn build(&self, scene: &Scene) -> Result<Document, RenderError> {
        let size = scene.page_size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return Err(RenderError::Pdf(format!(
                "invalid page size {}x{}",
                size.width, size.height
            )));
        }

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let fonts = Self::font_resources(&mut doc);
        let mut xobjects = Dictionary::new();
        for (name, image) in &scene.images {
            let image_id = xobject::add_image(&mut doc, image, self.compress);
            xobjects.set(name.as_bytes().to_vec(), image_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
            "XObject" => xobjects,
        });

        let content = PageContent::new(scene).draw_all()?;
        let mut content_stream = lopdf::Stream::new(dictionary! {}, content.encode()?);
        if self.compress {
            content_stream.compress()?;
        }
        let content_id = doc.add_object(content_stream);

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
        };
        if let Some(title) = &scene.title {
            info.set("Title", pdf_text_string(title));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }
}

/// Encodes a document-level text string, using UTF-16BE when the value is
/// not plain ASCII.
fn pdf_text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        let mut doc = self.build(scene)?;
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        log::debug!(
            "Rendered PDF: {} commands, {} images, {} bytes",
            scene.commands.len(),
            scene.images.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}
