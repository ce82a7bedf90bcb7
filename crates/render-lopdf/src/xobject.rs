use badge_render_core::{PixelFormat, RasterImage};
use lopdf::{Document, ObjectId, Stream, dictionary};

fn color_space(format: PixelFormat) -> &'static str {
    match format {
        PixelFormat::Gray => "DeviceGray",
        PixelFormat::Rgb => "DeviceRGB",
    }
}

fn image_stream(width: u32, height: u32, space: &str, data: Vec<u8>, compress: bool) -> Stream {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(width),
        "Height" => i64::from(height),
        "ColorSpace" => space,
        "BitsPerComponent" => 8,
    };
    let mut stream = Stream::new(dict, data);
    if compress && let Err(e) = stream.compress() {
        log::warn!("Image stream left uncompressed: {}", e);
    }
    stream
}

/// Adds an image XObject (and its soft mask, when the image has alpha) to
/// the document and returns the image's object id.
pub(crate) fn add_image(doc: &mut Document, image: &RasterImage, compress: bool) -> ObjectId {
    let mut stream = image_stream(
        image.width,
        image.height,
        color_space(image.format),
        image.pixels.clone(),
        compress,
    );

    if let Some(alpha) = &image.alpha {
        let mask = image_stream(image.width, image.height, "DeviceGray", alpha.clone(), compress);
        let mask_id = doc.add_object(mask);
        stream.dict.set("SMask", mask_id);
    }

    doc.add_object(stream)
}
