use crate::error::RenderError;
use badge_types::Size;
use image::GenericImageView;

/// Color layout of the primary pixel buffer of a [`RasterImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray,
    Rgb,
}

/// Decoded 8-bit pixels, with the alpha channel (if any) split into its own
/// plane so backends can emit it as a soft mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl RasterImage {
    /// Decodes PNG or JPEG bytes, sniffing the format from the content.
    ///
    /// Fully opaque alpha channels are dropped.
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let img = image::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidImage(format!(
                "image has zero dimension ({}x{})",
                width, height
            )));
        }

        let color = img.color();
        let (format, pixels, alpha) = match (color.has_color(), color.has_alpha()) {
            (false, false) => (PixelFormat::Gray, img.into_luma8().into_raw(), None),
            (true, false) => (PixelFormat::Rgb, img.into_rgb8().into_raw(), None),
            (false, true) => {
                let (gray, alpha) = split_alpha(&img.into_luma_alpha8().into_raw(), 1);
                (PixelFormat::Gray, gray, Some(alpha))
            }
            (true, true) => {
                let (rgb, alpha) = split_alpha(&img.into_rgba8().into_raw(), 3);
                (PixelFormat::Rgb, rgb, Some(alpha))
            }
        };

        let alpha = alpha.filter(|a| a.iter().any(|&v| v != u8::MAX));
        log::debug!(
            "Decoded {}x{} {:?} image (alpha: {})",
            width,
            height,
            format,
            alpha.is_some()
        );

        Ok(Self {
            width,
            height,
            format,
            pixels,
            alpha,
        })
    }

    /// Wraps an 8-bit grayscale buffer, one byte per pixel in row-major order.
    pub fn from_gray(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(RenderError::InvalidImage(format!(
                "expected {} gray pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format: PixelFormat::Gray,
            pixels,
            alpha: None,
        })
    }

    /// Pixel dimensions as a size, taking one pixel as one point.
    pub fn native_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

fn split_alpha(interleaved: &[u8], color_channels: usize) -> (Vec<u8>, Vec<u8>) {
    let stride = color_channels + 1;
    let pixel_count = interleaved.len() / stride;
    let mut color = Vec::with_capacity(pixel_count * color_channels);
    let mut alpha = Vec::with_capacity(pixel_count);
    for px in interleaved.chunks_exact(stride) {
        color.extend_from_slice(&px[..color_channels]);
        alpha.push(px[color_channels]);
    }
    (color, alpha)
}
