//! QR code rasterization.

use crate::error::EncodingError;
use crate::template::{ErrorCorrection, QrLayout};
use badge_render_core::RasterImage;
use qrcode::{Color, EcLevel, QrCode};

/// Largest accepted raster pixels per module.
pub const MAX_MODULE_PX: u32 = 32;
/// Largest accepted quiet zone, in modules.
pub const MAX_QUIET_ZONE: u32 = 16;

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Encodes identifiers as square 8-bit grayscale QR rasters: black modules
/// on white, surrounded by a light quiet zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrEncoder {
    error_correction: ErrorCorrection,
    module_px: u32,
    quiet_zone: u32,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::M,
            module_px: 4,
            quiet_zone: 4,
        }
    }
}

impl QrEncoder {
    pub fn new(error_correction: ErrorCorrection) -> Self {
        Self {
            error_correction,
            ..Self::default()
        }
    }

    pub fn from_layout(layout: &QrLayout) -> Self {
        Self {
            error_correction: layout.error_correction,
            module_px: layout.module_px.max(1),
            quiet_zone: layout.quiet_zone,
        }
    }

    pub fn with_module_px(mut self, px: u32) -> Self {
        self.module_px = px.max(1);
        self
    }

    pub fn with_quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    pub fn encode(&self, data: &str) -> Result<RasterImage, EncodingError> {
        if self.module_px > MAX_MODULE_PX || self.quiet_zone > MAX_QUIET_ZONE {
            return Err(EncodingError::Qr(format!(
                "raster settings out of range: {} px per module (max {}), quiet zone {} (max {})",
                self.module_px, MAX_MODULE_PX, self.quiet_zone, MAX_QUIET_ZONE
            )));
        }

        let code = QrCode::with_error_correction_level(data.as_bytes(), self.error_correction.into())
            .map_err(|e| EncodingError::Qr(e.to_string()))?;

        let modules = code.width();
        let px = self.module_px as usize;
        let (dim, border, len) = raster_dimensions(modules, px, self.quiet_zone as usize)
            .ok_or_else(|| EncodingError::Qr("raster dimensions overflow".to_string()))?;
        let side = u32::try_from(dim)
            .map_err(|_| EncodingError::Qr(format!("raster of {} px is too large", dim)))?;

        let mut pixels = vec![u8::MAX; len];
        for (my, row) in code.to_colors().chunks(modules).enumerate() {
            for (mx, color) in row.iter().enumerate() {
                if *color != Color::Dark {
                    continue;
                }
                let x0 = border + mx * px;
                let y0 = border + my * px;
                for y in y0..y0 + px {
                    pixels[y * dim + x0..y * dim + x0 + px].fill(0);
                }
            }
        }

        log::debug!(
            "Encoded QR code: {} modules, {}x{} px, level {:?}",
            modules,
            dim,
            dim,
            self.error_correction
        );
        RasterImage::from_gray(side, side, pixels).map_err(EncodingError::Render)
    }
}

/// Returns the side length, border width and buffer length of the raster.
fn raster_dimensions(modules: usize, px: usize, quiet_zone: usize) -> Option<(usize, usize, usize)> {
    let border = quiet_zone.checked_mul(px)?;
    let dim = modules
        .checked_mul(px)?
        .checked_add(border.checked_mul(2)?)?;
    Some((dim, border, dim.checked_mul(dim)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(image: &RasterImage) -> String {
        let width = image.width as usize;
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width as usize,
            image.height as usize,
            |x, y| image.pixels[y * width + x],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);
        grids[0].decode().unwrap().1
    }

    #[test]
    fn test_encode_decodes_back_to_identifier() {
        let image = QrEncoder::default().encode("cnol2025-jbarnard").unwrap();
        assert_eq!(decode(&image), "cnol2025-jbarnard");
    }

    #[test]
    fn test_raster_is_square_with_quiet_zone() {
        let image = QrEncoder::default().encode("A").unwrap();
        // Version 1 is 21 modules wide; 4 px per module, 4 modules each side.
        assert_eq!(image.width, (21 + 8) * 4);
        assert_eq!(image.width, image.height);
        assert!(image.pixels[..image.width as usize * 16].iter().all(|&p| p == 255));
        assert!(image.alpha.is_none());
    }

    #[test]
    fn test_higher_error_correction_grows_symbol() {
        let data = "cnol2025-a-rather-long-identifier-0123456789";
        let low = QrEncoder::new(ErrorCorrection::L).encode(data).unwrap();
        let high = QrEncoder::new(ErrorCorrection::H).encode(data).unwrap();
        assert!(high.width > low.width);
        assert_eq!(decode(&high), data);
    }

    #[test]
    fn test_custom_module_size() {
        let image = QrEncoder::default()
            .with_module_px(3)
            .with_quiet_zone(2)
            .encode("cnol2025-edurand")
            .unwrap();
        assert_eq!(image.width % 3, 0);
        assert_eq!(decode(&image), "cnol2025-edurand");
    }

    #[test]
    fn test_out_of_range_raster_settings_are_encoding_errors() {
        let huge_modules = QrEncoder::default().with_module_px(u32::MAX).encode("id");
        assert!(matches!(huge_modules, Err(EncodingError::Qr(_))));

        let huge_border = QrEncoder::default().with_quiet_zone(u32::MAX).encode("id");
        assert!(matches!(huge_border, Err(EncodingError::Qr(_))));

        let at_limit = QrEncoder::default()
            .with_module_px(MAX_MODULE_PX)
            .with_quiet_zone(MAX_QUIET_ZONE)
            .encode("A")
            .unwrap();
        assert_eq!(at_limit.width, (21 + 2 * MAX_QUIET_ZONE) * MAX_MODULE_PX);
    }

    #[test]
    fn test_raster_dimensions_detect_overflow() {
        assert_eq!(raster_dimensions(21, 4, 4), Some((116, 16, 116 * 116)));
        assert_eq!(raster_dimensions(usize::MAX, 2, 0), None);
        assert_eq!(raster_dimensions(21, usize::MAX, 1), None);
    }

    #[test]
    fn test_oversized_payload_is_an_encoding_error() {
        let data = "x".repeat(8000);
        let err = QrEncoder::new(ErrorCorrection::H).encode(&data).unwrap_err();
        assert!(matches!(err, EncodingError::Qr(_)));
    }
}
