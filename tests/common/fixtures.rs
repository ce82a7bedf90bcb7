use cnol_badge::{BadgeRequest, InMemoryAssetProvider};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

pub const LOGO: &str = "logo-cnol.png";
pub const POSTER: &str = "cnol2025-poster.jpg";

/// A 400x150 logo with a transparent margin
pub fn logo_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(400, 150, |x, y| {
        if x < 10 || y < 10 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([0, 82, 147, 255])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// A portrait A4 poster at 150 dpi
pub fn poster_jpeg() -> Vec<u8> {
    let img = RgbImage::from_fn(1240, 1754, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 120]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
    buf.into_inner()
}

pub fn asset_provider() -> InMemoryAssetProvider {
    InMemoryAssetProvider::new()
        .with_asset(LOGO, logo_png())
        .unwrap()
        .with_asset(POSTER, poster_jpeg())
        .unwrap()
}

pub fn jean_barnard() -> BadgeRequest {
    BadgeRequest {
        name: Some("Jean Barnard".to_string()),
        role: Some("Opticien diplômé".to_string()),
        city: Some("Casablanca".to_string()),
        email: Some("jean.barnard@example.com".to_string()),
        identifier: Some("cnol2025-jbarnard".to_string()),
    }
}
