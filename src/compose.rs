//! Maps a template and a user record to a positioned [`Scene`].

use crate::UserRecord;
use crate::template::BadgeTemplate;
use badge_render_core::text::{fit_font_size, truncate_to_width};
use badge_render_core::{RasterImage, Scene};
use badge_types::{Point, Rect, TextStyle};

/// Resource name of the organization logo.
pub const LOGO_IMAGE: &str = "Logo";
/// Resource name of the promotional poster.
pub const POSTER_IMAGE: &str = "Poster";
/// Resource name of the identifier QR code.
pub const QR_IMAGE: &str = "Qr";

/// The decoded images a badge is composed from.
#[derive(Debug, Clone)]
pub struct BadgeAssets {
    pub logo: RasterImage,
    pub poster: RasterImage,
    pub qr: RasterImage,
}

/// Lays out one badge. Paint order is images, then text, then fold lines.
pub fn compose_scene(template: &BadgeTemplate, record: &UserRecord, assets: BadgeAssets) -> Scene {
    let layout = &template.layout;
    let content = &template.content;
    let mut scene = Scene::new(layout.page)
        .with_title(format!("{} - {}", content.document_title, record.name()));

    let logo_size = layout.logo.fitted_size(assets.logo.native_size());
    scene.add_image(LOGO_IMAGE, assets.logo);
    scene.draw_image(LOGO_IMAGE, Rect::from_origin(layout.logo.position, logo_size));

    let poster_size = layout.poster.fitted_size(assets.poster.native_size());
    scene.add_image(POSTER_IMAGE, assets.poster);
    scene.draw_image(
        POSTER_IMAGE,
        Rect::from_origin(layout.poster.position, poster_size),
    );

    scene.add_image(QR_IMAGE, assets.qr);
    scene.draw_image(
        QR_IMAGE,
        Rect::new(layout.qr.position.x, layout.qr.position.y, layout.qr.size, layout.qr.size),
    );

    scene.draw_text(&content.title, layout.title.position, layout.title.style);
    scene.draw_text(&content.venue, layout.venue.position, layout.venue.style);

    let identity = &layout.identity;
    let labels = &content.labels;
    let fields = [
        (&labels.name, record.name(), identity.name_style),
        (&labels.role, record.role(), identity.field_style),
        (&labels.city, record.city(), identity.field_style),
        (&labels.email, record.email(), identity.field_style),
    ];
    for (i, (label, value, style)) in fields.into_iter().enumerate() {
        let text = format!("{}{}{}", label, content.label_separator, value);
        let size = fit_font_size(&text, &style, identity.max_width, identity.min_font_size);
        if size < style.size {
            log::debug!("Shrinking '{}' line to {}pt", label, size);
        }
        let style = TextStyle { size, ..style };
        let fitted = truncate_to_width(&text, &style, identity.max_width);
        if fitted != text {
            log::warn!(
                "Truncating '{}' line for '{}' at {}pt",
                label,
                record.identifier(),
                size
            );
        }
        let origin = Point::new(
            identity.origin.x,
            identity.origin.y - identity.line_spacing * i as f32,
        );
        scene.draw_text(fitted, origin, style);
    }

    let notices = &layout.notices;
    for line in notices.flow(&content.notices) {
        scene.draw_text(
            line.text,
            Point::new(notices.origin.x, line.baseline),
            notices.style_for(&line),
        );
    }

    let folds = &layout.fold_lines;
    scene.draw_line(
        Point::new(0.0, folds.horizontal_y),
        Point::new(layout.page.width, folds.horizontal_y),
        folds.stroke,
    );
    scene.draw_line(
        Point::new(folds.vertical_x, 0.0),
        Point::new(folds.vertical_x, layout.page.height),
        folds.stroke,
    );

    scene
}
