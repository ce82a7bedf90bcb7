//! The CNOL 2025 badge.

use super::*;
use badge_types::{Color, FontFace};

const INK: Color = Color::rgb(0x1a, 0x1a, 0x1a);
const MUTED: Color = Color::rgb(0x33, 0x33, 0x33);
const FOLD: Color = Color::rgb(0xcc, 0xcc, 0xcc);

fn notice(heading: &str, lines: &[&str]) -> NoticeSection {
    NoticeSection {
        heading: heading.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: Size::new(595.0, 842.0),
            fold_lines: FoldLines {
                horizontal_y: 421.0,
                vertical_x: 297.5,
                stroke: Stroke::new(0.5, FOLD),
            },
            logo: ImagePlacement {
                position: Point::new(20.0, 750.0),
                scale: 0.2,
                max_size: Size::new(257.5, 82.0),
            },
            title: TextPlacement {
                position: Point::new(20.0, 740.0),
                style: TextStyle::bold(14.0, INK),
            },
            venue: TextPlacement {
                position: Point::new(20.0, 720.0),
                style: TextStyle::bold(10.0, MUTED),
            },
            poster: ImagePlacement {
                position: Point::new(307.5, 431.0),
                scale: 0.21,
                max_size: Size::new(280.0, 400.0),
            },
            identity: IdentityLayout {
                origin: Point::new(20.0, 380.0),
                line_spacing: 20.0,
                name_style: TextStyle::bold(14.0, Color::BLACK),
                field_style: TextStyle::bold(12.0, Color::BLACK),
                max_width: 257.5,
                min_font_size: 6.0,
            },
            qr: QrLayout {
                position: Point::new(20.0, 200.0),
                size: 100.0,
                module_px: 4,
                quiet_zone: 4,
                error_correction: ErrorCorrection::M,
            },
            notices: NoticeLayout {
                origin: Point::new(310.0, 390.0),
                line_height: 11.0,
                heading_gap: 14.0,
                section_gap: 6.0,
                min_y: 20.0,
                heading_style: TextStyle::new(FontFace::Bold, 10.0, Color::BLACK),
                line_style: TextStyle::regular(8.0, MUTED),
            },
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            document_title: "Badge CNOL 2025".to_string(),
            title: "Congrès National d’Optique Lunetterie".to_string(),
            venue: "10 – 12 octobre 2025, Rabat – Fondation Mohammed VI".to_string(),
            labels: FieldLabels {
                name: "Nom".to_string(),
                role: "Fonction".to_string(),
                city: "Ville".to_string(),
                email: "Email".to_string(),
            },
            label_separator: " : ".to_string(),
            notices: vec![
                notice(
                    "Conditions d’utilisation",
                    &[
                        "Ce badge est personnel et non transférable.",
                        "Toute reproduction est interdite.",
                        "Il est obligatoire pour accéder à l'espace exposition et",
                        "aux conférences générales.",
                        "Ce badge ne donne pas accès aux ateliers ni aux masterclass.",
                        "La participation à l'événement vaut autorisation de captation",
                        "photo et vidéo pour la communication du CNOL.",
                    ],
                ),
                notice(
                    "Conseils d’utilisation",
                    &[
                        "À plier en quatre selon les lignes indiquées.",
                        "À conserver visible sur vous pendant l’événement.",
                        "Présentez-le à l’entrée et aux contrôles.",
                    ],
                ),
            ],
        }
    }
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            logo: "logo-cnol.png".to_string(),
            poster: "cnol2025-poster.jpg".to_string(),
        }
    }
}

impl Default for BadgeTemplate {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            content: ContentConfig::default(),
            assets: AssetNames::default(),
        }
    }
}
