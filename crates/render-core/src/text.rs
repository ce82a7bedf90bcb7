//! Text encoding and measurement for the standard Helvetica fonts.
//!
//! Badge text is drawn with the non-embedded Type1 Helvetica faces using
//! WinAnsiEncoding, so every string is transcoded to Windows-1252 before it
//! is written to a content stream. Characters outside that code page are
//! replaced with `?`.

use badge_types::{FontFace, TextStyle};

/// Byte substituted for characters WinAnsiEncoding cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Maps a character to its Windows-1252 code, if it has one.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Transcodes a string to WinAnsiEncoding bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_byte(ch).unwrap_or(REPLACEMENT_BYTE))
        .collect()
}

// Advance widths in 1/1000 em for codes 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;

fn ascii_width(face: FontFace, byte: u8) -> u16 {
    let table = match face {
        FontFace::Regular => &HELVETICA_WIDTHS,
        FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    table
        .get(usize::from(byte.wrapping_sub(0x20)))
        .copied()
        .unwrap_or(DEFAULT_WIDTH)
}

/// Advance width of one WinAnsi code, in 1/1000 em.
///
/// Accented Latin letters share the advance of their base letter.
pub fn glyph_width(face: FontFace, byte: u8) -> u16 {
    let bold = face == FontFace::Bold;
    match byte {
        0x20..=0x7E => ascii_width(face, byte),
        0xA0 => 278,
        0xC0..=0xC5 => ascii_width(face, b'A'),
        0xC7 => ascii_width(face, b'C'),
        0xC8..=0xCB => ascii_width(face, b'E'),
        0xCC..=0xCF => ascii_width(face, b'I'),
        0xD1 => ascii_width(face, b'N'),
        0xD2..=0xD6 | 0xD8 => ascii_width(face, b'O'),
        0xD9..=0xDC => ascii_width(face, b'U'),
        0xE0..=0xE5 => ascii_width(face, b'a'),
        0xE7 => ascii_width(face, b'c'),
        0xE8..=0xEB => ascii_width(face, b'e'),
        0xEC..=0xEF => ascii_width(face, b'i'),
        0xF1 => ascii_width(face, b'n'),
        0xF2..=0xF6 | 0xF8 => ascii_width(face, b'o'),
        0xF9..=0xFC => ascii_width(face, b'u'),
        0xFD | 0xFF => ascii_width(face, b'y'),
        0x91 | 0x92 if bold => 278,
        0x91 | 0x92 => 222,
        0x93 | 0x94 if bold => 500,
        0x93 | 0x94 => 333,
        0x85 | 0x97 | 0x8C => 1000,
        0x9C => 944,
        0xB0 => 400,
        _ => DEFAULT_WIDTH,
    }
}

/// Measures the advance width of `text` in points when set in `style`.
pub fn text_width(text: &str, style: &TextStyle) -> f32 {
    let units: u32 = encode_win_ansi(text)
        .into_iter()
        .map(|b| u32::from(glyph_width(style.font, b)))
        .sum();
    units as f32 * style.size / 1000.0
}

/// Largest font size, stepping down by half a point from `style.size`, at
/// which `text` fits in `max_width`. Never goes below `min_size`.
pub fn fit_font_size(text: &str, style: &TextStyle, max_width: f32, min_size: f32) -> f32 {
    let mut candidate = *style;
    while candidate.size > min_size && text_width(text, &candidate) > max_width {
        candidate.size = (candidate.size - 0.5).max(min_size);
    }
    candidate.size
}

/// Appended to text cut short by [`truncate_to_width`].
pub const ELLIPSIS: char = '…';

/// Cuts `text` short with a trailing [`ELLIPSIS`] so that it fits in
/// `max_width`. Text that already fits is returned unchanged.
pub fn truncate_to_width(text: &str, style: &TextStyle, max_width: f32) -> String {
    if text_width(text, style) <= max_width {
        return text.to_string();
    }

    let advance = |ch: char| {
        u32::from(glyph_width(
            style.font,
            win_ansi_byte(ch).unwrap_or(REPLACEMENT_BYTE),
        ))
    };
    let budget = max_width * 1000.0 / style.size;
    let mut units = advance(ELLIPSIS);
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let next = units + advance(ch);
        if next as f32 > budget {
            break;
        }
        units = next;
        end = idx + ch.len_utf8();
    }
    format!("{}{}", text[..end].trim_end(), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge_types::Color;

    #[test]
    fn test_encode_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Nom : Jean"), b"Nom : Jean".to_vec());
    }

    #[test]
    fn test_encode_french_punctuation() {
        assert_eq!(encode_win_ansi("d’Optique"), b"d\x92Optique".to_vec());
        assert_eq!(encode_win_ansi("10 – 12"), b"10 \x96 12".to_vec());
        assert_eq!(encode_win_ansi("Congrès"), b"Congr\xe8s".to_vec());
        assert_eq!(encode_win_ansi("À plier"), b"\xc0 plier".to_vec());
        assert_eq!(encode_win_ansi("œuvre €"), b"\x9cuvre \x80".to_vec());
    }

    #[test]
    fn test_encode_replaces_unmappable() {
        assert_eq!(encode_win_ansi("Ω→日"), b"???".to_vec());
        assert_eq!(encode_win_ansi("a\nb"), b"a?b".to_vec());
    }

    #[test]
    fn test_text_width_uses_face_metrics() {
        let regular = TextStyle::regular(10.0, Color::BLACK);
        let bold = TextStyle::bold(10.0, Color::BLACK);

        // i = 222 regular, 278 bold
        assert!((text_width("i", &regular) - 2.22).abs() < 1e-4);
        assert!((text_width("i", &bold) - 2.78).abs() < 1e-4);
        assert_eq!(text_width("", &regular), 0.0);
    }

    #[test]
    fn test_accented_letters_share_base_width() {
        let style = TextStyle::bold(12.0, Color::BLACK);
        assert_eq!(text_width("é", &style), text_width("e", &style));
        assert_eq!(text_width("À", &style), text_width("A", &style));
    }

    #[test]
    fn test_fit_font_size_shrinks_until_it_fits() {
        let style = TextStyle::bold(12.0, Color::BLACK);
        let text = "Email : a.very.long.address@some-faraway-domain.example";
        let size = fit_font_size(text, &style, 250.0, 6.0);

        assert!(size < 12.0);
        assert!(size >= 6.0);
        assert!(text_width(text, &TextStyle { size, ..style }) <= 250.0);
    }

    #[test]
    fn test_truncate_to_width_keeps_fitting_text() {
        let style = TextStyle::bold(12.0, Color::BLACK);
        assert_eq!(truncate_to_width("Ville : Casablanca", &style, 250.0), "Ville : Casablanca");
    }

    #[test]
    fn test_truncate_to_width_adds_ellipsis() {
        let style = TextStyle::bold(6.0, Color::BLACK);
        let text = format!("Email : {}@example.com", "x".repeat(300));
        let cut = truncate_to_width(&text, &style, 257.5);

        assert!(cut.starts_with("Email : xxx"));
        assert!(cut.ends_with(ELLIPSIS));
        assert!(cut.chars().count() < text.chars().count());
        assert!(text_width(&cut, &style) <= 257.5 + 1e-3);
        assert_eq!(encode_win_ansi(&cut).last(), Some(&0x85));
    }

    #[test]
    fn test_fit_font_size_respects_minimum() {
        let style = TextStyle::regular(12.0, Color::BLACK);
        assert_eq!(fit_font_size(&"W".repeat(500), &style, 10.0, 6.0), 6.0);
        assert_eq!(fit_font_size("ok", &style, 100.0, 6.0), 12.0);
    }
}
