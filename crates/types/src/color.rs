use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color with 8-bit channels.
///
/// Deserializes from either a hex string (`"#RGB"` / `"#RRGGBB"`) or a map
/// `{ "r": .., "g": .., "b": .. }`; always serializes back to `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Channel intensities in the `0.0..=1.0` range used by PDF color operators.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = channel(&hex[0..1].repeat(2), "red")?;
                let g = channel(&hex[1..2].repeat(2), "green")?;
                let b = channel(&hex[2..3].repeat(2), "blue")?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = channel(&hex[0..2], "red")?;
                let g = channel(&hex[2..4], "green")?;
                let b = channel(&hex[4..6], "blue")?;
                Ok(Color { r, g, b })
            }
            n => Err(format!("Invalid hex color length: expected 3 or 6, got {}", n)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#ccc").unwrap(), Color::gray(204));
        assert_eq!(Color::parse_hex("#1a1a1a").unwrap(), Color::gray(26));
        assert_eq!(Color::parse_hex(" #FF8000 ").unwrap(), Color::rgb(255, 128, 0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::parse_hex("ccc").is_err());
        assert!(Color::parse_hex("#cccc").is_err());
        assert!(Color::parse_hex("#zzzzzz").is_err());
        assert!(Color::parse_hex("#é1").is_err());
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let from_str: Color = serde_json::from_str("\"#333333\"").unwrap();
        let from_map: Color = serde_json::from_str(r#"{"r": 51, "g": 51, "b": 51}"#).unwrap();
        assert_eq!(from_str, from_map);
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"#333333\"");
    }

    #[test]
    fn unit_rgb_spans_zero_to_one() {
        assert_eq!(Color::BLACK.to_unit_rgb(), [0.0, 0.0, 0.0]);
        assert_eq!(Color::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
    }
}
