use super::named;

/// Straight-alpha RGBA color in sRGB bytes.
///
/// Only two alpha levels occur in practice: `255` for colors parsed from a
/// document and `0` for [`Color::NONE`]. The raster sink treats any color with
/// `a == 0` as "paint nothing".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Absent paint (`fill="none"`, missing attribute, unknown name).
    pub const NONE: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// True if painting with this color changes nothing.
    #[inline]
    pub fn is_none(self) -> bool {
        self.a == 0
    }

    #[inline]
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses an SVG color attribute value.
    ///
    /// Accepts `#rgb`, `#rrggbb` and CSS color keywords (case-insensitive).
    /// Empty input, `none` and `transparent` yield [`Color::NONE`]; so does
    /// anything unrecognized, which is logged at `warn`.
    pub fn parse(src: &str) -> Color {
        let s = src.trim();
        if s.is_empty() {
            return Color::NONE;
        }
        if let Some(hex) = s.strip_prefix('#') {
            return match parse_hex(hex) {
                Some(c) => c,
                None => {
                    log::warn!("invalid hex color {src:?}, treating as none");
                    Color::NONE
                }
            };
        }
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "none" | "transparent" => Color::NONE,
            name => named::lookup(name).unwrap_or_else(|| {
                log::warn!("unknown color {src:?}, treating as none");
                Color::NONE
            }),
        }
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #abc == #aabbcc
            let nib = |i: usize| byte(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(Color::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
        _ => None,
    }
}
