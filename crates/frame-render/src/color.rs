//! CSS color values

use image::Rgba;

/// RGBA color, straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Fully transparent
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with its alpha scaled by `coverage` (0-255)
    pub fn with_coverage(self, coverage: u8) -> Self {
        let a = (u16::from(self.a) * u16::from(coverage) / 255) as u8;
        Self { a, ..self }
    }

    /// Composite `self` over `dst`
    pub fn over(&self, dst: Color) -> Color {
        if self.a == 255 {
            return *self;
        }
        if self.a == 0 {
            return dst;
        }

        let src_a = u32::from(self.a);
        let dst_a = u32::from(dst.a);
        let inv = 255 - src_a;
        let out_a = src_a + dst_a * inv / 255;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }
        let dst_factor = dst_a * inv / 255;
        let mix = |s: u8, d: u8| {
            ((u32::from(s) * src_a + u32::from(d) * dst_factor) / out_a) as u8
        };

        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: out_a as u8,
        }
    }

    /// Whether painting this color changes nothing
    pub fn is_invisible(&self) -> bool {
        self.a == 0
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        Color::new(px[0], px[1], px[2], px[3])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// Parse a CSS color
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
/// `transparent`, `black` and `white`. Anything else is `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => return Some(Color::BLACK),
        "white" => return Some(Color::WHITE),
        _ => {}
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    parse_rgb_args(args)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args
        .split(|c| c == ',' || c == '/' || c == ' ')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |p: &str| -> Option<u8> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? * 2.55,
            None => p.parse::<f32>().ok()?,
        };
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = match parts.get(3) {
        Some(p) => {
            let v = match p.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => p.parse::<f32>().ok()?,
            };
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };

    Some(Color::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#000000"), Some(Color::BLACK));
        assert_eq!(parse_color("#E6F9F4"), Some(Color::rgb(0xe6, 0xf9, 0xf4)));
        assert_eq!(parse_color("#fff"), Some(Color::WHITE));
        assert_eq!(parse_color("#00000080"), Some(Color::new(0, 0, 0, 0x80)));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_functional_colors() {
        assert_eq!(
            parse_color("rgba(255,255,255,0.5)"),
            Some(Color::new(255, 255, 255, 128))
        );
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
        assert_eq!(parse_color("rgb(1 2 3 / 50%)"), Some(Color::new(1, 2, 3, 128)));
        assert_eq!(parse_color("rgb(1, 2)"), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_color("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(parse_color("currentColor"), None);
    }

    #[test]
    fn test_over() {
        let half_white = Color::new(255, 255, 255, 128);
        let out = half_white.over(Color::BLACK);
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 128);
        assert_eq!(Color::WHITE.over(Color::BLACK), Color::WHITE);
        assert_eq!(Color::TRANSPARENT.over(Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_coverage() {
        assert_eq!(Color::WHITE.with_coverage(0).a, 0);
        assert_eq!(Color::WHITE.with_coverage(255).a, 255);
        assert_eq!(Color::new(0, 0, 0, 128).with_coverage(128).a, 64);
    }
}
