//! Text styling, measurement and line breaking
//!
//! Text properties cascade: every node starts from its parent's
//! [`TextStyle`] and overrides whatever its own style bag sets. Lines break
//! on Unicode word boundaries.

use crate::color::{parse_color, Color};
use crate::fonts::FontSet;
use fontdue::Font;
use frame_ui::Style;
use unicode_segmentation::UnicodeSegmentation;

/// Horizontal placement of lines inside a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Flush left
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
}

/// Case mapping applied before layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTransform {
    /// Text as written
    #[default]
    None,
    /// Upper case
    Uppercase,
    /// Lower case
    Lowercase,
    /// First letter of each word upper case
    Capitalize,
}

impl TextTransform {
    /// Apply the mapping
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::None => text.to_string(),
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
            TextTransform::Capitalize => text
                .split_word_bounds()
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect(),
        }
    }
}

/// Line wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    /// Greedy wrapping
    #[default]
    Wrap,
    /// Greedy wrapping at the narrowest width that keeps the line count
    Balance,
    /// Single line
    NoWrap,
}

/// Line height as written
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineHeight {
    /// Font line metrics
    #[default]
    Normal,
    /// Absolute pixels
    Px(f32),
    /// Multiple of the font size
    Multiple(f32),
}

/// Inherited text properties
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Fill color
    pub color: Color,
    /// Font size in pixels
    pub font_size: f32,
    /// CSS family list
    pub font_family: Option<String>,
    /// CSS weight
    pub font_weight: u16,
    /// Extra advance per character in pixels
    pub letter_spacing: f32,
    /// Line height
    pub line_height: LineHeight,
    /// Line alignment
    pub text_align: TextAlign,
    /// Case mapping
    pub text_transform: TextTransform,
    /// Wrapping mode
    pub wrap: TextWrap,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font_size: 16.0,
            font_family: None,
            font_weight: 400,
            letter_spacing: 0.0,
            line_height: LineHeight::Normal,
            text_align: TextAlign::Left,
            text_transform: TextTransform::None,
            wrap: TextWrap::Wrap,
        }
    }
}

impl TextStyle {
    /// This style with the text properties of `style` applied on top
    pub fn inherit(&self, style: &Style) -> TextStyle {
        let mut out = self.clone();

        if let Some(color) = style.get("color").and_then(parse_color) {
            out.color = color;
        }
        if let Some(size) = style.get("fontSize").and_then(parse_px) {
            out.font_size = size;
        }
        if let Some(family) = style.get("fontFamily") {
            out.font_family = Some(family.to_string());
        }
        if let Some(weight) = style.get("fontWeight").and_then(parse_weight) {
            out.font_weight = weight;
        }
        if let Some(spacing) = style.get("letterSpacing").and_then(parse_px) {
            out.letter_spacing = spacing;
        }
        if let Some(line_height) = style.get("lineHeight") {
            out.line_height = parse_line_height(line_height);
        }
        match style.get("textAlign") {
            Some("center") => out.text_align = TextAlign::Center,
            Some("right") | Some("end") => out.text_align = TextAlign::Right,
            Some("left") | Some("start") => out.text_align = TextAlign::Left,
            _ => {}
        }
        match style.get("textTransform") {
            Some("uppercase") => out.text_transform = TextTransform::Uppercase,
            Some("lowercase") => out.text_transform = TextTransform::Lowercase,
            Some("capitalize") => out.text_transform = TextTransform::Capitalize,
            Some("none") => out.text_transform = TextTransform::None,
            _ => {}
        }
        match style.get("textWrap") {
            Some("balance") => out.wrap = TextWrap::Balance,
            Some("nowrap") => out.wrap = TextWrap::NoWrap,
            Some("wrap") => out.wrap = TextWrap::Wrap,
            _ => {}
        }
        if style.get("whiteSpace") == Some("nowrap") {
            out.wrap = TextWrap::NoWrap;
        }

        out
    }

    /// Pick the face for this style
    pub fn font<'a>(&self, fonts: &'a FontSet) -> Option<&'a Font> {
        fonts.select(self.font_family.as_deref(), self.font_weight)
    }
}

/// `"32px"` or `"32"` to `32.0`
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_weight(value: &str) -> Option<u16> {
    match value.trim() {
        "normal" => Some(400),
        "bold" => Some(700),
        other => other.parse::<u16>().ok(),
    }
}

fn parse_line_height(value: &str) -> LineHeight {
    let value = value.trim();
    if value == "normal" {
        return LineHeight::Normal;
    }
    if let Some(px) = value.strip_suffix("px").and_then(|v| v.parse::<f32>().ok()) {
        return LineHeight::Px(px);
    }
    if let Some(pct) = value.strip_suffix('%').and_then(|v| v.parse::<f32>().ok()) {
        return LineHeight::Multiple(pct / 100.0);
    }
    value
        .parse::<f32>()
        .map(LineHeight::Multiple)
        .unwrap_or(LineHeight::Normal)
}

// =============================================================================
// Layout
// =============================================================================

/// One laid-out line
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Line content, trailing whitespace removed
    pub text: String,
    /// Advance width in pixels
    pub width: f32,
}

/// Text broken into lines
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Lines top to bottom
    pub lines: Vec<Line>,
    /// Widest line
    pub width: f32,
    /// Height of one line
    pub line_height: f32,
    /// Distance from the top of a line box to the baseline
    pub baseline: f32,
}

impl TextLayout {
    /// Total height of all lines
    pub fn height(&self) -> f32 {
        self.line_height * self.lines.len() as f32
    }
}

/// Advance width of a string
pub fn measure(font: &Font, text: &str, size: f32, letter_spacing: f32) -> f32 {
    let mut width = 0.0;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            width += font.horizontal_kern(p, ch, size).unwrap_or(0.0);
        }
        width += font.metrics(ch, size).advance_width + letter_spacing;
        prev = Some(ch);
    }
    width
}

fn line_box(font: &Font, style: &TextStyle) -> (f32, f32) {
    let size = style.font_size;
    let (ascent, descent, natural) = match font.horizontal_line_metrics(size) {
        Some(m) => (m.ascent, m.descent, m.new_line_size),
        None => (size * 0.8, -size * 0.2, size * 1.2),
    };
    let line_height = match style.line_height {
        LineHeight::Normal => natural,
        LineHeight::Px(px) => px,
        LineHeight::Multiple(m) => m * size,
    };
    // Center the glyph box inside the line box
    let glyphs = ascent - descent;
    let baseline = (line_height - glyphs) / 2.0 + ascent;
    (line_height, baseline)
}

/// Greedy word wrap at `max_width`
pub fn wrap_lines(
    font: &Font,
    text: &str,
    size: f32,
    letter_spacing: f32,
    max_width: Option<f32>,
) -> Vec<Line> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for segment in paragraph.split_word_bounds() {
            let is_space = segment.chars().all(char::is_whitespace);
            let segment_width = measure(font, segment, size, letter_spacing);

            let overflows = max_width
                .map(|max| current_width + segment_width > max + 0.01)
                .unwrap_or(false);

            if overflows && !is_space && !current.trim_end().is_empty() {
                let text = current.trim_end().to_string();
                let width = measure(font, &text, size, letter_spacing);
                lines.push(Line { text, width });
                current.clear();
                current_width = 0.0;
            }

            if is_space && current.is_empty() {
                continue;
            }
            current.push_str(segment);
            current_width += segment_width;
        }

        let text = current.trim_end().to_string();
        let width = measure(font, &text, size, letter_spacing);
        lines.push(Line { text, width });
    }

    lines
}

/// Lay out a text run inside `max_width`
pub fn layout_text(font: &Font, text: &str, style: &TextStyle, max_width: Option<f32>) -> TextLayout {
    let text = style.text_transform.apply(text);
    let size = style.font_size;
    let spacing = style.letter_spacing;

    let limit = match style.wrap {
        TextWrap::NoWrap => None,
        _ => max_width,
    };
    let mut lines = wrap_lines(font, &text, size, spacing, limit);

    if style.wrap == TextWrap::Balance && lines.len() > 1 {
        if let Some(max) = limit {
            lines = balance(font, &text, size, spacing, max, lines);
        }
    }

    let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
    let (line_height, baseline) = line_box(font, style);

    TextLayout {
        lines,
        width,
        line_height,
        baseline,
    }
}

/// Narrowest wrap width that keeps the greedy line count
fn balance(
    font: &Font,
    text: &str,
    size: f32,
    spacing: f32,
    max_width: f32,
    greedy: Vec<Line>,
) -> Vec<Line> {
    let target = greedy.len();
    let mut best = greedy;
    let mut low = max_width / target as f32;
    let mut high = max_width;

    for _ in 0..12 {
        if high - low < 0.5 {
            break;
        }
        let mid = (low + high) / 2.0;
        let attempt = wrap_lines(font, text, size, spacing, Some(mid));
        if attempt.len() <= target {
            best = attempt;
            high = mid;
        } else {
            low = mid;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_ui::Style;

    #[test]
    fn test_transform() {
        assert_eq!(TextTransform::Uppercase.apply("pre-sale"), "PRE-SALE");
        assert_eq!(TextTransform::Lowercase.apply("BANG"), "bang");
        assert_eq!(TextTransform::Capitalize.apply("speed ball"), "Speed Ball");
        assert_eq!(TextTransform::None.apply("As Is"), "As Is");
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("32px"), Some(32.0));
        assert_eq!(parse_px("-1px"), Some(-1.0));
        assert_eq!(parse_px("12"), Some(12.0));
        assert_eq!(parse_px("100%"), None);
        assert_eq!(parse_px("NaN"), None);
    }

    #[test]
    fn test_line_height_values() {
        assert_eq!(parse_line_height("normal"), LineHeight::Normal);
        assert_eq!(parse_line_height("24px"), LineHeight::Px(24.0));
        assert_eq!(parse_line_height("1.5"), LineHeight::Multiple(1.5));
        assert_eq!(parse_line_height("150%"), LineHeight::Multiple(1.5));
    }

    #[test]
    fn test_inherit_overrides_only_set_properties() {
        let parent = TextStyle::default().inherit(
            &Style::new()
                .with("color", "#E6F9F4")
                .with("fontSize", "48px")
                .with("textTransform", "uppercase")
                .with("textAlign", "center"),
        );
        let child = parent.inherit(
            &Style::new()
                .with("fontSize", "32px")
                .with("fontWeight", "700")
                .with("textWrap", "balance"),
        );

        assert_eq!(child.color, Color::rgb(0xe6, 0xf9, 0xf4));
        assert_eq!(child.font_size, 32.0);
        assert_eq!(child.font_weight, 700);
        assert_eq!(child.text_transform, TextTransform::Uppercase);
        assert_eq!(child.text_align, TextAlign::Center);
        assert_eq!(child.wrap, TextWrap::Balance);
        assert_eq!(parent.wrap, TextWrap::Wrap);
    }

    #[test]
    fn test_unparseable_color_keeps_parent() {
        let parent = TextStyle::default();
        let child = parent.inherit(&Style::new().with("color", "currentColor"));
        assert_eq!(child.color, Color::BLACK);
    }
}
