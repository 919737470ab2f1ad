//! Rasterisation of a laid-out tree

use crate::color::{parse_color, Color};
use crate::fonts::FontSet;
use crate::layout::{BoxContent, LayoutBox};
use crate::text::{parse_px, TextAlign, TextLayout, TextStyle};
use crate::{RenderError, Result};
use fontdue::Font;
use frame_ui::Style;
use image::{imageops, RgbaImage};
use std::path::Path;

/// Pixel canvas with source-over blending
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background.into()),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width() && y < self.height()).then(|| Color::from(*self.image.get_pixel(x, y)))
    }

    /// Blend one pixel; out-of-bounds writes are dropped
    pub fn blend(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        *px = color.over(Color::from(*px)).into();
    }

    /// Fill a rectangle, snapping edges to whole pixels
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if color.is_invisible() || width <= 0.0 || height <= 0.0 {
            return;
        }
        let x0 = x.round().max(0.0) as i32;
        let y0 = y.round().max(0.0) as i32;
        let x1 = ((x + width).round() as i32).min(self.width() as i32);
        let y1 = ((y + height).round() as i32).min(self.height() as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    /// Draw an image scaled into a rectangle
    pub fn draw_image(&mut self, src: &RgbaImage, x: f32, y: f32, width: f32, height: f32) {
        let (w, h) = (width.round() as u32, height.round() as u32);
        if w == 0 || h == 0 {
            return;
        }
        let scaled = imageops::resize(src, w, h, imageops::FilterType::Triangle);
        let (ox, oy) = (x.round() as i32, y.round() as i32);
        for (px, py, pixel) in scaled.enumerate_pixels() {
            self.blend(ox + px as i32, oy + py as i32, Color::from(*pixel));
        }
    }

    /// Consume into the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

// =============================================================================
// Boxes
// =============================================================================

fn side_color(style: &Style, side: &str, fallback: Color) -> Color {
    style
        .get(&format!("border{}Color", side))
        .or_else(|| style.get("borderColor"))
        .and_then(parse_color)
        .unwrap_or(fallback)
}

fn side_width(style: &Style, side: &str) -> f32 {
    style
        .get(&format!("border{}Width", side))
        .or_else(|| style.get("borderWidth"))
        .and_then(parse_px)
        .unwrap_or(0.0)
        .max(0.0)
}

fn paint_borders(canvas: &mut Canvas, b: &LayoutBox, style: &Style, current: Color) {
    let top = side_width(style, "Top");
    let right = side_width(style, "Right");
    let bottom = side_width(style, "Bottom");
    let left = side_width(style, "Left");

    canvas.fill_rect(b.x, b.y, b.width, top, side_color(style, "Top", current));
    canvas.fill_rect(
        b.x,
        b.y + b.height - bottom,
        b.width,
        bottom,
        side_color(style, "Bottom", current),
    );
    canvas.fill_rect(b.x, b.y, left, b.height, side_color(style, "Left", current));
    canvas.fill_rect(
        b.x + b.width - right,
        b.y,
        right,
        b.height,
        side_color(style, "Right", current),
    );
}

/// Options for one paint pass
pub struct PaintContext<'a> {
    /// Loaded faces
    pub fonts: &'a FontSet,
    /// Directory local `img` sources are read from
    pub assets_dir: Option<&'a Path>,
}

fn load_local_image(src: &str, assets_dir: Option<&Path>) -> Option<RgbaImage> {
    let dir = assets_dir?;
    let relative = src.trim_start_matches('/');
    if relative.contains("..") || src.contains("://") {
        return None;
    }
    match image::open(dir.join(relative)) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            tracing::debug!(src, error = %e, "image source not loaded");
            None
        }
    }
}

/// Paint a box and its descendants
pub fn paint(canvas: &mut Canvas, b: &LayoutBox, inherited: &TextStyle, ctx: &PaintContext<'_>) {
    match &b.content {
        BoxContent::Element { style, src } => {
            let text_style = inherited.inherit(style);

            if let Some(bg) = style.get("backgroundColor").and_then(parse_color) {
                canvas.fill_rect(b.x, b.y, b.width, b.height, bg);
            }
            if style.contains("backgroundImage") {
                tracing::trace!("background images are not rasterised");
            }
            if let Some(src) = src {
                if let Some(img) = load_local_image(src, ctx.assets_dir) {
                    canvas.draw_image(&img, b.x, b.y, b.width, b.height);
                }
            }
            paint_borders(canvas, b, style, text_style.color);

            for child in &b.children {
                paint(canvas, child, &text_style, ctx);
            }
        }
        BoxContent::Text { layout, style } => {
            if let Some(font) = style.font(ctx.fonts) {
                paint_text(canvas, font, b, layout, style);
            }
        }
    }
}

fn paint_text(canvas: &mut Canvas, font: &Font, b: &LayoutBox, layout: &TextLayout, style: &TextStyle) {
    let size = style.font_size;
    for (i, line) in layout.lines.iter().enumerate() {
        let offset = match style.text_align {
            TextAlign::Left => 0.0,
            TextAlign::Center => (b.width - line.width) / 2.0,
            TextAlign::Right => b.width - line.width,
        };
        let baseline = b.y + layout.line_height * i as f32 + layout.baseline;
        let mut pen = b.x + offset;
        let mut prev: Option<char> = None;

        for ch in line.text.chars() {
            if let Some(p) = prev {
                pen += font.horizontal_kern(p, ch, size).unwrap_or(0.0);
            }
            let (metrics, coverage) = font.rasterize(ch, size);
            let gx = (pen + metrics.xmin as f32).round() as i32;
            let gy = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha > 0 {
                        canvas.blend(gx + col as i32, gy + row as i32, style.color.with_coverage(alpha));
                    }
                }
            }

            pen += metrics.advance_width + style.letter_spacing;
            prev = Some(ch);
        }
    }
}

/// Encode a canvas as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BoxContent;

    fn element(x: f32, y: f32, w: f32, h: f32, style: Style) -> LayoutBox {
        LayoutBox {
            x,
            y,
            width: w,
            height: h,
            content: BoxContent::Element { style, src: None },
            children: Vec::new(),
        }
    }

    fn ctx(fonts: &FontSet) -> PaintContext<'_> {
        PaintContext {
            fonts,
            assets_dir: None,
        }
    }

    #[test]
    fn test_background_fill() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        let b = element(2.0, 2.0, 4.0, 4.0, Style::new().with("backgroundColor", "#000000"));
        paint(&mut canvas, &b, &TextStyle::default(), &ctx(&FontSet::new()));

        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(6, 6), Some(Color::WHITE));
    }

    #[test]
    fn test_per_side_borders() {
        let mut canvas = Canvas::new(20, 20, Color::BLACK);
        let b = element(
            0.0,
            0.0,
            20.0,
            20.0,
            Style::new()
                .with("borderTopWidth", "4px")
                .with("borderTopColor", "#ffffff")
                .with("borderLeftWidth", "4px")
                .with("borderLeftColor", "#ff0000"),
        );
        paint(&mut canvas, &b, &TextStyle::default(), &ctx(&FontSet::new()));

        assert_eq!(canvas.pixel(10, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(1, 10), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(10, 18), Some(Color::BLACK));
        assert_eq!(canvas.pixel(18, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_border_defaults_to_current_color() {
        let mut canvas = Canvas::new(10, 10, Color::BLACK);
        let b = element(
            0.0,
            0.0,
            10.0,
            10.0,
            Style::new().with("color", "#00ff00").with("borderBottomWidth", "2px"),
        );
        paint(&mut canvas, &b, &TextStyle::default(), &ctx(&FontSet::new()));
        assert_eq!(canvas.pixel(5, 9), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_half_transparent_fill_blends() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, Color::new(255, 255, 255, 128));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(128, 128, 128)));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.fill_rect(-10.0, -10.0, 100.0, 100.0, Color::WHITE);
        canvas.blend(99, 99, Color::WHITE);
        assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 4), None);
    }

    #[test]
    fn test_encode_png_signature() {
        let canvas = Canvas::new(8, 8, Color::BLACK);
        let bytes = encode_png(&canvas.into_image()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
