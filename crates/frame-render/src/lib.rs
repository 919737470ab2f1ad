//! PNG rendering of compiled frame nodes
//!
//! Takes the [`frame_ui::Node`] tree produced by the UI layer and turns it
//! into a PNG:
//!
//! 1. [`layout::compute`] maps every style bag onto taffy flexbox styles and
//!    measures text runs with fontdue
//! 2. [`paint::paint`] fills backgrounds, draws per-side borders and
//!    rasterises glyphs onto an RGBA canvas
//! 3. [`paint::encode_png`] encodes the canvas
//!
//! Rendering never needs the network; fonts are loaded up front into a
//! [`FontSet`]. With an empty set, text is skipped and only boxes are drawn.
//!
//! # Example
//!
//! ```rust
//! use frame_render::{render_png, FontSet, RenderOptions};
//! use frame_ui::components::{rows, row};
//! use frame_ui::vars::{get_vars, ThemeName};
//!
//! let vars = get_vars(ThemeName::Speedball);
//! let tree = rows().grow().child(row().background_color("teal"));
//! let node = frame_ui::render(&tree, &vars).unwrap();
//!
//! let png = render_png(&node, &FontSet::new(), &RenderOptions::new(120, 63)).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod fonts;
pub mod layout;
pub mod paint;
pub mod text;

use std::path::PathBuf;
use thiserror::Error;

pub use color::{parse_color, Color};
pub use fonts::{fetch_google_font, FontSet};
pub use text::TextStyle;

/// Rendering errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Font could not be loaded or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Layout engine failure
    #[error("Layout error: {0}")]
    Layout(String),

    /// PNG encoding failure
    #[error("Encode error: {0}")]
    Encode(String),

    /// Zero or oversized canvas
    #[error("Invalid image size: {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Result type for rendering
pub type Result<T> = std::result::Result<T, RenderError>;

const MAX_DIMENSION: u32 = 4096;

/// Canvas settings for one render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Canvas fill before painting
    pub background: Color,
    /// Text color at the root
    pub color: Color,
    /// Directory local image sources resolve against
    pub assets_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(1200, 630)
    }
}

impl RenderOptions {
    /// Black canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            color: Color::WHITE,
            assets_dir: None,
        }
    }

    /// Set the canvas fill
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the root text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Resolve `img` sources against a directory
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }
}

/// Render a node tree to an RGBA image
pub fn render_image(
    node: &frame_ui::Node,
    fonts: &FontSet,
    options: &RenderOptions,
) -> Result<image::RgbaImage> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RenderError::InvalidSize { width, height });
    }
    if fonts.is_empty() {
        tracing::warn!("no fonts loaded, rendering without text");
    }

    let base = TextStyle {
        color: options.color,
        ..TextStyle::default()
    };
    let laid_out = layout::compute(node, fonts, width as f32, height as f32, &base)?;

    let mut canvas = paint::Canvas::new(width, height, options.background);
    let ctx = paint::PaintContext {
        fonts,
        assets_dir: options.assets_dir.as_deref(),
    };
    paint::paint(&mut canvas, &laid_out, &base, &ctx);

    Ok(canvas.into_image())
}

/// Render a node tree to PNG bytes
pub fn render_png(node: &frame_ui::Node, fonts: &FontSet, options: &RenderOptions) -> Result<Vec<u8>> {
    let image = render_image(node, fonts, options)?;
    let png = paint::encode_png(&image)?;
    tracing::debug!(
        width = options.width,
        height = options.height,
        bytes = png.len(),
        "frame image rendered"
    );
    Ok(png)
}
