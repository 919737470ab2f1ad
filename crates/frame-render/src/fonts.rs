//! Font loading and selection
//!
//! Fonts are loaded once at startup and shared read-only by every render.
//! A [`FontSet`] holds any number of faces keyed by family and weight;
//! [`FontSet::select`] picks the face closest to what a text run asks for.

use crate::{RenderError, Result};
use fontdue::{Font, FontSettings};
use regex::Regex;
use std::path::Path;

/// One loaded font face
#[derive(Clone)]
pub struct LoadedFont {
    /// Family name, e.g. `Jersey 15`
    pub family: String,
    /// CSS weight, e.g. `400`
    pub weight: u16,
    /// Parsed face
    pub font: Font,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Faces available to the renderer
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    faces: Vec<LoadedFont>,
}

impl FontSet {
    /// Empty set; text is skipped when rendering with it
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TTF/OTF face and add it
    pub fn add_bytes(&mut self, family: &str, weight: u16, data: &[u8]) -> Result<()> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| RenderError::Font(format!("{}: {}", family, e)))?;
        tracing::debug!(family, weight, "font face loaded");
        self.faces.push(LoadedFont {
            family: family.to_string(),
            weight,
            font,
        });
        Ok(())
    }

    /// Read a face from disk and add it
    pub fn add_file(&mut self, family: &str, weight: u16, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))?;
        self.add_bytes(family, weight, &data)
    }

    /// Builder form of [`FontSet::add_bytes`]
    pub fn with_bytes(mut self, family: &str, weight: u16, data: &[u8]) -> Result<Self> {
        self.add_bytes(family, weight, data)?;
        Ok(self)
    }

    /// Whether no faces are loaded
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Closest face for a family list and weight
    ///
    /// Families are tried in order; if none match, every face is a
    /// candidate. Among candidates the nearest weight wins, heavier on ties.
    pub fn select(&self, families: Option<&str>, weight: u16) -> Option<&Font> {
        let wanted: Vec<String> = families
            .map(|list| {
                list.split(',')
                    .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_lowercase())
                    .filter(|f| !f.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let by_family = wanted.iter().find_map(|family| {
            let faces: Vec<&LoadedFont> = self
                .faces
                .iter()
                .filter(|face| face.family.to_lowercase() == *family)
                .collect();
            (!faces.is_empty()).then_some(faces)
        });
        let candidates = by_family.unwrap_or_else(|| self.faces.iter().collect());

        candidates
            .into_iter()
            .min_by_key(|face| {
                let distance = (i32::from(face.weight) - i32::from(weight)).abs();
                // Heavier face first on equal distance
                (distance, -i32::from(face.weight))
            })
            .map(|face| &face.font)
    }
}

// =============================================================================
// Google Fonts
// =============================================================================

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Fetch a TTF face from the Google Fonts CSS API
///
/// The CSS API serves TrueType to clients that send no browser user agent,
/// so the stylesheet carries a plain `src: url(...) format('truetype')`.
pub async fn fetch_google_font(
    client: &reqwest::Client,
    family: &str,
    weight: u16,
) -> Result<Vec<u8>> {
    fetch_css_font(client, GOOGLE_FONTS_CSS, family, weight).await
}

/// Fetch a face through a Google Fonts compatible CSS endpoint
pub async fn fetch_css_font(
    client: &reqwest::Client,
    css_endpoint: &str,
    family: &str,
    weight: u16,
) -> Result<Vec<u8>> {
    let url = format!(
        "{}?family={}:wght@{}",
        css_endpoint,
        urlencoding::encode(family).replace("%20", "+"),
        weight
    );
    tracing::debug!(url = %url, "fetching font stylesheet");

    let css = client
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| RenderError::Font(e.to_string()))?
        .text()
        .await
        .map_err(|e| RenderError::Font(e.to_string()))?;

    let font_url = font_url_from_css(&css)
        .ok_or_else(|| RenderError::Font(format!("no TTF source for {}", family)))?;

    let bytes = client
        .get(&font_url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| RenderError::Font(e.to_string()))?
        .bytes()
        .await
        .map_err(|e| RenderError::Font(e.to_string()))?;

    Ok(bytes.to_vec())
}

/// First TrueType/OpenType source URL in a font stylesheet
pub fn font_url_from_css(css: &str) -> Option<String> {
    let re = Regex::new(r"src: url\((.+?)\) format\('(opentype|truetype)'\)").ok()?;
    re.captures(css)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
