//! Startup font loading

use crate::config::Config;
use frame_render::{fetch_google_font, FontSet};
use frame_ui::{FontSource, Vars};

/// Load the theme's default faces
///
/// With `FONT_PATH` set, that file is registered under every default face
/// name and weight. Otherwise Google-hosted faces are fetched. Failures are
/// logged; an empty set still renders boxes.
pub async fn load_fonts(config: &Config, vars: &Vars) -> FontSet {
    let mut fonts = FontSet::new();

    match &config.font_path {
        Some(path) => {
            for spec in vars.default_fonts() {
                if let Err(e) = fonts.add_file(&spec.name, spec.weight, path) {
                    tracing::warn!(error = %e, family = %spec.name, "failed to load font file");
                }
            }
        }
        None => {
            let client = reqwest::Client::new();
            for spec in vars.default_fonts() {
                if spec.source != FontSource::Google {
                    continue;
                }
                let loaded = match fetch_google_font(&client, &spec.name, spec.weight).await {
                    Ok(bytes) => fonts.add_bytes(&spec.name, spec.weight, &bytes),
                    Err(e) => Err(e),
                };
                if let Err(e) = loaded {
                    tracing::warn!(error = %e, family = %spec.name, weight = spec.weight, "failed to fetch font");
                }
            }
        }
    }

    if fonts.is_empty() {
        tracing::warn!("no fonts loaded, frame images will render without text");
    } else {
        tracing::info!(faces = fonts.len(), "fonts loaded");
    }
    fonts
}
