//! Route handlers

pub mod success;
pub mod transaction;
pub mod yeeter;

use crate::error::{AppError, Result};
use crate::frame::parse_action;
use crate::state::AppState;
use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use frame_render::{parse_color, render_png, Color, RenderOptions};
use frame_ui::Element;
use serde::Deserialize;

pub async fn health_check() -> &'static str {
    "OK"
}

/// `?format=html` returns the compiled markup instead of a PNG
#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    pub format: Option<String>,
}

impl ImageQuery {
    fn wants_html(&self) -> bool {
        self.format.as_deref() == Some("html")
    }
}

/// Browsers get sent to the campaign site instead of the frame markup
pub(crate) fn browser_redirect(
    state: &AppState,
    method: &Method,
    headers: &HeaderMap,
    path: &str,
) -> Option<Response> {
    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/html"))
        .unwrap_or(false);
    if *method != Method::GET || !accepts_html {
        return None;
    }

    let location = state.config.browser_location.replace(":path", path);
    tracing::debug!(location = %location, "redirecting browser");
    Some((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Log the frame action carried by a POST, if any
pub(crate) fn log_action(body: &Bytes) {
    if let Some(action) = parse_action(body) {
        let data = &action.untrusted_data;
        tracing::info!(
            fid = data.fid,
            button = data.button_index,
            transaction = data.transaction_id.as_deref().unwrap_or("-"),
            "frame action"
        );
    }
}

pub(crate) fn render_options(state: &AppState) -> RenderOptions {
    let theme_color = |tokens: &[&str], fallback: Color| {
        tokens
            .iter()
            .find_map(|token| state.vars.color(token).and_then(parse_color))
            .unwrap_or(fallback)
    };

    RenderOptions::new(state.vars.frame.width, state.vars.frame.height)
        .with_background(theme_color(&["black", "death"], Color::BLACK))
        .with_color(theme_color(&["white", "angel"], Color::WHITE))
        .with_assets_dir(&state.config.assets_dir)
}

/// Compile an element and serve it as a PNG or as markup
pub(crate) async fn image_response(
    state: &AppState,
    element: &Element,
    query: &ImageQuery,
) -> Result<Response> {
    let node = frame_ui::render(element, &state.vars)?;
    if query.wants_html() {
        return Ok(Html(node.to_html()).into_response());
    }

    let fonts = state.fonts.clone();
    let options = render_options(state);
    let png = tokio::task::spawn_blocking(move || render_png(&node, &fonts, &options))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
