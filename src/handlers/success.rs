//! Post-contribution frame

use super::{browser_redirect, image_response, log_action, ImageQuery};
use crate::error::Result;
use crate::frame::{Frame, Intent};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, Method},
    response::{Html, IntoResponse, Response},
};
use yeet_core::branding::{copy::VIEW_PROJECT, project_url};
use yeet_core::views;

/// Frame page shown after a contribution
pub async fn success_page(
    State(state): State<AppState>,
    Path((dao_id, yeeter_id)): Path<(String, String)>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("/success/{}/{}", dao_id, yeeter_id);
    if let Some(redirect) = browser_redirect(&state, &method, &headers, &path) {
        return redirect;
    }
    log_action(&body);

    let config = &state.config;
    let static_image = config
        .assets_dir
        .join(config.success_image.trim_start_matches('/'));
    let image_url = if static_image.is_file() {
        config.asset_url(&config.success_image)
    } else {
        config.url(&format!("{}/image", path))
    };

    let frame = Frame::new(image_url)
        .with_post_url(config.url(&path))
        .with_intent(Intent::link(VIEW_PROJECT, project_url(&dao_id, &yeeter_id)));
    Html(frame.to_html()).into_response()
}

/// Rendered success image, used when no static asset is present
pub async fn success_image(
    State(state): State<AppState>,
    Path((_dao_id, _yeeter_id)): Path<(String, String)>,
    Query(query): Query<ImageQuery>,
) -> Result<Response> {
    image_response(&state, &views::success_view(), &query).await
}
