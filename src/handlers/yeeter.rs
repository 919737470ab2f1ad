//! Campaign frame

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
use yeet_core::branding::copy::BANG_IT;
use yeet_core::{load_presale, now_seconds, views, Presale};

/// Frame page for a campaign
pub async fn frame_page(
    State(state): State<AppState>,
    Path(yeeter_id): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("/yeeter/{}", yeeter_id);
    if let Some(redirect) = browser_redirect(&state, &method, &headers, &path) {
        return redirect;
    }
    log_action(&body);

    let presale = load_presale(state.source.as_ref(), &yeeter_id, now_seconds()).await;
    Html(presale_frame(&state, &yeeter_id, &presale).to_html()).into_response()
}

/// Frame image for a campaign
pub async fn frame_image(
    State(state): State<AppState>,
    Path(yeeter_id): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Result<Response> {
    let presale = load_presale(state.source.as_ref(), &yeeter_id, now_seconds()).await;
    image_response(&state, &views::presale_element(&presale), &query).await
}

fn presale_frame(state: &AppState, yeeter_id: &str, presale: &Presale) -> Frame {
    let config = &state.config;
    let frame = Frame::new(config.url(&format!("/yeeter/{}/image", yeeter_id)));

    match presale.active() {
        Some(active) => frame
            .with_post_url(config.url(&format!(
                "/success/{}/{}",
                active.dao_id, active.yeeter_id
            )))
            .with_intent(Intent::transaction(
                BANG_IT,
                config.url(&format!(
                    "/yeet/{}/{}",
                    active.yeeter_id, active.min_tribute_wei
                )),
            )),
        None => frame.with_post_url(config.url(&format!("/yeeter/{}", yeeter_id))),
    }
}
