//! Router assembly

use crate::handlers::{self, success, transaction, yeeter};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Frame routes, relative to the base path
fn frame_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/yeeter/:yeeterid",
            get(yeeter::frame_page).post(yeeter::frame_page),
        )
        .route("/yeeter/:yeeterid/image", get(yeeter::frame_image))
        .route(
            "/success/:daoid/:yeeterid",
            get(success::success_page).post(success::success_page),
        )
        .route("/success/:daoid/:yeeterid/image", get(success::success_image))
        .route(
            "/yeet/:yeeterid/:mintribute",
            post(transaction::yeet_transaction),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("max-age=0"),
        ))
}

/// Full application router
pub fn router(state: AppState) -> Router {
    let base_path = state.config.base_path.clone();
    let assets = ServeDir::new(&state.config.assets_dir);

    let app = Router::new().route("/health", get(handlers::health_check));
    let app = if base_path.is_empty() {
        app.merge(frame_routes())
    } else {
        app.nest(&base_path, frame_routes())
    };

    app.fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
