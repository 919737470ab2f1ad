//! End-to-end tests for the frame routes against mock subgraphs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use frame_render::FontSet;
use serde_json::{json, Value};
use speed_frame::{router, AppState, Config};
use std::path::PathBuf;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const YEETER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

struct Harness {
    yeeters: MockServer,
    daohaus: MockServer,
}

impl Harness {
    async fn start() -> Self {
        Self {
            yeeters: MockServer::start().await,
            daohaus: MockServer::start().await,
        }
    }

    fn config(&self) -> Config {
        Config {
            frame_origin: "http://frames.test".to_string(),
            graph_key: Some("test".to_string()),
            graph_endpoint: self.yeeters.uri(),
            dh_graph_endpoint: self.daohaus.uri(),
            assets_dir: PathBuf::from("tests/no-assets"),
            ..Config::default()
        }
    }

    fn app(&self) -> Router {
        self.app_with(self.config())
    }

    fn app_with(&self, config: Config) -> Router {
        router(AppState::from_config(config, FontSet::new()).unwrap())
    }

    async fn mount_yeeter(&self, start: &str, end: &str) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"yeeter": {
                    "id": YEETER,
                    "startTime": start,
                    "endTime": end,
                    "minTribute": "10000000000000000",
                    "multiplier": "1",
                    "goal": "5000000000000000000",
                    "balance": "0",
                    "dao": {"id": "0xdao", "shareTokenSymbol": "BALL"}
                }}
            })))
            .mount(&self.yeeters)
            .await;
    }

    async fn mount_missing_yeeter(&self) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"yeeter": null}})),
            )
            .mount(&self.yeeters)
            .await;
    }

    async fn mount_profile(&self) {
        Mock::given(method("POST"))
            .and(body_string_contains("daoProfile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"records": [
                    {"id": "p1", "content": "{\"name\":\"Speed Club\"}", "dao": {"name": "Speed Club"}}
                ]}
            })))
            .mount(&self.daohaus)
            .await;
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

#[tokio::test]
async fn test_health() {
    let harness = Harness::start().await;
    let (status, _, body) = send(harness.app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "OK");
}

#[tokio::test]
async fn test_missing_campaign_frame() {
    let harness = Harness::start().await;
    harness.mount_missing_yeeter().await;

    let uri = format!("/api/yeeter/{}", YEETER);
    let (status, headers, body) = send(harness.app(), get(&uri)).await;
    let html = text(&body);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "max-age=0");
    assert!(html.contains(r#"<meta property="fc:frame" content="vNext">"#));
    assert!(html.contains(&format!(
        r#"<meta property="fc:frame:image" content="http://frames.test/api/yeeter/{}/image">"#,
        YEETER
    )));
    assert!(html.contains(&format!(
        r#"<meta property="fc:frame:post_url" content="http://frames.test/api/yeeter/{}">"#,
        YEETER
    )));
    assert!(!html.contains("fc:frame:button:1"));
}

#[tokio::test]
async fn test_active_campaign_frame() {
    let harness = Harness::start().await;
    harness.mount_yeeter("1700000000", "4102444799").await;
    harness.mount_profile().await;

    let request = Request::post(format!("/api/yeeter/{}", YEETER))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"untrustedData": {"fid": 2, "buttonIndex": 1}}"#))
        .unwrap();
    let (status, _, body) = send(harness.app(), request).await;
    let html = text(&body);

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!(
        r#"<meta property="fc:frame:post_url" content="http://frames.test/api/success/0xdao/{}">"#,
        YEETER
    )));
    assert!(html.contains(r#"<meta property="fc:frame:button:1" content="BANG IT">"#));
    assert!(html.contains(r#"<meta property="fc:frame:button:1:action" content="tx">"#));
    assert!(html.contains(&format!(
        r#"<meta property="fc:frame:button:1:target" content="http://frames.test/api/yeet/{}/10000000000000000">"#,
        YEETER
    )));
}

#[tokio::test]
async fn test_browser_is_redirected() {
    let harness = Harness::start().await;

    let request = Request::get(format!("/api/yeeter/{}", YEETER))
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(harness.app(), request).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        headers.get(header::LOCATION).unwrap(),
        "https://speedball.daohaus.club/"
    );
}

#[tokio::test]
async fn test_image_markup() {
    let harness = Harness::start().await;
    harness.mount_yeeter("1700000000", "4102444799").await;
    harness.mount_profile().await;

    let uri = format!("/api/yeeter/{}/image?format=html", YEETER);
    let (status, _, body) = send(harness.app(), get(&uri)).await;
    let html = text(&body);

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Speed Club pre-sale"));
    assert!(html.contains("Contribute 0.01 ETH and receive 1000 $BALL"));
    assert!(html.contains("5 ETH"));
}

#[tokio::test]
async fn test_inactive_image_markup() {
    let harness = Harness::start().await;
    harness.mount_yeeter("1600000000", "1600000100").await;

    let uri = format!("/api/yeeter/{}/image?format=html", YEETER);
    let (_, _, body) = send(harness.app(), get(&uri)).await;

    assert!(text(&body).contains("Not Ready to Bang"));
}

#[tokio::test]
async fn test_image_png() {
    let harness = Harness::start().await;
    harness.mount_missing_yeeter().await;

    let uri = format!("/api/yeeter/{}/image", YEETER);
    let (status, headers, body) = send(harness.app(), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(&body[1..4], b"PNG");
}

#[tokio::test]
async fn test_success_frame_uses_rendered_image() {
    let harness = Harness::start().await;

    let uri = format!("/api/success/0xDAO/{}", YEETER);
    let (status, _, body) = send(harness.app(), get(&uri)).await;
    let html = text(&body);

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!(
        r#"<meta property="fc:frame:image" content="http://frames.test/api/success/0xDAO/{}/image">"#,
        YEETER
    )));
    assert!(html.contains(r#"<meta property="fc:frame:button:1" content="View Project">"#));
    assert!(html.contains(r#"<meta property="fc:frame:button:1:action" content="link">"#));
    assert!(html.contains(&format!(
        r#"content="https://speedball.daohaus.club/#/molochv3/0x2105/0xdao/{}">"#,
        YEETER
    )));
}

#[tokio::test]
async fn test_success_frame_uses_static_asset() {
    let harness = Harness::start().await;
    let assets = std::env::temp_dir().join(format!("speed-frame-assets-{}", std::process::id()));
    std::fs::create_dir_all(assets.join("images")).unwrap();
    std::fs::write(assets.join("images/success.png"), b"\x89PNG").unwrap();

    let config = Config {
        assets_dir: assets.clone(),
        ..harness.config()
    };
    let app = harness.app_with(config);

    let uri = format!("/api/success/0xdao/{}", YEETER);
    let (_, _, body) = send(app.clone(), get(&uri)).await;
    assert!(text(&body).contains(
        r#"<meta property="fc:frame:image" content="http://frames.test/images/success.png">"#
    ));

    let (status, _, body) = send(app, get("/images/success.png")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"\x89PNG");

    std::fs::remove_dir_all(assets).ok();
}

#[tokio::test]
async fn test_success_image_markup() {
    let harness = Harness::start().await;

    let uri = format!("/api/success/0xdao/{}/image?format=html", YEETER);
    let (status, _, body) = send(harness.app(), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(text(&body).contains("Banged"));
}

#[tokio::test]
async fn test_transaction() {
    let harness = Harness::start().await;

    let request = Request::post(format!("/api/yeet/{}/10000000000000000", YEETER))
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(harness.app(), request).await;
    let tx: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "max-age=0");
    assert_eq!(tx["chainId"], "eip155:8453");
    assert_eq!(tx["method"], "eth_sendTransaction");
    assert_eq!(tx["params"]["to"], "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    assert_eq!(tx["params"]["value"], "10000000000000000");
    assert_eq!(tx["params"]["abi"][0]["name"], "contributeEth");
    assert!(tx["params"]["data"].as_str().unwrap().starts_with("0xb8637823"));
}

#[tokio::test]
async fn test_transaction_rejects_bad_address() {
    let harness = Harness::start().await;

    let request = Request::post("/api/yeet/0x123/1").body(Body::empty()).unwrap();
    let (status, _, body) = send(harness.app(), request).await;
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("0x123"));
}

#[tokio::test]
async fn test_empty_base_path() {
    let harness = Harness::start().await;
    harness.mount_missing_yeeter().await;

    let config = Config {
        base_path: String::new(),
        ..harness.config()
    };
    let uri = format!("/yeeter/{}/image?format=html", YEETER);
    let (status, _, body) = send(harness.app_with(config), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(text(&body).contains("Stash Not Found"));
}
