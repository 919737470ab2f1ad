//! Server configuration from the environment

use frame_ui::ThemeName;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use yeet_core::branding;

const GATEWAY: &str = "https://gateway-arbitrum.network.thegraph.com/api";
const YEETER_SUBGRAPH: &str = "6vyAqRpCyrhLsfd6TfYAssvKywKhxJykkDbPxJZ4ZcEr";
const DAOHAUS_SUBGRAPH: &str = "7yh4eHJ4qpHEiLPAk9BXhL5YgYrTrRE6gWy8x4oHyAqW";

/// Build a gateway subgraph URL
pub fn gateway_endpoint(graph_key: &str, subgraph_id: &str) -> String {
    format!("{}/{}/subgraphs/id/{}", GATEWAY, graph_key, subgraph_id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Public origin prepended to every URL handed to frame clients
    pub frame_origin: String,
    /// Route prefix, `/api` by default; empty for none
    pub base_path: String,
    /// Where browsers opening a frame URL are redirected
    pub browser_location: String,
    pub graph_key: Option<String>,
    pub graph_endpoint: String,
    pub dh_graph_endpoint: String,
    pub graph_timeout: Duration,
    pub graph_max_retries: u32,
    pub theme: ThemeName,
    /// Local font file used instead of fetching the theme's font
    pub font_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
    /// Success image path relative to the assets directory
    pub success_image: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            frame_origin: branding::FRAME_ORIGIN.to_string(),
            base_path: branding::BASE_PATH.to_string(),
            browser_location: branding::BROWSER_LOCATION.to_string(),
            graph_key: None,
            graph_endpoint: gateway_endpoint("", YEETER_SUBGRAPH),
            dh_graph_endpoint: gateway_endpoint("", DAOHAUS_SUBGRAPH),
            graph_timeout: Duration::from_secs(30),
            graph_max_retries: 0,
            theme: ThemeName::Speedball,
            font_path: None,
            assets_dir: PathBuf::from("public"),
            success_image: branding::SUCCESS_IMAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let graph_key = get("GRAPH_KEY");
        let key = graph_key.clone().unwrap_or_default();

        let theme = match get("THEME") {
            Some(name) => name.parse::<ThemeName>().map_err(anyhow::Error::msg)?,
            None => defaults.theme,
        };

        Ok(Self {
            port: get("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            frame_origin: get("FRAME_ORIGIN")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.frame_origin),
            base_path: get("BASE_PATH")
                .map(|v| normalize_base_path(&v))
                .unwrap_or(defaults.base_path),
            browser_location: get("BROWSER_LOCATION").unwrap_or(defaults.browser_location),
            graph_endpoint: get("GRAPH_ENDPOINT")
                .unwrap_or_else(|| gateway_endpoint(&key, YEETER_SUBGRAPH)),
            dh_graph_endpoint: get("DH_GRAPH_ENDPOINT")
                .unwrap_or_else(|| gateway_endpoint(&key, DAOHAUS_SUBGRAPH)),
            graph_key,
            graph_timeout: get("GRAPH_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.graph_timeout),
            graph_max_retries: get("GRAPH_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.graph_max_retries),
            theme,
            font_path: get("FONT_PATH").map(PathBuf::from),
            assets_dir: get("ASSETS_DIR").map(PathBuf::from).unwrap_or(defaults.assets_dir),
            success_image: get("SUCCESS_IMAGE").unwrap_or(defaults.success_image),
        })
    }

    /// Whether the subgraph endpoints can authenticate
    pub fn has_graph_access(&self) -> bool {
        self.graph_key.is_some() || !self.graph_endpoint.starts_with(GATEWAY)
    }

    /// Absolute URL of a route under the base path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.frame_origin, self.base_path, path)
    }

    /// Absolute URL of a static asset
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.frame_origin, path.trim_start_matches('/'))
    }
}

/// `api/` to `/api`; `/` to empty
fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
