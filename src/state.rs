//! Shared server state

use crate::config::Config;
use frame_render::FontSet;
use frame_ui::{get_vars, Vars};
use std::sync::Arc;
use subgraph_client::{GraphClient, GraphClientConfig, RetryConfig};
use yeet_core::{SubgraphSource, YeeterSource};

/// Immutable state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn YeeterSource>,
    pub vars: Arc<Vars>,
    pub fonts: Arc<FontSet>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn YeeterSource>, fonts: FontSet) -> Self {
        let vars = get_vars(config.theme);
        Self {
            config: Arc::new(config),
            source,
            vars: Arc::new(vars),
            fonts: Arc::new(fonts),
        }
    }

    /// State backed by the configured subgraph endpoints
    pub fn from_config(config: Config, fonts: FontSet) -> anyhow::Result<Self> {
        let client = |endpoint: &str| {
            GraphClient::new(
                GraphClientConfig::new(endpoint)
                    .with_timeout(config.graph_timeout)
                    .with_retry(RetryConfig::new(config.graph_max_retries as usize)),
            )
        };
        let source = SubgraphSource::new(
            client(&config.graph_endpoint)?,
            client(&config.dh_graph_endpoint)?,
        );
        Ok(Self::new(config, Arc::new(source), fonts))
    }
}
