//! GraphQL over HTTP
//!
//! Request/response types, error classification and the reqwest-backed
//! client. A response whose body carries a non-empty `errors` array is an
//! error even when the HTTP status is 200.

use crate::retry::{network_retry, RetryConfig};
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    /// Error message
    pub message: String,
}

/// Subgraph request errors
///
/// # Examples
/// ```
/// use subgraph_client::GraphError;
///
/// let error = GraphError::Status { status: 503, body: "busy".into() };
/// assert!(error.is_network_error());
/// assert!(!GraphError::EmptyData.is_recoverable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Transport failure (connect, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The endpoint answered with GraphQL errors
    #[error("GraphQL errors: {}", join_messages(.0))]
    Graphql(Vec<GraphqlErrorMessage>),

    /// Body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response had neither data nor errors
    #[error("Response contained no data")]
    EmptyData,

    /// HTTP client could not be constructed
    #[error("Client build error: {0}")]
    Build(String),
}

fn join_messages(errors: &[GraphqlErrorMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl GraphError {
    /// HTTP status, when the failure came with one
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a network-related failure
    ///
    /// Network failure statuses: 408, 425, 429, 500, 502, 503, 504, 522, 524
    pub fn is_network_error(&self) -> bool {
        match self {
            GraphError::Network(_) => true,
            GraphError::Status { status, .. } => matches!(
                status,
                408 | 425 | 429 | 500 | 502 | 503 | 504 | 522 | 524
            ),
            _ => false,
        }
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        self.is_network_error()
    }
}

/// Result type for subgraph requests
pub type Result<T> = std::result::Result<T, GraphError>;

// =============================================================================
// Request / Response Types
// =============================================================================

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRequest {
    /// Query document
    pub query: String,
    /// Variables, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphRequest {
    /// Create a request from an inline query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attach variables
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// GraphQL response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphResponse<T> {
    /// Result data
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// GraphQL errors
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

impl<T> GraphResponse<T> {
    /// Data, or the error that explains its absence
    pub fn into_result(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(GraphError::Graphql(self.errors));
        }
        self.data.ok_or(GraphError::EmptyData)
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for a subgraph client
#[derive(Debug, Clone)]
pub struct GraphClientConfig {
    /// Full endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers to include in all requests
    pub default_headers: HashMap<String, String>,
    /// Retry policy for recoverable failures
    pub retry: RetryConfig,
}

impl Default for GraphClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: format!("speed-frame/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
            retry: RetryConfig::default(),
        }
    }
}

impl GraphClientConfig {
    /// Create a new config for an endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

// =============================================================================
// Client
// =============================================================================

/// GraphQL client bound to one endpoint
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: ReqwestClient,
    config: GraphClientConfig,
}

impl GraphClient {
    /// Create a new client
    pub fn new(config: GraphClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GraphError::Build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Run a query and return its data, retrying per the configured policy
    pub async fn query<T>(&self, request: GraphRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        network_retry(&self.config.retry, || self.query_once(&request)).await
    }

    /// Run a query once, without retries
    pub async fn query_once<T>(&self, request: &GraphRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute::<T>(request).await?.into_result()
    }

    /// Run a query and return the raw envelope
    pub async fn execute<T>(&self, request: &GraphRequest) -> Result<GraphResponse<T>>
    where
        T: DeserializeOwned,
    {
        let mut req = self.client.post(&self.config.endpoint).json(request);
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        tracing::debug!(endpoint = %redact(&self.config.endpoint), "subgraph query");

        let response = req.send().await.map_err(|e| {
            GraphError::Network(format!("Request failed: {}", e.without_url()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GraphError::Network(format!("Failed to read response: {}", e)))?;

        serde_json::from_str::<GraphResponse<T>>(&body)
            .map_err(|e| GraphError::Decode(format!("Failed to parse JSON: {}", e)))
    }

    /// Get the client configuration
    pub fn config(&self) -> &GraphClientConfig {
        &self.config
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Endpoint URLs embed the gateway key after `/api/`; keep it out of logs
fn redact(endpoint: &str) -> String {
    match endpoint.find("/api/") {
        Some(start) => {
            let key_start = start + "/api/".len();
            let key_end = endpoint[key_start..]
                .find('/')
                .map(|i| key_start + i)
                .unwrap_or(endpoint.len());
            format!("{}***{}", &endpoint[..key_start], &endpoint[key_end..])
        }
        None => endpoint.to_string(),
    }
}
