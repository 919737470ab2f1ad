//! GraphQL client for subgraph endpoints
//!
//! This crate provides a small GraphQL-over-HTTP client used to read
//! campaign and DAO records from hosted subgraphs. Queries are inline
//! strings POSTed as `{"query": ...}`; there is no pagination and no auth
//! beyond whatever key is embedded in the endpoint URL.
//!
//! # Modules
//!
//! - [`graphql`] - Request/response types, errors and the HTTP client
//! - [`retry`] - Retry with exponential backoff
//!
//! # Example
//!
//! ```rust,no_run
//! use subgraph_client::{GraphClient, GraphClientConfig, GraphRequest};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Meta {
//!     block: serde_json::Value,
//! }
//!
//! #[derive(Deserialize)]
//! struct Data {
//!     _meta: Meta,
//! }
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraphClient::new(GraphClientConfig::new("https://example.com/subgraph"))?;
//!     let data: Data = client.query(GraphRequest::new("{_meta { block { number } }}")).await?;
//!     println!("{}", data._meta.block);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graphql;
pub mod retry;

pub use graphql::{
    GraphClient, GraphClientConfig, GraphError, GraphRequest, GraphResponse, GraphqlErrorMessage,
    Result,
};
pub use retry::{network_retry, retry, RetryConfig};
