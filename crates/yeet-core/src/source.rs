//! Campaign data source
//!
//! [`YeeterSource`] is the seam between the presale logic and the
//! subgraphs. [`SubgraphSource`] is the production implementation backed by
//! two GraphQL endpoints: one for campaigns, one for DAOhaus records.

use crate::model::{DaoRecord, RecordsData, Yeeter, YeeterData};
use crate::queries::{dao_profile_query, yeeter_query};
use async_trait::async_trait;
use subgraph_client::{GraphClient, GraphError, GraphRequest};
use thiserror::Error;

/// Data source errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Subgraph request failed
    #[error("Subgraph error: {0}")]
    Graph(#[from] GraphError),

    /// Record was returned but cannot be used
    #[error("Malformed record: {0}")]
    Malformed(String),
}

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Read access to campaign and DAO profile records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YeeterSource: Send + Sync {
    /// Look up a campaign by address; `None` when the subgraph has no such entity
    async fn yeeter(&self, yeeter_id: &str) -> Result<Option<Yeeter>>;

    /// Newest profile record of a DAO; `None` when there is none
    async fn dao_profile(&self, dao_id: &str) -> Result<Option<DaoRecord>>;
}

/// [`YeeterSource`] backed by two subgraph clients
#[derive(Debug, Clone)]
pub struct SubgraphSource {
    yeeters: GraphClient,
    daohaus: GraphClient,
}

impl SubgraphSource {
    /// Create a source from the campaign and DAOhaus clients
    pub fn new(yeeters: GraphClient, daohaus: GraphClient) -> Self {
        Self { yeeters, daohaus }
    }
}

#[async_trait]
impl YeeterSource for SubgraphSource {
    async fn yeeter(&self, yeeter_id: &str) -> Result<Option<Yeeter>> {
        let data: YeeterData = self
            .yeeters
            .query(GraphRequest::new(yeeter_query(yeeter_id)))
            .await?;

        match data.yeeter {
            Some(yeeter) if yeeter.dao.id.trim().is_empty() => Err(SourceError::Malformed(
                format!("campaign {} has no dao", yeeter.id),
            )),
            found => Ok(found),
        }
    }

    async fn dao_profile(&self, dao_id: &str) -> Result<Option<DaoRecord>> {
        let data: RecordsData = self
            .daohaus
            .query(GraphRequest::new(dao_profile_query(dao_id)))
            .await?;
        Ok(data.records.into_iter().next())
    }
}
