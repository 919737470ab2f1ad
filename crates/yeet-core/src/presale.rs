//! Presale state for a campaign frame
//!
//! [`load_presale`] performs the (at most two) sequential fetches for one
//! frame request and decides which variant the frame shows. Fetch failures
//! never surface as errors: a failed campaign lookup is shown as not found
//! and a failed profile lookup as a missing profile, each with a warning.

use crate::branding::copy::TOKENS_PER_CONTRIBUTION;
use crate::dates::format_short_date;
use crate::model::{ProfileContent, Yeeter};
use crate::source::YeeterSource;
use chain::Wei;
use serde::Serialize;

/// Everything the presale frame shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivePresale {
    /// Campaign id as requested
    pub yeeter_id: String,
    /// Owning DAO id
    pub dao_id: String,
    /// DAO display name
    pub name: String,
    /// Goal in ether
    pub goal: String,
    /// Minimum contribution in ether
    pub min_tribute: String,
    /// Minimum contribution in wei
    pub min_tribute_wei: Wei,
    /// Tokens per contribution
    pub tokens: String,
    /// Closing date, e.g. `March 5th`
    pub ends: String,
    /// Share token symbol
    pub share_token_symbol: String,
    /// Parsed profile content, when valid
    pub profile: Option<ProfileContent>,
}

/// Which frame a campaign request shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Presale {
    /// No campaign with that id, or the lookup failed
    NotFound,
    /// Campaign exists but is outside its window
    NotActive,
    /// Campaign is live but its DAO has no profile
    ProfileMissing {
        /// Owning DAO id
        dao_id: String,
    },
    /// Campaign is live
    Active(Box<ActivePresale>),
}

impl Presale {
    /// The live presale, if any
    pub fn active(&self) -> Option<&ActivePresale> {
        match self {
            Presale::Active(presale) => Some(presale),
            _ => None,
        }
    }
}

/// Current time as unix seconds with millisecond precision
pub fn now_seconds() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Fetch the campaign and profile and decide the frame variant
pub async fn load_presale(source: &dyn YeeterSource, yeeter_id: &str, now: f64) -> Presale {
    let yeeter = match source.yeeter(yeeter_id).await {
        Ok(Some(yeeter)) => yeeter,
        Ok(None) => {
            tracing::info!(yeeter_id, "campaign not found");
            return Presale::NotFound;
        }
        Err(e) => {
            tracing::warn!(yeeter_id, error = %e, "campaign lookup failed");
            return Presale::NotFound;
        }
    };

    if !yeeter.is_active_at(now) {
        tracing::debug!(
            yeeter_id,
            start = %yeeter.start_time,
            end = %yeeter.end_time,
            "campaign outside its window"
        );
        return Presale::NotActive;
    }

    let dao_id = yeeter.dao.id.clone();
    let record = match source.dao_profile(&dao_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::warn!(dao_id = %dao_id, "dao has no profile record");
            return Presale::ProfileMissing { dao_id };
        }
        Err(e) => {
            tracing::warn!(dao_id = %dao_id, error = %e, "profile lookup failed");
            return Presale::ProfileMissing { dao_id };
        }
    };

    match active_presale(yeeter_id, &yeeter) {
        Ok(mut presale) => {
            presale.name = record.dao_name().to_string();
            presale.profile = record.parsed_content();
            Presale::Active(Box::new(presale))
        }
        Err(e) => {
            tracing::warn!(yeeter_id, error = %e, "campaign record has invalid amounts");
            Presale::NotFound
        }
    }
}

fn active_presale(yeeter_id: &str, yeeter: &Yeeter) -> chain::Result<ActivePresale> {
    let goal: Wei = yeeter.goal.parse()?;
    let min_tribute: Wei = yeeter.min_tribute.parse()?;

    Ok(ActivePresale {
        yeeter_id: yeeter_id.to_string(),
        dao_id: yeeter.dao.id.clone(),
        name: String::new(),
        goal: goal.format_ether(),
        min_tribute: min_tribute.format_ether(),
        min_tribute_wei: min_tribute,
        tokens: TOKENS_PER_CONTRIBUTION.to_string(),
        ends: format_short_date(&yeeter.end_time).unwrap_or_default(),
        share_token_symbol: yeeter.dao.share_token_symbol.clone().unwrap_or_default(),
        profile: None,
    })
}
