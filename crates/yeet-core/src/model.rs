//! Subgraph records
//!
//! Shapes of the campaign (`yeeter`) and DAO profile (`records`) entities as
//! the subgraphs return them. Numeric fields arrive as decimal strings and
//! are kept that way until formatting.

use serde::{Deserialize, Serialize};

/// DAO a campaign belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YeeterDao {
    /// DAO address
    pub id: String,
    /// Symbol of the DAO share token
    #[serde(default)]
    pub share_token_symbol: Option<String>,
}

/// A campaign record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yeeter {
    /// Campaign (shaman) address
    pub id: String,
    /// Closing time, unix seconds
    pub end_time: String,
    /// Opening time, unix seconds
    pub start_time: String,
    /// Minimum contribution, wei
    pub min_tribute: String,
    /// Share multiplier
    #[serde(default)]
    pub multiplier: Option<String>,
    /// Funding goal, wei
    pub goal: String,
    /// Amount raised so far, wei
    #[serde(default)]
    pub balance: Option<String>,
    /// Owning DAO
    pub dao: YeeterDao,
}

impl Yeeter {
    /// Whether `now` (unix seconds) lies strictly between start and end
    ///
    /// Unparseable timestamps make the campaign inactive.
    pub fn is_active_at(&self, now: f64) -> bool {
        match (parse_seconds(&self.start_time), parse_seconds(&self.end_time)) {
            (Some(start), Some(end)) => now > start && now < end,
            _ => false,
        }
    }
}

fn parse_seconds(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `data` of the campaign query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YeeterData {
    /// The campaign, or `null` when unknown
    pub yeeter: Option<Yeeter>,
}

/// DAO of a profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDao {
    /// DAO display name
    #[serde(default)]
    pub name: Option<String>,
}

/// A DAOhaus `records` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoRecord {
    /// Record id
    pub id: String,
    /// JSON-encoded content
    pub content: String,
    /// Owning DAO
    pub dao: RecordDao,
}

impl DaoRecord {
    /// DAO display name (empty when unset)
    pub fn dao_name(&self) -> &str {
        self.dao.name.as_deref().unwrap_or_default()
    }

    /// Parse the JSON content
    ///
    /// Returns `None`, with a log line, when the content is not valid JSON.
    pub fn parsed_content(&self) -> Option<ProfileContent> {
        parse_profile_content(&self.content)
    }
}

/// `data` of the profile query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsData {
    /// Records, newest first
    pub records: Vec<DaoRecord>,
}

/// Parsed profile content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContent {
    /// Mission statement
    #[serde(default)]
    pub mission_statement: Option<String>,
    /// Project details
    #[serde(default)]
    pub project_details: Option<String>,
}

/// Parse profile record content
pub fn parse_profile_content(content: &str) -> Option<ProfileContent> {
    match serde_json::from_str(content) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(error = %e, "could not parse profile content");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yeeter(start: &str, end: &str) -> Yeeter {
        Yeeter {
            id: "0xabc".to_string(),
            end_time: end.to_string(),
            start_time: start.to_string(),
            min_tribute: "1".to_string(),
            multiplier: None,
            goal: "1".to_string(),
            balance: None,
            dao: YeeterDao {
                id: "0xdao".to_string(),
                share_token_symbol: None,
            },
        }
    }

    #[test]
    fn test_active_window_is_strict() {
        let y = yeeter("100", "200");
        assert!(y.is_active_at(150.0));
        assert!(y.is_active_at(100.5));
        assert!(!y.is_active_at(100.0));
        assert!(!y.is_active_at(200.0));
        assert!(!y.is_active_at(50.0));
        assert!(!y.is_active_at(250.0));
    }

    #[test]
    fn test_bad_timestamps_inactive() {
        assert!(!yeeter("soon", "200").is_active_at(150.0));
        assert!(!yeeter("100", "").is_active_at(150.0));
    }

    #[test]
    fn test_deserialize_yeeter() {
        let data: YeeterData = serde_json::from_str(
            r#"{"yeeter": {"id": "0xabc", "endTime": "200", "startTime": "100",
                "minTribute": "10000000000000000", "multiplier": "1",
                "goal": "5000000000000000000", "balance": "0",
                "dao": {"id": "0xdao", "shareTokenSymbol": "BALL"}}}"#,
        )
        .unwrap();
        let y = data.yeeter.unwrap();
        assert_eq!(y.min_tribute, "10000000000000000");
        assert_eq!(y.dao.share_token_symbol.as_deref(), Some("BALL"));
        assert_eq!(y.balance.as_deref(), Some("0"));
    }

    #[test]
    fn test_profile_content() {
        let record = DaoRecord {
            id: "r1".to_string(),
            content: r#"{"missionStatement": "ball", "projectDetails": "fast"}"#.to_string(),
            dao: RecordDao {
                name: Some("Speed Club".to_string()),
            },
        };
        let parsed = record.parsed_content().unwrap();
        assert_eq!(parsed.mission_statement.as_deref(), Some("ball"));
        assert_eq!(parsed.project_details.as_deref(), Some("fast"));
        assert_eq!(record.dao_name(), "Speed Club");
    }

    #[test]
    fn test_profile_content_invalid() {
        assert_eq!(parse_profile_content("not json"), None);
        assert_eq!(parse_profile_content("{}"), Some(ProfileContent::default()));
    }
}
