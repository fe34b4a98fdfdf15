//! Demo content bundled with the site: the documentation resource index and
//! the connected account's stakes.

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::epoch::next_epoch_start;
use crate::resource::ResourceRecord;
use crate::stake_pool::StakePoolSummary;

const RESOURCES_JSON: &str = include_str!("../data/resources.json");
const STAKES_JSON: &str = include_str!("../data/stakes.json");

/// Length of one staking epoch.
pub const EPOCH_PERIOD_DAYS: i64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// All documentation resources, in index order.
pub fn resources() -> Result<Vec<ResourceRecord>, CatalogError> {
    parse_resources(RESOURCES_JSON)
}

/// Stakes of the demo account, with epoch starts rolled forward so the
/// countdown is always relative to `now`.
pub fn account_stakes(now: DateTime<Utc>) -> Result<Vec<StakePoolSummary>, CatalogError> {
    let mut stakes = parse_stakes(STAKES_JSON)?;
    for stake in stakes.iter_mut() {
        stake.next_epoch_approximate_start = next_epoch_start(
            stake.next_epoch_approximate_start,
            Duration::days(EPOCH_PERIOD_DAYS),
            now,
        );
    }
    Ok(stakes)
}

fn parse_resources(json: &str) -> Result<Vec<ResourceRecord>, CatalogError> {
    let records: Vec<ResourceRecord> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            name: "resources.json",
            source,
        })?;
    dioxus_logger::tracing::debug!("loaded {} resources", records.len());
    Ok(records)
}

fn parse_stakes(json: &str) -> Result<Vec<StakePoolSummary>, CatalogError> {
    let stakes: Vec<StakePoolSummary> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            name: "stakes.json",
            source,
        })?;
    dioxus_logger::tracing::debug!("loaded {} stakes", stakes.len());
    Ok(stakes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bundled_resources_parse() {
        let records = resources().unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.iter().any(|r| r.is_community()));
        assert!(records.iter().any(|r| r.difficulty.is_none()));
    }

    #[test]
    fn bundled_stakes_roll_forward() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let stakes = account_stakes(now).unwrap();
        assert_eq!(stakes.len(), 2);
        for stake in &stakes {
            assert!(stake.next_epoch_approximate_start > now);
            assert!(stake.next_epoch_approximate_start <= now + Duration::days(EPOCH_PERIOD_DAYS));
        }
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = parse_resources("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse resources.json"));
    }
}
