//! A pool the connected account has stake in, as shown on the account page.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Fees shown when the pool summary carries none.
pub const DEFAULT_FEES_GENERATED: &str = "0 ETH";

/// The connected account's position in a pool, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub zrx_staked_formatted: String,
    pub rewards_received_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakePoolSummary {
    pub name: String,
    pub operator_address: String,
    pub pool_id: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub fees_generated: Option<String>,
    #[serde(default)]
    pub rewards_shared_ratio: Option<f64>,
    #[serde(default)]
    pub stake_ratio: Option<f64>,
    #[serde(default)]
    pub is_verified: bool,
    pub next_epoch_approximate_start: DateTime<Utc>,
    pub user_data: UserData,
}

impl StakePoolSummary {
    pub fn fees_generated(&self) -> &str {
        self.fees_generated
            .as_deref()
            .unwrap_or(DEFAULT_FEES_GENERATED)
    }

    /// "Rewards Shared" stat text.
    pub fn rewards_shared_display(&self) -> String {
        format!("{}%", rewards_shared_percent(self.rewards_shared_ratio.unwrap_or(0.0)))
    }

    /// "Saturation" stat text.
    pub fn saturation_display(&self) -> String {
        format!("{}%", saturation_percent(self.stake_ratio.unwrap_or(0.0)))
    }
}

/// Rewards share as a whole percent, rounding halves up.
pub fn rewards_shared_percent(ratio: f64) -> i64 {
    (ratio * 100.0 + 0.5).floor() as i64
}

/// Saturation as a whole percent. Always rounds down so a pool never reads
/// as full before it is.
pub fn saturation_percent(ratio: f64) -> i64 {
    (ratio * 100.0).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summary() -> StakePoolSummary {
        StakePoolSummary {
            name: "Binance Staking".to_string(),
            operator_address: "0x5775afa796818ada27b09faf5c90d101f04ef600".to_string(),
            pool_id: "0x0000000000000000000000000000000000000000000000000000000000000001".to_string(),
            website_url: None,
            logo_url: None,
            fees_generated: None,
            rewards_shared_ratio: None,
            stake_ratio: None,
            is_verified: false,
            next_epoch_approximate_start: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            user_data: UserData::default(),
        }
    }

    #[test]
    fn rounding_modes_differ_per_field() {
        assert_eq!(rewards_shared_percent(0.455), 46);
        assert_eq!(saturation_percent(0.455), 45);

        assert_eq!(rewards_shared_percent(0.005), 1);
        assert_eq!(saturation_percent(0.005), 0);

        assert_eq!(rewards_shared_percent(0.995), 100);
        assert_eq!(saturation_percent(0.995), 99);
    }

    #[test]
    fn whole_ratios_are_exact() {
        assert_eq!(rewards_shared_percent(0.0), 0);
        assert_eq!(saturation_percent(1.0), 100);
        assert_eq!(rewards_shared_percent(0.5), 50);
        assert_eq!(saturation_percent(0.5), 50);
    }

    #[test]
    fn missing_values_use_defaults() {
        let s = summary();
        assert_eq!(s.fees_generated(), "0 ETH");
        assert_eq!(s.rewards_shared_display(), "0%");
        assert_eq!(s.saturation_display(), "0%");
    }

    #[test]
    fn present_values_are_formatted() {
        let s = StakePoolSummary {
            fees_generated: Some("1.25 ETH".to_string()),
            rewards_shared_ratio: Some(0.455),
            stake_ratio: Some(0.455),
            ..summary()
        };
        assert_eq!(s.fees_generated(), "1.25 ETH");
        assert_eq!(s.rewards_shared_display(), "46%");
        assert_eq!(s.saturation_display(), "45%");
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "name": "Pool",
            "operatorAddress": "0x01",
            "poolId": "0x02",
            "nextEpochApproximateStart": "2020-01-01T00:00:00Z",
            "userData": { "zrxStakedFormatted": "1,000", "rewardsReceivedFormatted": "0.5" }
        }"#;
        let s: StakePoolSummary = serde_json::from_str(json).unwrap();
        assert!(!s.is_verified);
        assert_eq!(s.stake_ratio, None);
        assert_eq!(s.user_data.zrx_staked_formatted, "1,000");
    }
}
