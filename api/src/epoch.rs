//! Countdown text for the next staking epoch.

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Describes how long until `epoch_start`, as seen from `now`.
///
/// Uses the largest whole unit that fits, rounded up, so "1 day" still has
/// part of a day left and never means the epoch already started.
pub fn time_to_epoch(epoch_start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (epoch_start - now).num_seconds();

    if secs <= 0 {
        return "now".to_string();
    }
    if secs < MINUTE {
        return "less than a minute".to_string();
    }

    let (count, unit) = if secs < HOUR {
        (div_ceil(secs, MINUTE), "minute")
    } else if secs < DAY {
        (div_ceil(secs, HOUR), "hour")
    } else {
        (div_ceil(secs, DAY), "day")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// The first epoch boundary strictly after `now`, given any known boundary
/// `anchor` and the epoch length.
pub fn next_epoch_start(anchor: DateTime<Utc>, period: Duration, now: DateTime<Utc>) -> DateTime<Utc> {
    let period_secs = period.num_seconds();
    if period_secs <= 0 || anchor > now {
        return anchor;
    }
    let elapsed = (now - anchor).num_seconds();
    let epochs = elapsed / period_secs + 1;
    anchor + Duration::seconds(epochs * period_secs)
}

fn div_ceil(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn past_or_current_epoch_is_now() {
        assert_eq!(time_to_epoch(now(), now()), "now");
        assert_eq!(time_to_epoch(now() - Duration::hours(3), now()), "now");
    }

    #[test]
    fn under_a_minute() {
        assert_eq!(time_to_epoch(now() + Duration::seconds(59), now()), "less than a minute");
    }

    #[test]
    fn minutes_round_up() {
        assert_eq!(time_to_epoch(now() + Duration::seconds(60), now()), "1 minute");
        assert_eq!(time_to_epoch(now() + Duration::seconds(61), now()), "2 minutes");
        assert_eq!(time_to_epoch(now() + Duration::minutes(45), now()), "45 minutes");
    }

    #[test]
    fn hours_round_up() {
        assert_eq!(time_to_epoch(now() + Duration::hours(1), now()), "1 hour");
        assert_eq!(time_to_epoch(now() + Duration::minutes(150), now()), "3 hours");
    }

    #[test]
    fn days_round_up() {
        assert_eq!(time_to_epoch(now() + Duration::days(1), now()), "1 day");
        assert_eq!(time_to_epoch(now() + Duration::hours(49), now()), "3 days");
    }

    #[test]
    fn next_epoch_rolls_forward_past_now() {
        let anchor = now() - Duration::days(25);
        let next = next_epoch_start(anchor, Duration::days(10), now());
        assert_eq!(next, now() + Duration::days(5));

        // exactly on a boundary moves to the following one
        let next = next_epoch_start(now(), Duration::days(10), now());
        assert_eq!(next, now() + Duration::days(10));
    }

    #[test]
    fn future_anchor_is_kept() {
        let anchor = now() + Duration::hours(2);
        assert_eq!(next_epoch_start(anchor, Duration::days(10), now()), anchor);
    }
}
