pub mod client;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::{
    address::AccountId,
    amount::Amount,
    constants::{MIN_START_YEAR, ONE_DAY_MS},
};

/// Payload served by the reward chart endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartData {
    pub accounts: Vec<ChartAccount>,
    pub rewards: Vec<Reward>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartAccount {
    pub id: AccountId,
    pub address: String,
    pub parent_account_id: Option<AccountId>,
    pub identity: Option<Identity>,
    pub child_display: Option<String>,
}

/// On-chain registered display metadata, optionally judged by registrars.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display: String,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub web: Option<String>,
    pub confirmed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub validator_account_id: AccountId,
    pub total_reward: Amount,
}

/// Date range for a chart query. Construction applies the adjustment
/// rules: the start date never precedes Jan 1 of [`MIN_START_YEAR`] and
/// the range always spans at least one full day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let start = if start.year() < MIN_START_YEAR {
            NaiveDate::from_ymd_opt(MIN_START_YEAR, 1, 1).unwrap()
        } else {
            start
        };
        let start = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        let mut end = Utc.from_utc_datetime(&end.and_time(NaiveTime::MIN));
        if end.timestamp_millis() - start.timestamp_millis() < ONE_DAY_MS {
            end = start + Duration::days(1);
        }
        Self { start, end }
    }

    pub fn start_timestamp_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    pub fn end_timestamp_ms(&self) -> i64 {
        self.end.timestamp_millis()
    }
}
