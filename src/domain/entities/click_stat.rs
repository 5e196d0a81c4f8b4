//! Click statistic entity recording a single accounted hit.

use chrono::{DateTime, Timelike, Utc};
use uuid::Uuid;

/// An append-only audit record written once per accounted (non-crawler) hit.
///
/// Keyed by `(code, id)` in storage; never updated or read back by this
/// service. Timestamps are truncated to minute precision.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickStat {
    pub code: String,
    pub id: Uuid,
    pub clicked_at: DateTime<Utc>,
    pub query: String,
}

impl ClickStat {
    /// Creates a record for a hit on `code` with the request's original query
    /// string, stamped with the current minute and a fresh unique id.
    pub fn new(code: &str, query: &str) -> Self {
        Self {
            code: code.to_string(),
            id: Uuid::new_v4(),
            clicked_at: minute_floor(Utc::now()),
            query: query.to_string(),
        }
    }
}

/// Truncates a timestamp to minute precision.
fn minute_floor(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}
