//! Short link entity and schedule-based URL resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OpenGraphInfo;

/// A short link mapping a code to a target URL.
///
/// The code is immutable once created; this service only reads links and
/// increments their click counter. Creation and editing belong to the
/// administrative API, which also writes the serialized `schedules` and
/// `open_graph` sub-documents this entity carries in deserialized form.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub title: String,
    pub clicks: i64,
    pub is_archived: bool,
    pub use_open_graph: bool,
    pub open_graph: Option<OpenGraphInfo>,
    pub schedules: Vec<Schedule>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        long_url: String,
        title: String,
        clicks: i64,
        is_archived: bool,
        use_open_graph: bool,
        open_graph: Option<OpenGraphInfo>,
        schedules: Vec<Schedule>,
    ) -> Self {
        Self {
            code,
            long_url,
            title,
            clicks,
            is_archived,
            use_open_graph,
            open_graph,
            schedules,
        }
    }

    /// Returns true if the link carries renderable OpenGraph metadata.
    pub fn has_preview(&self) -> bool {
        self.use_open_graph && self.open_graph.is_some()
    }

    /// Resolves the effective target URL at `now`.
    ///
    /// Schedules whose window strictly contains `now` (`start < now < end`,
    /// inactive exactly at the boundary instants) override the base URL; the
    /// earliest-starting active window wins. The sort is stable, so two
    /// windows sharing a start time fall back to declaration order and the
    /// first declared wins. With no active window the base URL is returned.
    pub fn resolve_url(&self, now: DateTime<Utc>) -> &str {
        let mut active: Vec<&Schedule> = self
            .schedules
            .iter()
            .filter(|s| s.is_active_at(now))
            .collect();
        active.sort_by_key(|s| s.start);

        active
            .first()
            .map(|s| s.alternative_url.as_str())
            .unwrap_or(&self.long_url)
    }
}

/// A time-bounded URL override.
///
/// Field names serialize in PascalCase to stay compatible with schedule blobs
/// written by the administrative tooling. `start < end` is assumed upstream,
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub alternative_url: String,
}

impl Schedule {
    /// Returns true if the window strictly contains `instant`.
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.start < instant && instant < self.end
    }
}
