use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshots for one tracking granularity, keyed by the period's UTC-midnight
/// start timestamp in milliseconds. Ascending key order means the last entry
/// is the most recent (possibly still running) period.
pub type BoardMap = BTreeMap<i64, Board>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HonorUser {
    pub username: String,
    pub honor: i64,
    #[serde(rename = "honorChange")]
    pub honor_change: i64,
}

/// One period's precomputed rankings: the same users ordered two ways,
/// descending by absolute honor and descending by honor gained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub honor: Vec<HonorUser>,
    #[serde(default)]
    pub change: Vec<HonorUser>,
}

impl Board {
    /// A board with either ranking missing is a sparse snapshot and is
    /// never shown.
    pub fn is_renderable(&self) -> bool {
        !self.honor.is_empty() && !self.change.is_empty()
    }

    pub fn ranking(&self, kind: BoardKind) -> &[HonorUser] {
        match kind {
            BoardKind::Honor => &self.honor,
            BoardKind::Change => &self.change,
        }
    }

    pub fn leader(&self, kind: BoardKind) -> Option<&HonorUser> {
        self.ranking(kind).first()
    }
}

/// Raw payload of the hall endpoint. Granularities the backend has no
/// snapshots for come through as empty maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HallData {
    #[serde(default)]
    pub days: BoardMap,
    #[serde(default)]
    pub weeks: BoardMap,
    #[serde(default)]
    pub months: BoardMap,
}

impl HallData {
    pub fn boards(&self, period: TrackingPeriod) -> &BoardMap {
        match period {
            TrackingPeriod::Days => &self.days,
            TrackingPeriod::Weeks => &self.weeks,
            TrackingPeriod::Months => &self.months,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.weeks.is_empty() && self.months.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingPeriod {
    Days,
    Weeks,
    Months,
}

impl TrackingPeriod {
    pub const ALL: [TrackingPeriod; 3] = [
        TrackingPeriod::Days,
        TrackingPeriod::Weeks,
        TrackingPeriod::Months,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TrackingPeriod::Days => "days",
            TrackingPeriod::Weeks => "weeks",
            TrackingPeriod::Months => "months",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrackingPeriod::Days => "Days",
            TrackingPeriod::Weeks => "Weeks",
            TrackingPeriod::Months => "Months",
        }
    }

    pub const fn tag_letter(self) -> char {
        match self {
            TrackingPeriod::Days => 'D',
            TrackingPeriod::Weeks => 'W',
            TrackingPeriod::Months => 'M',
        }
    }

    /// Medal tier for the period's top rank: longer periods award shinier
    /// diamonds.
    pub const fn medal_color(self) -> &'static str {
        match self {
            TrackingPeriod::Days => "bronze",
            TrackingPeriod::Weeks => "silver",
            TrackingPeriod::Months => "gold",
        }
    }

    /// End boundary of a finished period starting at `start`, in UTC:
    /// +1 day, +6 days, or +1 calendar month.
    pub fn period_end(self, start: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TrackingPeriod::Days => start.checked_add_days(chrono::Days::new(1)),
            TrackingPeriod::Weeks => start.checked_add_days(chrono::Days::new(6)),
            TrackingPeriod::Months => start.checked_add_months(chrono::Months::new(1)),
        }
        .unwrap_or(start)
    }
}

/// Which of a board's two rankings the user wants shown. Doubles as the
/// `sortBy` query value understood by the leaderboard detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    Honor,
    Change,
}

impl BoardKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardKind::Honor => "honor",
            BoardKind::Change => "change",
        }
    }

    pub const fn other(self) -> BoardKind {
        match self {
            BoardKind::Honor => BoardKind::Change,
            BoardKind::Change => BoardKind::Honor,
        }
    }
}
