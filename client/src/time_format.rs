use chrono::{DateTime, Utc};

/// Format a UTC timestamp as the zero-padded `YYYY-MM-DD` form used in card
/// headings and leaderboard links.
pub(crate) fn date_to_yyyymmdd(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
