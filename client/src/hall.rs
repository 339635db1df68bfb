use chrono::{DateTime, Utc};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use laurel_shared::{Board, HallData, TrackingPeriod};

pub(crate) const HALL_ENDPOINT: &str = "/api/hall";

/// One period's card data, derived from the raw payload on every
/// recomputation and never stored.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FameEntry {
    pub period: TrackingPeriod,
    pub start: DateTime<Utc>,
    /// None while the period is still running.
    pub end: Option<DateTime<Utc>>,
    pub board: Board,
}

impl FameEntry {
    fn effective_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end.unwrap_or(now)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FameBoards {
    pub active: Vec<FameEntry>,
    pub inactive: Vec<FameEntry>,
}

/// Fetch the precomputed hall snapshots.
pub(crate) async fn fetch_hall() -> Result<HallData, String> {
    let resp = gloo_net::http::Request::get(HALL_ENDPOINT)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<HallData>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// One-shot mount fetch. The loading flag clears on every path; a failed or
/// malformed response leaves the default empty payload in place.
pub(crate) fn load_hall(data: RwSignal<HallData>, loading: RwSignal<bool>) {
    loading.set(true);
    spawn_local(async move {
        match fetch_hall().await {
            Ok(hall) => data.set(hall),
            Err(e) => {
                web_sys::console::warn_1(&format!("hall fetch failed: {e}").into());
            }
        }
        loading.set(false);
    });
}

/// Split the raw snapshot maps into active and finished period cards.
///
/// Per granularity, in ascending start order: every snapshot except the
/// latest becomes a finished entry with a computed end boundary; the latest
/// becomes the single active entry with no end. Both lists are then pruned
/// of sparse boards and ordered newest-first by effective end, where an
/// active entry counts as ending at `now`. Entries with equal effective end
/// keep their accumulation order.
pub(crate) fn assemble_fames(data: &HallData, now: DateTime<Utc>) -> FameBoards {
    let mut active = Vec::new();
    let mut inactive = Vec::new();

    for period in TrackingPeriod::ALL {
        let boards = data.boards(period);
        let Some((&latest_start, _)) = boards.last_key_value() else {
            continue;
        };
        for (&start_ms, board) in boards {
            let Some(start) = DateTime::from_timestamp_millis(start_ms) else {
                continue;
            };
            if start_ms == latest_start {
                active.push(FameEntry {
                    period,
                    start,
                    end: None,
                    board: board.clone(),
                });
            } else {
                inactive.push(FameEntry {
                    period,
                    start,
                    end: Some(period.period_end(start)),
                    board: board.clone(),
                });
            }
        }
    }

    FameBoards {
        active: filter_and_sort(active, now),
        inactive: filter_and_sort(inactive, now),
    }
}

fn filter_and_sort(mut fames: Vec<FameEntry>, now: DateTime<Utc>) -> Vec<FameEntry> {
    fames.retain(|fame| fame.board.is_renderable());
    fames.sort_by(|a, b| b.effective_end(now).cmp(&a.effective_end(now)));
    fames
}

#[cfg(test)]
mod tests {
    use super::{FameEntry, assemble_fames};
    use chrono::{DateTime, Utc};
    use laurel_shared::{Board, HallData, HonorUser, TrackingPeriod};

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp")
    }

    fn user(username: &str, honor: i64, honor_change: i64) -> HonorUser {
        HonorUser {
            username: username.to_string(),
            honor,
            honor_change,
        }
    }

    fn board(username: &str) -> Board {
        let u = user(username, 100, 10);
        Board {
            honor: vec![u.clone()],
            change: vec![u],
        }
    }

    fn ms(s: &str) -> i64 {
        utc(s).timestamp_millis()
    }

    fn kinds(fames: &[FameEntry]) -> Vec<TrackingPeriod> {
        fames.iter().map(|f| f.period).collect()
    }

    #[test]
    fn one_active_and_rest_inactive_per_granularity() {
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-10T00:00:00Z"), board("a"));
        data.days.insert(ms("2024-01-11T00:00:00Z"), board("b"));
        data.days.insert(ms("2024-01-12T00:00:00Z"), board("c"));
        data.weeks.insert(ms("2024-01-01T00:00:00Z"), board("d"));
        data.weeks.insert(ms("2024-01-08T00:00:00Z"), board("e"));
        data.months.insert(ms("2024-01-01T00:00:00Z"), board("f"));

        let fames = assemble_fames(&data, utc("2024-01-12T15:00:00Z"));

        assert_eq!(fames.active.len(), 3);
        assert_eq!(fames.inactive.len(), 3);
        assert!(fames.active.iter().all(|f| f.end.is_none()));
        assert!(fames.inactive.iter().all(|f| f.end.is_some()));
    }

    #[test]
    fn active_entry_is_latest_start() {
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-10T00:00:00Z"), board("old"));
        data.days.insert(ms("2024-01-11T00:00:00Z"), board("new"));

        let fames = assemble_fames(&data, utc("2024-01-11T12:00:00Z"));

        assert_eq!(fames.active.len(), 1);
        assert_eq!(fames.active[0].start, utc("2024-01-11T00:00:00Z"));
        assert_eq!(fames.active[0].board.honor[0].username, "new");
        assert_eq!(fames.inactive.len(), 1);
        assert_eq!(fames.inactive[0].board.honor[0].username, "old");
    }

    #[test]
    fn inactive_ends_use_period_arithmetic() {
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-10T00:00:00Z"), board("a"));
        data.days.insert(ms("2024-02-01T00:00:00Z"), board("a2"));
        data.weeks.insert(ms("2024-01-10T00:00:00Z"), board("b"));
        data.weeks.insert(ms("2024-02-01T00:00:00Z"), board("b2"));
        data.months.insert(ms("2024-01-10T00:00:00Z"), board("c"));
        data.months.insert(ms("2024-03-01T00:00:00Z"), board("c2"));

        let fames = assemble_fames(&data, utc("2024-03-02T00:00:00Z"));

        let end_for = |period: TrackingPeriod| {
            fames
                .inactive
                .iter()
                .find(|f| f.period == period)
                .and_then(|f| f.end)
                .expect("finished entry")
        };
        assert_eq!(end_for(TrackingPeriod::Days), utc("2024-01-11T00:00:00Z"));
        assert_eq!(end_for(TrackingPeriod::Weeks), utc("2024-01-16T00:00:00Z"));
        assert_eq!(end_for(TrackingPeriod::Months), utc("2024-02-10T00:00:00Z"));
    }

    #[test]
    fn empty_granularities_contribute_nothing() {
        let mut data = HallData::default();
        data.days.insert(1_700_000_000_000, board("a"));

        let fames = assemble_fames(&data, utc("2023-11-15T00:00:00Z"));

        assert_eq!(kinds(&fames.active), vec![TrackingPeriod::Days]);
        assert!(fames.active[0].end.is_none());
        assert!(fames.inactive.is_empty());
    }

    #[test]
    fn sparse_boards_are_dropped_from_both_lists() {
        let no_change = Board {
            honor: vec![user("a", 100, 10)],
            change: Vec::new(),
        };
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-10T00:00:00Z"), no_change.clone());
        data.weeks.insert(ms("2024-01-01T00:00:00Z"), board("kept"));
        data.weeks.insert(ms("2024-01-08T00:00:00Z"), no_change);

        let fames = assemble_fames(&data, utc("2024-01-09T00:00:00Z"));

        // The days map's only snapshot and the weeks map's latest snapshot
        // are both sparse, so only the finished weeks entry survives.
        assert!(fames.active.is_empty());
        assert_eq!(kinds(&fames.inactive), vec![TrackingPeriod::Weeks]);
        assert_eq!(fames.inactive[0].board.honor[0].username, "kept");
    }

    #[test]
    fn inactive_sorted_newest_end_first() {
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-10T00:00:00Z"), board("jan10"));
        data.days.insert(ms("2024-01-20T00:00:00Z"), board("jan20"));
        data.days.insert(ms("2024-01-15T00:00:00Z"), board("jan15"));
        data.days.insert(ms("2024-01-25T00:00:00Z"), board("active"));

        let fames = assemble_fames(&data, utc("2024-01-25T09:00:00Z"));

        let names: Vec<&str> = fames
            .inactive
            .iter()
            .map(|f| f.board.honor[0].username.as_str())
            .collect();
        assert_eq!(names, vec!["jan20", "jan15", "jan10"]);
    }

    #[test]
    fn active_entries_keep_granularity_order() {
        // All active entries share the same effective end ("now"), so the
        // stable sort must leave them in days/weeks/months order.
        let mut data = HallData::default();
        data.months.insert(ms("2024-01-01T00:00:00Z"), board("m"));
        data.weeks.insert(ms("2024-01-08T00:00:00Z"), board("w"));
        data.days.insert(ms("2024-01-10T00:00:00Z"), board("d"));

        let fames = assemble_fames(&data, utc("2024-01-10T12:00:00Z"));

        assert_eq!(
            kinds(&fames.active),
            vec![
                TrackingPeriod::Days,
                TrackingPeriod::Weeks,
                TrackingPeriod::Months
            ]
        );
    }

    #[test]
    fn equal_end_inactive_entries_keep_accumulation_order() {
        // A finished day starting Jan 15 and a finished week starting Jan 10
        // both end Jan 16; no secondary ordering applies, so the days entry
        // (accumulated first) stays first.
        let mut data = HallData::default();
        data.days.insert(ms("2024-01-15T00:00:00Z"), board("day"));
        data.days.insert(ms("2024-01-16T00:00:00Z"), board("day-active"));
        data.weeks.insert(ms("2024-01-10T00:00:00Z"), board("week"));
        data.weeks.insert(ms("2024-01-17T00:00:00Z"), board("week-active"));

        let fames = assemble_fames(&data, utc("2024-01-18T00:00:00Z"));

        assert_eq!(fames.inactive[0].end, fames.inactive[1].end);
        assert_eq!(fames.inactive[0].board.honor[0].username, "day");
        assert_eq!(fames.inactive[1].board.honor[0].username, "week");
    }

    #[test]
    fn assembles_wire_payload() {
        let payload = serde_json::json!({
            "days": {
                "1704844800000": {
                    "honor": [
                        { "username": "ada", "honor": 900, "honorChange": 40 },
                        { "username": "bee", "honor": 700, "honorChange": 90 }
                    ],
                    "change": [
                        { "username": "bee", "honor": 700, "honorChange": 90 },
                        { "username": "ada", "honor": 900, "honorChange": 40 }
                    ]
                },
                "1704931200000": {
                    "honor": [{ "username": "cas", "honor": 100, "honorChange": 5 }],
                    "change": [{ "username": "cas", "honor": 100, "honorChange": 5 }]
                }
            },
            "weeks": {},
            "months": {}
        });
        let data: HallData = serde_json::from_value(payload).expect("parse");

        let fames = assemble_fames(&data, utc("2024-01-11T08:00:00Z"));

        assert_eq!(fames.active.len(), 1);
        assert_eq!(fames.active[0].board.honor[0].username, "cas");
        assert_eq!(fames.inactive.len(), 1);
        // 1704844800000 = 2024-01-10T00:00:00Z
        assert_eq!(fames.inactive[0].start, utc("2024-01-10T00:00:00Z"));
        assert_eq!(fames.inactive[0].end, Some(utc("2024-01-11T00:00:00Z")));
        assert_eq!(fames.inactive[0].board.change[0].username, "bee");
    }
}
