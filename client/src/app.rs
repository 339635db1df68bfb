use leptos::prelude::*;

use laurel_shared::{BoardKind, HallData, TrackingPeriod};

use crate::controls::{PeriodFilters, SortControls};
use crate::fame::FameCard;
use crate::hall::{self, FameBoards, FameEntry};
use crate::header::Header;
use crate::loading::LoadingIndicator;

const SECTION_HEADING_STYLE: &str = "font-family: 'Silkscreen', monospace; font-size: 0.95rem; text-transform: uppercase; letter-spacing: 0.14em; color: #5a5860; margin: 26px 0 12px;";
const FAME_LIST_STYLE: &str = "list-style: none; margin: 0; padding: 0; display: flex; flex-wrap: wrap; gap: 14px; justify-content: center;";

/// Newtype wrappers to give same-typed signals distinct Leptos context slots.
#[derive(Clone, Copy)]
pub(crate) struct Loading(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub(crate) struct BoardPreference(pub RwSignal<BoardKind>);

/// Per-granularity visibility toggles; everything shown by default.
#[derive(Clone, Copy)]
pub(crate) struct PeriodVisibility {
    days: RwSignal<bool>,
    weeks: RwSignal<bool>,
    months: RwSignal<bool>,
}

impl PeriodVisibility {
    fn new() -> Self {
        Self {
            days: RwSignal::new(true),
            weeks: RwSignal::new(true),
            months: RwSignal::new(true),
        }
    }

    pub(crate) fn signal(&self, period: TrackingPeriod) -> RwSignal<bool> {
        match period {
            TrackingPeriod::Days => self.days,
            TrackingPeriod::Weeks => self.weeks,
            TrackingPeriod::Months => self.months,
        }
    }
}

/// Root hall-of-fame page. Fetches the snapshot payload once on mount and
/// derives the active/finished card lists from it.
#[component]
pub fn App() -> impl IntoView {
    let data: RwSignal<HallData> = RwSignal::new(HallData::default());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let preference: RwSignal<BoardKind> = RwSignal::new(BoardKind::Change);
    let visibility = PeriodVisibility::new();

    provide_context(Loading(loading));
    provide_context(BoardPreference(preference));
    provide_context(visibility);

    // One-shot fetch on mount; reads nothing reactive, so it never re-runs.
    Effect::new(move || {
        hall::load_hall(data, loading);
    });

    let fames = Memo::new(move |_| {
        if loading.get() {
            return FameBoards::default();
        }
        hall::assemble_fames(&data.get(), chrono::Utc::now())
    });

    let visible_active = move || {
        fames
            .get()
            .active
            .into_iter()
            .filter(|fame| visibility.signal(fame.period).get())
            .collect::<Vec<_>>()
    };
    let visible_inactive = move || {
        fames
            .get()
            .inactive
            .into_iter()
            .filter(|fame| visibility.signal(fame.period).get())
            .collect::<Vec<_>>()
    };

    view! {
        <Header />
        <main style="max-width: 860px; margin: 0 auto; padding: 20px 16px 48px; text-align: center;">
            <h1 style="font-family: 'Silkscreen', monospace; font-size: 1.5rem; letter-spacing: 0.12em; text-transform: uppercase; color: #e2e0d8; margin: 16px 0 6px;">"Hall of Fame"</h1>
            <p style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; color: #9a9590; max-width: 560px; margin: 0 auto 20px; line-height: 1.5;">
                "All those that achieved greatness: the top ranks of every tracking period, whether holding the most honor or gaining the most."
            </p>
            <LoadingIndicator />
            <div style="display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; margin-bottom: 8px;">
                <PeriodFilters />
                <SortControls />
            </div>
            <section>
                <h2 style=SECTION_HEADING_STYLE>"Active"</h2>
                <ul style=FAME_LIST_STYLE>
                    <For
                        each=visible_active
                        key=|fame: &FameEntry| (fame.period, fame.start.timestamp_millis())
                        children=move |fame| view! { <FameCard entry=fame /> }
                    />
                </ul>
            </section>
            <section>
                <h2 style=SECTION_HEADING_STYLE>"Finished"</h2>
                <ul style=FAME_LIST_STYLE>
                    <For
                        each=visible_inactive
                        key=|fame: &FameEntry| (fame.period, fame.start.timestamp_millis())
                        children=move |fame| view! { <FameCard entry=fame /> }
                    />
                </ul>
            </section>
        </main>
    }
}
