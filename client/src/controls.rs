use leptos::prelude::*;
use wasm_bindgen::JsCast;

use laurel_shared::{BoardKind, TrackingPeriod};

use crate::app::{BoardPreference, PeriodVisibility};

const FIELDSET_STYLE: &str = "width: max-content; display: flex; flex-direction: column; gap: 2px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; padding: 10px 14px; text-align: left;";
const LEGEND_STYLE: &str = "font-family: 'Silkscreen', monospace; font-size: 0.68rem; text-transform: uppercase; letter-spacing: 0.14em; color: #5a5860; padding: 0 6px;";
const LABEL_STYLE: &str = "display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 4px 2px; cursor: pointer; font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; color: #e2e0d8;";

fn checked_state(e: &leptos::ev::Event) -> Option<bool> {
    let input = e
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    Some(input.checked())
}

/// Per-granularity visibility checkboxes.
#[component]
pub(crate) fn PeriodFilters() -> impl IntoView {
    let visibility: PeriodVisibility = expect_context();

    view! {
        <fieldset style=FIELDSET_STYLE>
            <legend style=LEGEND_STYLE>"Periods"</legend>
            {TrackingPeriod::ALL
                .into_iter()
                .map(|period| {
                    let shown = visibility.signal(period);
                    view! {
                        <label style=LABEL_STYLE>
                            {period.label()}
                            <input
                                type="checkbox"
                                prop:checked=move || shown.get()
                                on:change=move |e| {
                                    if let Some(checked) = checked_state(&e) {
                                        shown.set(checked);
                                    }
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// Ranking preference: absolute honor vs. honor gained. Two radios, one
/// always selected.
#[component]
pub(crate) fn SortControls() -> impl IntoView {
    let BoardPreference(preference) = expect_context();

    let option = move |kind: BoardKind, label: &'static str| {
        view! {
            <label style=LABEL_STYLE>
                {label}
                <input
                    type="radio"
                    name="sorting"
                    value=kind.as_str()
                    prop:checked=move || preference.get() == kind
                    on:change=move |e| {
                        let selected = checked_state(&e).unwrap_or(true);
                        preference.set(if selected { kind } else { kind.other() });
                    }
                />
            </label>
        }
    };

    view! {
        <fieldset style=FIELDSET_STYLE>
            <legend style=LEGEND_STYLE>"Sorting"</legend>
            {option(BoardKind::Honor, "Highest Honor")}
            {option(BoardKind::Change, "Gained Honor")}
        </fieldset>
    }
}
