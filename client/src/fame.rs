use leptos::prelude::*;
use wasm_bindgen::JsCast;

use laurel_shared::{BoardKind, HonorUser, TrackingPeriod};

use crate::app::BoardPreference;
use crate::change_text::ChangeAmount;
use crate::hall::FameEntry;
use crate::time_format::date_to_yyyymmdd;

const TH_STYLE: &str = "font-family: 'Silkscreen', monospace; font-size: 0.62rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860; text-align: left; padding: 4px 8px; border-bottom: 1px solid #282c3e;";
const TD_STYLE: &str = "font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; color: #e2e0d8; text-align: left; padding: 6px 8px;";
const RANK_STYLE: &str = "font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #9a9590; text-align: left; padding: 6px 8px; width: 26px;";
const MEDAL_STYLE: &str = "width: 14px; height: 14px; image-rendering: pixelated; vertical-align: middle;";

/// Rank-decoration image for the period's top row; longer periods award
/// shinier diamonds.
fn medal_src(period: TrackingPeriod) -> String {
    format!("/{}-diamond.webp", period.medal_color())
}

fn fame_row(period: TrackingPeriod, kind: BoardKind, index: usize, user: HonorUser) -> impl IntoView {
    // The #1 row's username is flanked by the period's medal diamonds.
    let user_cell = if index == 0 {
        let medal = medal_src(period);
        view! {
            <td style=TD_STYLE>
                <img alt="" src=medal.clone() class="achievement" style=MEDAL_STYLE />
                {user.username.clone()}
                <img alt="" src=medal class="achievement" style=MEDAL_STYLE />
            </td>
        }
        .into_any()
    } else {
        view! { <td style=TD_STYLE>{user.username.clone()}</td> }.into_any()
    };

    match kind {
        BoardKind::Honor => view! {
            <tr>
                <td style=RANK_STYLE>{format!("#{}", index + 1)}</td>
                {user_cell}
            </tr>
        }
        .into_any(),
        BoardKind::Change => view! {
            <tr>
                {user_cell}
                <td style=TD_STYLE>
                    <ChangeAmount amount=user.honor_change />
                </td>
            </tr>
        }
        .into_any(),
    }
}

/// One period's hall-of-fame card: tag badge, date-range heading linking to
/// the leaderboard detail view, and the top-3 table for the active ranking.
#[component]
pub(crate) fn FameCard(entry: FameEntry) -> impl IntoView {
    let BoardPreference(preference) = expect_context();

    let period = entry.period;
    let start_str = date_to_yyyymmdd(entry.start);
    let end_str = entry.end.map(date_to_yyyymmdd);
    let range_label = format!("{start_str} -> {}", end_str.as_deref().unwrap_or("now"));

    let link_start = start_str;
    let link_end = end_str;
    // An ongoing period links up to today.
    let href = move || {
        let end = link_end
            .clone()
            .unwrap_or_else(|| date_to_yyyymmdd(chrono::Utc::now()));
        format!(
            "/leaderboard?start={link_start}&end={end}&sortBy={}",
            preference.get().as_str()
        )
    };

    let board = entry.board;
    let head_row = move || match preference.get() {
        BoardKind::Honor => view! {
            <tr>
                <th style=TH_STYLE>"Position"</th>
                <th style=TH_STYLE>"Username"</th>
            </tr>
        }
        .into_any(),
        BoardKind::Change => view! {
            <tr>
                <th style=TH_STYLE>"Username"</th>
                <th style=TH_STYLE>"Gained Honor"</th>
            </tr>
        }
        .into_any(),
    };
    let rows = move || {
        let kind = preference.get();
        board
            .ranking(kind)
            .iter()
            .take(3)
            .cloned()
            .enumerate()
            .map(|(index, user)| fame_row(period, kind, index, user))
            .collect_view()
    };

    view! {
        <li
            class="fame"
            data-type=period.as_str()
            style="background: #161921; border: 1px solid #282c3e; border-radius: 6px; padding: 14px 18px; width: 300px; transition: border-color 0.15s;"
            on:mouseenter=|e| {
                if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                    el.style().set_property("border-color", "rgba(245,197,66,0.4)").ok();
                }
            }
            on:mouseleave=|e| {
                if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                    el.style().set_property("border-color", "#282c3e").ok();
                }
            }
        >
            <div style="display: flex; align-items: center; gap: 10px;">
                <span
                    aria-label=period.label()
                    title=period.label()
                    style="display: inline-flex; align-items: center; justify-content: center; width: 22px; height: 22px; border-radius: 4px; background: #1a1d2a; border: 1px solid #282c3e; font-family: 'Silkscreen', monospace; font-size: 0.72rem; color: #f5c542; flex-shrink: 0;"
                >{period.tag_letter().to_string()}</span>
                <h3 style="margin: 0; font-size: 0.92rem; font-weight: 500;">
                    <a
                        href=href
                        style="color: #e2e0d8; text-decoration: none; font-family: 'JetBrains Mono', monospace;"
                    >{range_label}</a>
                </h3>
            </div>
            <div class="divider-gold" style="margin: 10px 0;" />
            <table style="width: 100%; border-collapse: collapse;">
                <thead>{head_row}</thead>
                <tbody>{rows}</tbody>
            </table>
        </li>
    }
}
