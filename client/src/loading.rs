use leptos::prelude::*;

use crate::app::Loading;

/// Pulse-dot indicator shown while the mount-time fetch is in flight.
#[component]
pub(crate) fn LoadingIndicator() -> impl IntoView {
    let Loading(loading) = expect_context();

    view! {
        <Show when=move || loading.get()>
            <div style="padding: 24px; text-align: center;">
                <div
                    class="status-pulse"
                    style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c; letter-spacing: 0.05em;"
                >"Fetching hall of fame..."</div>
                <div style="margin-top: 12px; display: flex; justify-content: center; gap: 4px;">
                    <div style="width: 4px; height: 4px; border-radius: 50%; background: #f5c542; opacity: 0.3; animation: pulse-dot 1.5s ease-in-out infinite;" />
                    <div style="width: 4px; height: 4px; border-radius: 50%; background: #f5c542; opacity: 0.3; animation: pulse-dot 1.5s ease-in-out 0.3s infinite;" />
                    <div style="width: 4px; height: 4px; border-radius: 50%; background: #f5c542; opacity: 0.3; animation: pulse-dot 1.5s ease-in-out 0.6s infinite;" />
                </div>
            </div>
        </Show>
    }
}
