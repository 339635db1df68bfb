use leptos::prelude::*;

/// Site header with brand mark and divider.
#[component]
pub(crate) fn Header() -> impl IntoView {
    view! {
        <header style="padding: 20px 24px 16px; border-bottom: 1px solid #282c3e; background: #13161f;">
            <div style="display: flex; align-items: baseline; gap: 10px;">
                <div
                    class="text-gold-gradient"
                    style="font-family: 'Silkscreen', monospace; font-size: 1.25rem; font-weight: 700; letter-spacing: 0.18em; text-transform: uppercase; text-shadow: 0 0 16px rgba(245,197,66,0.08);"
                >"LAUREL"</div>
                <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.58rem; color: #3a3f5c; background: #1a1d2a; padding: 1px 6px; border-radius: 3px; border: 1px solid rgba(245,197,66,0.15); letter-spacing: 0.04em;">"v0.1"</div>
            </div>
            <div style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.72rem; color: #5a5860; margin-top: 3px; letter-spacing: 0.08em;">"Honor rankings"</div>
            <div class="divider-gold" style="margin-top: 12px;" />
        </header>
    }
}
