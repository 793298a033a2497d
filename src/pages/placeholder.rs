use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <section class="placeholder">
            <h2>"Analytics"</h2>
            <p class="muted">"Analytics are coming soon."</p>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <section class="placeholder">
            <h2>"Settings"</h2>
            <p class="muted">"Settings are coming soon."</p>
        </section>
    }
}
