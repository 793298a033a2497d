use console_core::domain::RestaurantStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<RestaurantStatus>) -> impl IntoView {
    view! {
        <span class=move || status.get().badge_class()>{move || status.get().label()}</span>
    }
}
