//! Dashboard Page
//!
//! Status counts over the first page of restaurants plus the same table the
//! restaurants page uses.

use console_core::domain::{Restaurant, RestaurantStatus};
use console_core::listing::RestaurantQuery;
use console_core::wizard::Wizard;
use console_core::ConsoleApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EditRequest, RestaurantTable, WizardDialog};
use crate::context::{use_app_context, use_request_scope};

/// Wizard for an edit click from either table
pub(crate) fn wizard_for(request: &EditRequest) -> Wizard {
    let owner = if request.owner_step { request.restaurant.owner.as_ref() } else { None };
    Wizard::edit(&request.restaurant, owner)
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>, class: &'static str) -> impl IntoView {
    view! {
        <div class={format!("stat-card {}", class)}>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let limit = ctx.config().dashboard_limit;

    let rows = RwSignal::new(Vec::<Restaurant>::new());
    let total = RwSignal::new(0u64);
    let (loading, set_loading) = signal(true);
    let reload = RwSignal::new(0u32);
    let wizard = RwSignal::new(None::<Wizard>);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            let query = RestaurantQuery::new(limit);
            let page = ctx
                .call(scope, "Failed to load restaurants", |api| async move {
                    api.list_restaurants(&query).await
                })
                .await;
            if let Some(page) = page {
                log::debug!("[DASHBOARD] loaded {} restaurants", page.items.len());
                rows.try_set(page.items);
                total.try_set(page.info.total);
            }
            set_loading.try_set(false);
        });
    });

    let count = move |status: RestaurantStatus| {
        Signal::derive(move || rows.with(|r| r.iter().filter(|x| x.status == status).count()).to_string())
    };
    let refresh = move |_: ()| reload.update(|n| *n += 1);

    view! {
        <section class="dashboard">
            <div class="page-toolbar">
                <h2>"Overview"</h2>
                <button class="btn-primary" on:click=move |_| wizard.set(Some(Wizard::create()))>
                    "+ Add New Restaurant"
                </button>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Restaurants" value={Signal::derive(move || total.get().to_string())} class="total" />
                <StatCard label="Active" value={count(RestaurantStatus::Active)} class="active" />
                <StatCard label="Inactive" value={count(RestaurantStatus::Inactive)} class="inactive" />
                <StatCard label="Pending" value={count(RestaurantStatus::Pending)} class="pending" />
            </div>

            <RestaurantTable
                rows=rows
                loading=loading
                on_changed=refresh
                on_edit=move |request: EditRequest| wizard.set(Some(wizard_for(&request)))
            />

            <WizardDialog wizard=wizard on_saved=refresh />
        </section>
    }
}
