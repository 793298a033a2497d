//! Restaurants Page
//!
//! Paginated restaurant list with debounced search and a status filter.

use console_core::domain::{Restaurant, RestaurantStatus};
use console_core::listing::{PageInfo, RestaurantQuery};
use console_core::wizard::Wizard;
use console_core::ConsoleApi;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dashboard::wizard_for;
use crate::components::{EditRequest, Pagination, RestaurantTable, WizardDialog};
use crate::context::{use_app_context, use_request_scope};

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let config = ctx.config();

    let query = RwSignal::new(RestaurantQuery::new(config.page_size));
    let rows = RwSignal::new(Vec::<Restaurant>::new());
    let page_info = RwSignal::new(PageInfo::default());
    let (loading, set_loading) = signal(true);
    let reload = RwSignal::new(0u32);
    let wizard = RwSignal::new(None::<Wizard>);

    let search_text = RwSignal::new(String::new());
    let keystrokes = StoredValue::new(0u64);
    let debounce_ms = config.search_debounce_ms;

    Effect::new(move |_| {
        let requested = query.get();
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            let sent = requested.clone();
            let page = ctx
                .call(scope, "Failed to load restaurants", |api| async move {
                    api.list_restaurants(&sent).await
                })
                .await;
            // A newer query is already on its way
            if query.try_get_untracked().as_ref() != Some(&requested) {
                return;
            }
            if let Some(page) = page {
                rows.set(page.items);
                page_info.set(page.info);
            }
            set_loading.set(false);
        });
    });

    let on_search = move |ev| {
        let text = event_target_value(&ev);
        search_text.set(text.clone());
        keystrokes.update_value(|n| *n += 1);
        let mine = keystrokes.get_value();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if keystrokes.try_get_value() == Some(mine) {
                query.try_update(|q| q.set_search(text));
            }
        });
    };

    let refresh = move |_: ()| reload.update(|n| *n += 1);

    view! {
        <section class="restaurants">
            <div class="page-toolbar">
                <div class="filters">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search restaurants..."
                        prop:value=move || search_text.get()
                        on:input=on_search
                    />
                    <select
                        prop:value=move || query.with(|q| q.status_filter())
                        on:change=move |ev| {
                            let filter = event_target_value(&ev);
                            query.update(|q| q.set_status_filter(&filter));
                        }
                    >
                        <option value="all">"All Status"</option>
                        {RestaurantStatus::ALL.into_iter().map(|status| view! {
                            <option value={status.as_str()}>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button class="btn-primary" on:click=move |_| wizard.set(Some(Wizard::create()))>
                    "+ Add New Restaurant"
                </button>
            </div>

            <RestaurantTable
                rows=rows
                loading=loading
                on_changed=refresh
                on_edit=move |request: EditRequest| wizard.set(Some(wizard_for(&request)))
            />

            <Pagination
                info=page_info
                on_page=move |page: u32| query.update(|q| q.page = page)
            />

            <WizardDialog wizard=wizard on_saved=refresh />
        </section>
    }
}
