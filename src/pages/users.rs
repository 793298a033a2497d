//! Users Page
//!
//! Restaurant members with a restaurant filter, page size choice,
//! client-side search over the loaded page and activation toggles.

use console_core::domain::{Member, RecordId, Restaurant};
use console_core::listing::{filter_members, MemberQuery, MemberStats, Page, RestaurantQuery};
use console_core::ConsoleApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Pagination;
use crate::context::{use_app_context, use_request_scope};

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let config = ctx.config();

    let restaurants = RwSignal::new(Vec::<Restaurant>::new());
    let query = RwSignal::new(MemberQuery::new(config.default_member_page_size()));
    let page = RwSignal::new(Page::<Member>::default());
    let search = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let reload = RwSignal::new(0u32);
    let page_sizes = config.member_page_sizes.clone();
    let dropdown_limit = config.dashboard_limit;

    // Restaurant filter options
    Effect::new(move |_| {
        spawn_local(async move {
            let query = RestaurantQuery::new(dropdown_limit);
            let loaded = ctx
                .call(scope, "Failed to load restaurants", |api| async move {
                    api.list_restaurants(&query).await
                })
                .await;
            if let Some(loaded) = loaded {
                restaurants.try_set(loaded.items);
            }
        });
    });

    Effect::new(move |_| {
        let requested = query.get();
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            let sent = requested.clone();
            let loaded = ctx
                .call(scope, "Failed to load users", |api| async move { api.list_members(&sent).await })
                .await;
            if query.try_get_untracked().as_ref() != Some(&requested) {
                return;
            }
            if let Some(loaded) = loaded {
                page.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let stats = Memo::new(move |_| page.with(MemberStats::from_page));
    let visible = move || page.with(|p| filter_members(&p.items, &search.get()).into_iter().cloned().collect::<Vec<_>>());

    let toggle_active = move |member: Member| {
        let user_id = member.user.id.clone();
        let activate = !member.user.is_active;
        spawn_local(async move {
            let done = ctx
                .call(scope, "Failed to update user status", |api| async move {
                    api.set_member_active(&user_id, activate).await
                })
                .await;
            if done.is_some() {
                ctx.success(if activate { "User activated successfully" } else { "User deactivated successfully" });
                reload.try_update(|n| *n += 1);
            }
        });
    };

    let render_member = move |member: Member| {
        let restaurant = member
            .restaurant
            .as_ref()
            .map(|r| format!("{} ({})", r.name, r.city))
            .unwrap_or_else(|| "N/A".to_string());
        let active = member.user.is_active;
        let target = member.clone();
        view! {
            <tr>
                <td>
                    <div class="member-cell">
                        <span class="avatar">{member.initials()}</span>
                        <span>{member.full_name()}</span>
                    </div>
                </td>
                <td>{member.user.email.clone()}</td>
                <td><span class="role-badge">{member.role_label()}</span></td>
                <td>{restaurant}</td>
                <td>
                    <span class={if active { "badge badge-active" } else { "badge badge-inactive" }}>
                        {if active { "Active" } else { "Inactive" }}
                    </span>
                </td>
                <td>
                    <button class="btn-small" on:click=move |_| toggle_active(target.clone())>
                        {if active { "Deactivate" } else { "Activate" }}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="users">
            <div class="stat-grid">
                <div class="stat-card total">
                    <span class="stat-label">"Total Users"</span>
                    <span class="stat-value">{move || stats.get().total}</span>
                </div>
                <div class="stat-card active">
                    <span class="stat-label">"Active"</span>
                    <span class="stat-value">{move || stats.get().active}</span>
                </div>
                <div class="stat-card owners">
                    <span class="stat-label">"Owners"</span>
                    <span class="stat-value">{move || stats.get().owners}</span>
                </div>
                <div class="stat-card managers">
                    <span class="stat-label">"Managers"</span>
                    <span class="stat-value">{move || stats.get().managers}</span>
                </div>
            </div>

            <div class="page-toolbar">
                <div class="filters">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search by name, email or role..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let restaurant = Some(value).filter(|v| !v.is_empty()).map(RecordId::from);
                        query.update(|q| q.set_restaurant(restaurant));
                    }>
                        <option value="">"All Restaurants"</option>
                        {move || restaurants.get().into_iter().map(|r| view! {
                            <option value={r.id.to_string()}>{r.name.clone()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        prop:value=move || query.with(|q| q.limit.to_string())
                        on:change=move |ev| {
                            if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                                query.update(|q| q.set_limit(limit));
                            }
                        }
                    >
                        {page_sizes.into_iter().map(|size| view! {
                            <option value={size.to_string()}>{format!("{} per page", size)}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="table-wrapper">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Restaurant"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let members = visible();
                            if loading.get() {
                                view! { <tr><td colspan="6" class="muted">"Loading users..."</td></tr> }.into_any()
                            } else if members.is_empty() {
                                view! { <tr><td colspan="6" class="empty-state">"No users found"</td></tr> }.into_any()
                            } else {
                                members.into_iter().map(render_member).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Pagination
                info=Signal::derive(move || page.with(|p| p.info))
                on_page=move |next: u32| query.update(|q| q.page = next)
            />
        </section>
    }
}
