//! Restaurant Table Component
//!
//! Expandable rows with lazily fetched details, status toggle, edit and
//! delete. Shared by the dashboard and the restaurants page.

use console_core::domain::{RecordId, Restaurant, RestaurantDetail, RestaurantStatus};
use console_core::expansion::{FetchTicket, RowAction, RowExpansion};
use console_core::listing::apply_status;
use console_core::ConsoleApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, StatusBadge};
use crate::context::{use_app_context, use_request_scope};

/// Which wizard entry point an edit click asks for
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    pub restaurant: Restaurant,
    /// Open on the owner step with the embedded owner
    pub owner_step: bool,
}

#[component]
fn DetailPanel(detail: RestaurantDetail) -> impl IntoView {
    let restaurant = detail.restaurant;
    let status = restaurant.status;
    let staff = detail.users;

    view! {
        <div class="detail-panel">
            <div class="detail-facts">
                <p><strong>"Address: "</strong>{restaurant.address.clone()}</p>
                <p><strong>"Location: "</strong>{format!("{}, {}", restaurant.city, restaurant.state)}</p>
                <p><strong>"Status: "</strong><StatusBadge status=status /></p>
                <p><strong>"Created: "</strong>{restaurant.created_on()}</p>
            </div>
            <h4>"Staff"</h4>
            {if staff.is_empty() {
                view! { <p class="empty-state">"No staff members yet"</p> }.into_any()
            } else {
                view! {
                    <table class="staff-table">
                        <thead>
                            <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th></tr>
                        </thead>
                        <tbody>
                            {staff.into_iter().map(|member| view! {
                                <tr>
                                    <td>{member.full_name()}</td>
                                    <td>{member.email.clone()}</td>
                                    <td>{member.role.map(|r| r.label()).unwrap_or("N/A")}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn RestaurantTable(
    rows: RwSignal<Vec<Restaurant>>,
    #[prop(into)] loading: Signal<bool>,
    /// A row was deleted; re-fetch the page
    #[prop(into)] on_changed: Callback<()>,
    #[prop(into)] on_edit: Callback<EditRequest>,
) -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();
    let expansion = RwSignal::new(RowExpansion::<RestaurantDetail>::new());

    let fetch_detail = move |id: RecordId, ticket: FetchTicket| {
        spawn_local(async move {
            let request_id = id.clone();
            let Some(result) = ctx.run(scope, |api| async move { api.restaurant_detail(&request_id).await }).await
            else {
                return;
            };
            let detail = match result {
                Ok(detail) => Some(detail),
                Err(e) => {
                    log::warn!("[TABLE] detail of {} failed: {}", id, e);
                    ctx.error(e.user_message("Failed to load restaurant details"));
                    None
                }
            };
            expansion.try_update(|e| e.finish_fetch(&id, ticket, detail));
        });
    };

    let toggle_row = move |id: RecordId| {
        if let Some(RowAction::Fetch(ticket)) = expansion.try_update(|e| e.toggle(&id)) {
            fetch_detail(id, ticket);
        }
    };

    let toggle_status = move |id: RecordId, current: RestaurantStatus| {
        let next = current.toggled();
        spawn_local(async move {
            let request_id = id.clone();
            let done = ctx
                .call(scope, "Failed to update restaurant status", |api| async move {
                    api.set_restaurant_status(&request_id, next).await
                })
                .await;
            if done.is_none() {
                return;
            }
            rows.try_update(|rows| apply_status(rows, &id, next));
            ctx.success(format!("Restaurant marked as {}", next.label()));
            if let Some(RowAction::Fetch(ticket)) = expansion.try_update(|e| e.refresh(&id)) {
                fetch_detail(id, ticket);
            }
        });
    };

    let delete = move |id: RecordId| {
        spawn_local(async move {
            let request_id = id.clone();
            let done = ctx
                .call(scope, "Failed to delete restaurant", |api| async move {
                    api.delete_restaurant(&request_id).await
                })
                .await;
            if done.is_some() {
                expansion.try_update(|e| e.forget(&id));
                ctx.success("Restaurant deleted successfully");
                on_changed.run(());
            }
        });
    };

    let render_row = move |restaurant: Restaurant| {
        let id = restaurant.id.clone();
        let status = restaurant.status;
        let enabled = restaurant.controls_enabled();
        let is_open = {
            let id = id.clone();
            move || expansion.with(|e| e.is_open(&id))
        };
        let is_loading = {
            let id = id.clone();
            move || expansion.with(|e| e.is_loading(&id))
        };
        let owner_cell = match &restaurant.owner {
            Some(owner) => view! {
                <div class="owner-cell">
                    <span>{format!("{} {}", owner.first_name, owner.last_name)}</span>
                    <small>{owner.email.clone()}</small>
                </div>
            }.into_any(),
            None => view! { <span class="muted">"No owner"</span> }.into_any(),
        };

        let (toggle_id, status_id, delete_id) = (id.clone(), id.clone(), id.clone());
        let edit_target = restaurant.clone();
        let owner_target = restaurant.clone();
        let has_owner = restaurant.owner.is_some();
        let detail_id = id.clone();
        let expanded_open = is_open.clone();

        view! {
            <tr class={if enabled { "restaurant-row" } else { "restaurant-row inactive" }}>
                <td>
                    <button
                        class="icon-btn expand-btn"
                        disabled=move || !enabled || is_loading()
                        on:click=move |_| toggle_row(toggle_id.clone())
                    >
                        {let is_open = is_open.clone(); move || if is_open() { "▾" } else { "▸" }}
                    </button>
                </td>
                <td class="restaurant-name">{restaurant.name.clone()}</td>
                <td>{restaurant.city.clone()}</td>
                <td>{restaurant.state.clone()}</td>
                <td>{owner_cell}</td>
                <td><StatusBadge status=status /></td>
                <td>{restaurant.created_on()}</td>
                <td class="row-actions">
                    <label class="switch" title="Toggle status">
                        <input
                            type="checkbox"
                            prop:checked={status == RestaurantStatus::Active}
                            on:change=move |ev| {
                                // Shows the stored status until the update succeeds and the rows re-render
                                event_target::<web_sys::HtmlInputElement>(&ev)
                                    .set_checked(status == RestaurantStatus::Active);
                                toggle_status(status_id.clone(), status)
                            }
                        />
                        <span class="slider"></span>
                    </label>
                    <button
                        class="icon-btn"
                        title="Edit restaurant"
                        disabled={!enabled}
                        on:click=move |_| {
                            on_edit.run(EditRequest { restaurant: edit_target.clone(), owner_step: false })
                        }
                    >
                        "✎"
                    </button>
                    <button
                        class="icon-btn"
                        title="Edit owner"
                        disabled={!enabled || !has_owner}
                        on:click=move |_| {
                            on_edit.run(EditRequest { restaurant: owner_target.clone(), owner_step: true })
                        }
                    >
                        "👤"
                    </button>
                    <DeleteConfirmButton
                        disabled={!enabled}
                        on_confirm=move |_| delete(delete_id.clone())
                    />
                </td>
            </tr>
            <Show when=expanded_open>
                <tr class="detail-row">
                    <td colspan="8">
                        {let detail_id = detail_id.clone(); move || {
                            let loading = expansion.with(|e| e.is_loading(&detail_id));
                            match expansion.with(|e| e.detail(&detail_id).cloned()) {
                                Some(detail) => view! { <DetailPanel detail=detail /> }.into_any(),
                                None if loading => view! { <p class="muted">"Loading details..."</p> }.into_any(),
                                None => view! { <p class="muted">"No details available"</p> }.into_any(),
                            }
                        }}
                    </td>
                </tr>
            </Show>
        }
    };

    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"City"</th>
                        <th>"State"</th>
                        <th>"Owner"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            view! { <tr><td colspan="8" class="muted">"Loading restaurants..."</td></tr> }.into_any()
                        } else if rows.with(Vec::is_empty) {
                            view! { <tr><td colspan="8" class="empty-state">"No restaurants found"</td></tr> }.into_any()
                        } else {
                            rows.get().into_iter().map(render_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
