//! Restaurant Step Component
//!
//! Name, address, state and the city list of the chosen state.

use console_core::domain::geo;
use console_core::validation::fields;
use console_core::wizard::Wizard;
use leptos::prelude::*;

use super::wizard_dialog::{edit_wizard, field_error};

#[component]
pub fn RestaurantForm(
    wizard: RwSignal<Option<Wizard>>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = move || wizard.with(|w| w.as_ref().map(|w| w.restaurant.clone()).unwrap_or_default());
    let loading = move || wizard.with(|w| w.as_ref().is_some_and(Wizard::is_loading));

    // Edit mode may carry a city that is not in our list; keep it selectable
    let city_choices = move || {
        let d = draft();
        let mut choices: Vec<String> = d.city_options().iter().map(|c| c.to_string()).collect();
        if choices.is_empty() && d.is_edit() && !d.city.is_empty() {
            choices.push(d.city.clone());
        }
        choices
    };

    view! {
        <form
            class="wizard-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-field">
                <label>"Restaurant Name"</label>
                <input
                    type="text"
                    placeholder="Enter restaurant name"
                    prop:value=move || draft().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_wizard(wizard, |w| {
                            w.restaurant.name = value;
                            w.clear_error(fields::NAME);
                        });
                    }
                />
                {field_error(wizard, fields::NAME)}
            </div>

            <div class="form-field">
                <label>"Address"</label>
                <textarea
                    rows="3"
                    placeholder="Enter full address"
                    prop:value=move || draft().address
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_wizard(wizard, |w| {
                            w.restaurant.address = value;
                            w.clear_error(fields::ADDRESS);
                        });
                    }
                ></textarea>
                {field_error(wizard, fields::ADDRESS)}
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label>"State"</label>
                    <select
                        prop:value=move || draft().state_code
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            edit_wizard(wizard, |w| {
                                w.restaurant.select_state(Some(code.as_str()).filter(|c| !c.is_empty()));
                                w.clear_error(fields::STATE);
                            });
                        }
                    >
                        <option value="">"Select State"</option>
                        {geo::states().iter().map(|state| view! {
                            <option value={state.code}>{state.name}</option>
                        }).collect_view()}
                    </select>
                    {field_error(wizard, fields::STATE)}
                </div>

                <div class="form-field">
                    <label>"City"</label>
                    <select
                        disabled=move || !draft().can_choose_city()
                        prop:value=move || draft().city
                        on:change=move |ev| {
                            let city = event_target_value(&ev);
                            edit_wizard(wizard, |w| {
                                if w.restaurant.select_city(&city) {
                                    w.clear_error(fields::CITY);
                                }
                            });
                        }
                    >
                        <option value="">
                            {move || if draft().can_choose_city() { "Select City" } else { "Select a state first" }}
                        </option>
                        {move || city_choices().into_iter().map(|city| view! {
                            <option value={city.clone()}>{city.clone()}</option>
                        }).collect_view()}
                    </select>
                    {field_error(wizard, fields::CITY)}
                </div>
            </div>

            <div class="form-actions">
                <button type="button" class="btn-secondary" disabled=loading on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn-primary" disabled=loading>
                    {move || {
                        if loading() {
                            "Saving..."
                        } else if draft().is_edit() {
                            "Update & Continue"
                        } else {
                            "Save & Continue"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
