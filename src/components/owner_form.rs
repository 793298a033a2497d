//! Owner Step Component

use console_core::domain::MemberRole;
use console_core::validation::fields;
use console_core::wizard::Wizard;
use leptos::prelude::*;

use super::wizard_dialog::{edit_wizard, field_error};

#[component]
pub fn OwnerForm(
    wizard: RwSignal<Option<Wizard>>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_skip: Callback<()>,
) -> impl IntoView {
    let draft = move || wizard.with(|w| w.as_ref().map(|w| w.owner.clone()).unwrap_or_default());
    let loading = move || wizard.with(|w| w.as_ref().is_some_and(Wizard::is_loading));
    let can_skip = move || wizard.with(|w| w.as_ref().is_some_and(Wizard::can_skip));

    let text_field = move |label: &'static str, field: &'static str, kind: &'static str| {
        let value = move || {
            let d = draft();
            match field {
                fields::FIRST_NAME => d.first_name,
                fields::LAST_NAME => d.last_name,
                fields::EMAIL => d.email,
                _ => d.password,
            }
        };
        let placeholder = move || match field {
            fields::PASSWORD if draft().is_edit() => "Leave blank to keep current password",
            fields::PASSWORD => "Minimum 6 characters",
            _ => "",
        };
        view! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type=kind
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| {
                        let input = event_target_value(&ev);
                        edit_wizard(wizard, |w| {
                            match field {
                                fields::FIRST_NAME => w.owner.first_name = input,
                                fields::LAST_NAME => w.owner.last_name = input,
                                fields::EMAIL => w.owner.email = input,
                                _ => w.owner.password = input,
                            }
                            w.clear_error(field);
                        });
                    }
                />
                {field_error(wizard, field)}
            </div>
        }
    };

    view! {
        <form
            class="wizard-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-row">
                {text_field("First Name", fields::FIRST_NAME, "text")}
                {text_field("Last Name", fields::LAST_NAME, "text")}
            </div>
            {text_field("Email", fields::EMAIL, "email")}
            {text_field("Password", fields::PASSWORD, "password")}

            <div class="form-field">
                <label>"Role"</label>
                <select
                    prop:value=move || draft().role.map(|r| r.as_str()).unwrap_or_default()
                    on:change=move |ev| {
                        let role = event_target_value(&ev);
                        edit_wizard(wizard, |w| {
                            w.owner.select_role(&role);
                            w.clear_error(fields::USER_ROLE);
                        });
                    }
                >
                    <option value="">"Select Role"</option>
                    {MemberRole::ALL.into_iter().map(|role| view! {
                        <option value={role.as_str()}>{role.label()}</option>
                    }).collect_view()}
                </select>
                {field_error(wizard, fields::USER_ROLE)}
            </div>

            <div class="form-actions">
                <button type="button" class="btn-secondary" disabled=loading on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button
                    type="button"
                    class="btn-secondary"
                    disabled=move || !can_skip()
                    on:click=move |_| on_skip.run(())
                >
                    "Skip"
                </button>
                <button type="submit" class="btn-primary" disabled=loading>
                    {move || {
                        if loading() {
                            "Saving..."
                        } else if draft().is_edit() {
                            "Update Owner"
                        } else {
                            "Add Owner"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
