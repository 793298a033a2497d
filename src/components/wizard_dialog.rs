//! Restaurant Wizard Dialog
//!
//! Modal hosting the two wizard steps. The wizard itself lives in the
//! parent's signal (`None` = closed); the dialog drives its requests.

use console_core::scope::RequestScope;
use console_core::wizard::{Submission, Wizard, WizardStep};
use console_core::ConsoleApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{OwnerForm, RestaurantForm};
use crate::context::{use_app_context, use_request_scope};

/// Mutate the open wizard, if any
pub(super) fn edit_wizard(wizard: RwSignal<Option<Wizard>>, f: impl FnOnce(&mut Wizard)) {
    wizard.update(|w| {
        if let Some(w) = w.as_mut() {
            f(w);
        }
    });
}

/// Inline error under a form field
pub(super) fn field_error(wizard: RwSignal<Option<Wizard>>, field: &'static str) -> impl IntoView {
    move || {
        wizard
            .with(|w| w.as_ref().and_then(|w| w.errors().get(field).map(str::to_string)))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
pub fn WizardDialog(
    wizard: RwSignal<Option<Wizard>>,
    /// Runs after a save; the list behind the dialog re-fetches
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let scope = use_request_scope();

    let step = Memo::new(move |_| {
        wizard.with(|w| w.as_ref().map(Wizard::step).unwrap_or(WizardStep::Closed))
    });

    // Closed wizards leave the signal; saved ones refresh the parent
    let settle = move || {
        let outcome = wizard.with_untracked(|w| w.as_ref().and_then(|w| w.outcome().cloned()));
        if let Some(outcome) = outcome {
            wizard.set(None);
            if outcome.needs_refresh() {
                on_saved.run(());
            }
        }
    };

    let submit_restaurant = Callback::new(move |_: ()| {
        let Some(begun) = wizard.try_update(|w| w.as_mut().map(Wizard::begin_restaurant_submit)).flatten() else {
            return;
        };
        match begun {
            Err(blocked) => {
                if let Some(notice) = blocked.notice(WizardStep::Restaurant) {
                    ctx.notify(notice);
                }
            }
            Ok(Submission { ticket, payload }) => spawn_local(async move {
                let Some(result) = ctx.run(scope, |api| async move { api.save_restaurant(&payload).await }).await else {
                    return;
                };
                let notice = wizard
                    .try_update(|w| w.as_mut().and_then(|w| w.finish_restaurant_submit(ticket, result)))
                    .flatten();
                if let Some(notice) = notice {
                    ctx.notify(notice);
                }
            }),
        }
    });

    let submit_owner = Callback::new(move |_: ()| {
        let Some(begun) = wizard.try_update(|w| w.as_mut().map(Wizard::begin_owner_submit)).flatten() else {
            return;
        };
        match begun {
            Err(blocked) => {
                if let Some(notice) = blocked.notice(WizardStep::Owner) {
                    ctx.notify(notice);
                }
            }
            Ok(Submission { ticket, payload }) => spawn_local(async move {
                let Some(result) = ctx.run(scope, |api| async move { api.save_member(&payload).await }).await else {
                    return;
                };
                let notice = wizard
                    .try_update(|w| w.as_mut().and_then(|w| w.finish_owner_submit(ticket, result)))
                    .flatten();
                if let Some(notice) = notice {
                    ctx.notify(notice);
                }
                settle();
            }),
        }
    });

    let skip = Callback::new(move |_: ()| {
        let notice = wizard.try_update(|w| w.as_mut().and_then(Wizard::skip_owner)).flatten();
        if let Some(notice) = notice {
            ctx.notify(notice);
        }
        settle();
    });

    let back = Callback::new(move |_: ()| edit_wizard(wizard, |w| {
        w.back();
    }));

    // The dialog outlives each wizard, so a cancelled save is aborted here
    let cancel = Callback::new(move |_: ()| {
        scope.with_value(RequestScope::cancel_pending);
        edit_wizard(wizard, Wizard::cancel);
        settle();
    });

    let title = move || wizard.with(|w| w.as_ref().map(Wizard::title).unwrap_or_default());

    view! {
        <Show when=move || step.get() != WizardStep::Closed>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{title}</h2>
                        <span class="wizard-progress">
                            {move || if step.get() == WizardStep::Owner { "Step 2 of 2" } else { "Step 1 of 2" }}
                        </span>
                        <button class="modal-close" on:click=move |_| cancel.run(())>"×"</button>
                    </div>
                    {move || match step.get() {
                        WizardStep::Restaurant => view! {
                            <RestaurantForm wizard=wizard on_submit=submit_restaurant on_cancel=cancel />
                        }.into_any(),
                        WizardStep::Owner => view! {
                            <OwnerForm wizard=wizard on_submit=submit_owner on_back=back on_skip=skip />
                        }.into_any(),
                        WizardStep::Closed => ().into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
