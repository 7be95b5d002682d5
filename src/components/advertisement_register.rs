//! Registration/edit form for advertisements.
//!
//! SYSTEM CONTEXT
//! ==============
//! A launcher button opens the form dialog; submission goes through the
//! `state::register` model for validation, payload construction, and
//! result handling. Register mode submits the full create payload; edit
//! mode pre-fills from the record and submits only changed fields. A
//! confirmed mutation reloads the page so the portal re-fetches its
//! list.

use leptos::prelude::*;

use crate::net::types::{AdvertisementKind, AdvertisementRecord};
use crate::state::register::{FormMode, RegisterFormState};
use crate::state::toast::ToastState;

/// Launcher plus modal form for registering or editing an advertisement.
///
/// `organization_id` is read at submit time, so the list may finish
/// loading after this component mounts.
#[component]
pub fn AdvertisementRegister(
    #[prop(into)] organization_id: Signal<String>,
    #[prop(optional)] edit: Option<AdvertisementRecord>,
) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(edit.as_ref().map_or_else(RegisterFormState::default, RegisterFormState::for_edit));
    let is_edit = form.get_untracked().mode == FormMode::Edit;

    let on_open = move |_| {
        form.update(|f| f.open = true);
    };
    let on_cancel = Callback::new(move |()| form.update(|f| f.open = false));

    let submit = Callback::new(move |()| {
        let snapshot = form.get_untracked();
        if let Err(message) = snapshot.validate() {
            toast.update(|t| t.error(message));
            return;
        }
        match snapshot.mode {
            FormMode::Register => {
                let variables = snapshot.create_variables(&organization_id.get_untracked());
                form.update(|f| f.submitting = true);
                submit_create(form, toast, variables);
            }
            FormMode::Edit => {
                let Some(variables) = snapshot.update_variables() else {
                    return;
                };
                form.update(|f| f.submitting = true);
                submit_update(form, toast, variables);
            }
        }
    });

    view! {
        <button
            class="btn btn--primary"
            data-testid=if is_edit { "editBtn" } else { "createAdvertisement" }
            on:click=on_open
        >
            {if is_edit { "Edit" } else { "Create Advertisement" }}
        </button>

        <Show when=move || form.get().open>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>{if is_edit { "Edit Advertisement" } else { "Register Advertisement" }}</h2>
                    <label class="dialog__label">
                        "Enter name of Advertisement"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Media URL"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().media_url
                            on:input=move |ev| form.update(|f| f.media_url = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Type of Advertisement"
                        <select
                            class="dialog__input"
                            prop:value=move || form.get().kind.as_str()
                            on:change=move |ev| {
                                if let Some(kind) = AdvertisementKind::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.kind = kind);
                                }
                            }
                        >
                            <option value="POPUP">"POPUP"</option>
                            <option value="BANNER">"BANNER"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Start Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || form.get().start_date
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "End Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || form.get().end_date
                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            data-testid=if is_edit { "addonupdate" } else { "addonregister" }
                            disabled=move || form.get().submitting
                            on:click=move |_| submit.run(())
                        >
                            {if is_edit { "Save Changes" } else { "Register" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn submit_create(
    form: RwSignal<RegisterFormState>,
    toast: RwSignal<ToastState>,
    variables: crate::net::types::CreateAdvertisementVariables,
) {
    use crate::state::register::RegisterEffect;

    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_advertisement(&variables).await;
        if let Err(message) = &result {
            log::warn!("advertisement create failed: {message}");
        }
        let mut effect = None;
        form.update(|f| effect = f.resolve_create(result));
        match effect {
            Some(RegisterEffect::Reload) => crate::util::reload::reload_page(),
            Some(RegisterEffect::NotifyError(message)) => toast.update(|t| t.error(message)),
            None => {}
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit_create(
    form: RwSignal<RegisterFormState>,
    _toast: RwSignal<ToastState>,
    _variables: crate::net::types::CreateAdvertisementVariables,
) {
    form.update(|f| f.submitting = false);
}

#[cfg(feature = "hydrate")]
fn submit_update(
    form: RwSignal<RegisterFormState>,
    toast: RwSignal<ToastState>,
    variables: crate::net::types::UpdateAdvertisementVariables,
) {
    use crate::state::register::RegisterEffect;

    leptos::task::spawn_local(async move {
        let result = crate::net::api::update_advertisement(&variables).await;
        if let Err(message) = &result {
            log::warn!("advertisement update failed: {message}");
        }
        let mut effect = None;
        form.update(|f| effect = f.resolve_update(result));
        match effect {
            Some(RegisterEffect::Reload) => crate::util::reload::reload_page(),
            Some(RegisterEffect::NotifyError(message)) => toast.update(|t| t.error(message)),
            None => {}
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit_update(
    form: RwSignal<RegisterFormState>,
    _toast: RwSignal<ToastState>,
    _variables: crate::net::types::UpdateAdvertisementVariables,
) {
    form.update(|f| f.submitting = false);
}
