//! Advertisement entry card with its inline action menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one committed record plus the menu -> edit/delete flows. All
//! transitions go through the `state::entry` reducer; this component only
//! dispatches events, executes the returned commands, and mirrors the
//! current `EntryUi` mode into markup.

use leptos::prelude::*;

use crate::net::types::{AdvertisementKind, AdvertisementRecord};
use crate::state::ads::AdsState;
use crate::state::entry::{EntryCommand, EntryEvent, EntryState, EntryUi, FieldEdit};
use crate::state::toast::ToastState;

/// One advertisement row in the management list.
#[component]
pub fn AdvertisementEntry(record: AdvertisementRecord) -> impl IntoView {
    let ads = expect_context::<RwSignal<AdsState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let entry = RwSignal::new(EntryState::new(record));

    let submitting = move || matches!(entry.get().ui, EntryUi::Submitting(_));
    let draft_name = move || entry.get().draft.map(|d| d.name).unwrap_or_default();
    let draft_kind = move || entry.get().draft.map(|d| d.kind).unwrap_or_default();
    let draft_start = move || entry.get().draft.map(|d| d.start_date).unwrap_or_default();
    let draft_end = move || entry.get().draft.map(|d| d.end_date).unwrap_or_default();

    view! {
        <div class="ad-entry" data-testid="AdEntry">
            <Show when=move || entry.get().committed.has_media()>
                <video
                    class="ad-entry__media"
                    data-testid="media"
                    src=move || entry.get().committed.media_url
                    muted=true
                ></video>
            </Show>

            <span class="ad-entry__name">{move || entry.get().committed.name}</span>
            <span class="ad-entry__type">{move || entry.get().committed.kind.as_str()}</span>
            <span class="ad-entry__dates">
                {move || entry.get().committed.start_date}
                " – "
                {move || entry.get().committed.end_date}
            </span>

            <button
                class="btn ad-entry__more"
                data-testid="moreiconbtn"
                aria-label="More options"
                disabled=submitting
                on:click=move |_| dispatch(entry, ads, toast, EntryEvent::ToggleMenu)
            >
                "⋮"
            </button>

            <Show when=move || entry.get().ui == EntryUi::MenuOpen>
                <div class="ad-entry__menu">
                    <button
                        class="btn ad-entry__menu-item"
                        data-testid="editBtn"
                        on:click=move |_| dispatch(entry, ads, toast, EntryEvent::SelectEdit)
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn ad-entry__menu-item"
                        data-testid="deletebtn"
                        on:click=move |_| dispatch(entry, ads, toast, EntryEvent::SelectDelete)
                    >
                        "Delete"
                    </button>
                </div>
            </Show>

            <Show when=move || entry.get().ui == EntryUi::ConfirmingDelete>
                <div class="dialog-backdrop" on:click=move |_| dispatch(entry, ads, toast, EntryEvent::CancelDelete)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2 data-testid="delete_title">"Delete Advertisement"</h2>
                        <p class="dialog__danger" data-testid="delete_body">
                            "This will permanently remove this advertisement."
                        </p>
                        <div class="dialog__actions">
                            <button
                                class="btn"
                                data-testid="delete_no"
                                on:click=move |_| dispatch(entry, ads, toast, EntryEvent::CancelDelete)
                            >
                                "No"
                            </button>
                            <button
                                class="btn btn--danger"
                                data-testid="delete_yes"
                                on:click=move |_| dispatch(entry, ads, toast, EntryEvent::ConfirmDelete)
                            >
                                "Yes"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || entry.get().ui == EntryUi::Editing>
                <div class="dialog-backdrop" on:click=move |_| dispatch(entry, ads, toast, EntryEvent::CancelEdit)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Edit Advertisement"</h2>
                        <label class="dialog__label">
                            "Enter name of Advertisement"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=draft_name
                                on:input=move |ev| {
                                    dispatch(entry, ads, toast, EntryEvent::EditField(FieldEdit::Name(event_target_value(&ev))));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Type of Advertisement"
                            <select
                                class="dialog__input"
                                prop:value=move || draft_kind().as_str()
                                on:change=move |ev| {
                                    if let Some(kind) = AdvertisementKind::parse(&event_target_value(&ev)) {
                                        dispatch(entry, ads, toast, EntryEvent::EditField(FieldEdit::Kind(kind)));
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
                                prop:value=draft_start
                                on:input=move |ev| {
                                    dispatch(entry, ads, toast, EntryEvent::EditField(FieldEdit::StartDate(event_target_value(&ev))));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "End Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=draft_end
                                on:input=move |ev| {
                                    dispatch(entry, ads, toast, EntryEvent::EditField(FieldEdit::EndDate(event_target_value(&ev))));
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button
                                class="btn"
                                on:click=move |_| dispatch(entry, ads, toast, EntryEvent::CancelEdit)
                            >
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                data-testid="addonupdate"
                                disabled=submitting
                                on:click=move |_| dispatch(entry, ads, toast, EntryEvent::SubmitUpdate)
                            >
                                "Save Changes"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Feed one event through the reducer and execute the resulting command.
fn dispatch(entry: RwSignal<EntryState>, ads: RwSignal<AdsState>, toast: RwSignal<ToastState>, event: EntryEvent) {
    let mut command = None;
    entry.update(|state| command = state.apply(event));
    match command {
        Some(EntryCommand::Delete(variables)) => submit_delete(entry, ads, toast, variables),
        Some(EntryCommand::Update(variables)) => submit_update(entry, ads, toast, variables),
        Some(EntryCommand::RemoveFromList { id }) => {
            ads.update(|state| state.remove_ad(&id));
        }
        Some(EntryCommand::NotifyError(message)) => {
            toast.update(|state| state.error(message));
        }
        None => {}
    }
}

#[cfg(feature = "hydrate")]
fn submit_delete(
    entry: RwSignal<EntryState>,
    ads: RwSignal<AdsState>,
    toast: RwSignal<ToastState>,
    variables: crate::net::types::DeleteAdvertisementVariables,
) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::delete_advertisement(&variables).await;
        if let Err(message) = &result {
            log::warn!("advertisement delete failed: {message}");
        }
        dispatch(entry, ads, toast, EntryEvent::DeleteResolved(result));
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit_delete(
    _entry: RwSignal<EntryState>,
    _ads: RwSignal<AdsState>,
    _toast: RwSignal<ToastState>,
    _variables: crate::net::types::DeleteAdvertisementVariables,
) {
}

#[cfg(feature = "hydrate")]
fn submit_update(
    entry: RwSignal<EntryState>,
    ads: RwSignal<AdsState>,
    toast: RwSignal<ToastState>,
    variables: crate::net::types::UpdateAdvertisementVariables,
) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::update_advertisement(&variables).await;
        if let Err(message) = &result {
            log::warn!("advertisement update failed: {message}");
        }
        dispatch(entry, ads, toast, EntryEvent::UpdateResolved(result));
        // Keep the owning list in sync with the committed record.
        let committed = entry.get_untracked().committed.clone();
        ads.update(|state| state.replace_ad(committed));
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit_update(
    _entry: RwSignal<EntryState>,
    _ads: RwSignal<AdsState>,
    _toast: RwSignal<ToastState>,
    _variables: crate::net::types::UpdateAdvertisementVariables,
) {
}
