//! Advertisement management page for the current organization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the registered advertisements as entry cards plus the register
//! launcher, and surfaces transient mutation notifications. List
//! fetching belongs to the hosting portal; this page renders whatever
//! the `AdsState` context holds.

#[cfg(test)]
#[path = "advertisements_test.rs"]
mod advertisements_test;

use leptos::prelude::*;

use crate::components::advertisement_entry::AdvertisementEntry;
use crate::components::advertisement_register::AdvertisementRegister;
use crate::components::icon::IconComponent;
use crate::state::ads::AdsState;
use crate::state::toast::ToastState;

/// Organization owning the listed advertisements.
///
/// Every record in the list belongs to the same organization, so the
/// first record's id is the page's. Empty until the portal has loaded
/// the list, which is why callers must read it reactively rather than
/// snapshot it at mount.
fn organization_id_of(state: &AdsState) -> String {
    state
        .items
        .first()
        .map(|ad| ad.organization_id.clone())
        .unwrap_or_default()
}

/// Advertisements page — entry list plus the register form launcher.
#[component]
pub fn AdvertisementsPage() -> impl IntoView {
    let ads = expect_context::<RwSignal<AdsState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let organization_id = Signal::derive(move || organization_id_of(&ads.get()));

    view! {
        <div class="ads-page">
            <header class="ads-page__header toolbar">
                <IconComponent name="Advertisement".to_owned()/>
                <span class="toolbar__title">"Advertisements"</span>
                <span class="toolbar__spacer"></span>
                <AdvertisementRegister organization_id=organization_id/>
            </header>

            <Show when=move || toast.get().message.is_some()>
                <div class="ads-page__toast ads-page__toast--error" role="status">
                    <span>{move || toast.get().message.unwrap_or_default()}</span>
                    <button class="btn" on:click=move |_| toast.update(ToastState::clear)>
                        "✕"
                    </button>
                </div>
            </Show>

            <div class="ads-page__list">
                {move || {
                    ads.get()
                        .items
                        .into_iter()
                        .map(|record| view! { <AdvertisementEntry record=record/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
