//! Partial-update payload construction.
//!
//! DESIGN
//! ======
//! The update mutation carries only fields that differ from the last
//! committed record, so an untouched form submits `{ id }` alone and a
//! name-only edit never re-sends dates. Kept as a pure function so the
//! contract is unit-testable independent of rendering.

#[cfg(test)]
#[path = "diff_test.rs"]
mod diff_test;

use crate::net::types::{AdvertisementRecord, UpdateAdvertisementVariables};
use crate::state::entry::AdvertisementDraft;

/// Diff a draft against the committed record into update variables.
///
/// `id` is always included; `name`/`type`/`startDate`/`endDate` appear
/// only when the draft value differs from the committed one.
pub fn changed_fields(committed: &AdvertisementRecord, draft: &AdvertisementDraft) -> UpdateAdvertisementVariables {
    UpdateAdvertisementVariables {
        id: committed.id.clone(),
        name: (draft.name != committed.name).then(|| draft.name.clone()),
        kind: (draft.kind != committed.kind).then_some(draft.kind),
        start_date: (draft.start_date != committed.start_date).then(|| draft.start_date.clone()),
        end_date: (draft.end_date != committed.end_date).then(|| draft.end_date.clone()),
    }
}
