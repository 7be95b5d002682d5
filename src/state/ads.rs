//! Advertisement-list state for the management page.
//!
//! DESIGN
//! ======
//! The list owns record membership: entry components report removals and
//! committed updates through the commands their reducer emits, and this
//! model applies them. Separating list state from per-entry state keeps
//! the entry lifecycle testable in isolation.

#[cfg(test)]
#[path = "ads_test.rs"]
mod ads_test;

use crate::net::types::AdvertisementRecord;

/// Shared advertisement list state for the current organization.
///
/// Fetching (and its loading/error bookkeeping) belongs to the hosting
/// portal; this model only owns membership.
#[derive(Clone, Debug, Default)]
pub struct AdsState {
    pub items: Vec<AdvertisementRecord>,
}

impl AdsState {
    /// Remove the record with the given id, if present.
    pub fn remove_ad(&mut self, id: &str) {
        self.items.retain(|ad| ad.id != id);
    }

    /// Replace the stored record matching the given record's id.
    ///
    /// Unknown ids are ignored; insertion is the backend's job via the
    /// registration flow.
    pub fn replace_ad(&mut self, record: AdvertisementRecord) {
        if let Some(slot) = self.items.iter_mut().find(|ad| ad.id == record.id) {
            *slot = record;
        }
    }
}
