//! Registration form state for creating and editing advertisements.
//!
//! DESIGN
//! ======
//! The form model validates and resolves mutation results as plain
//! functions; the component only wires inputs to fields and executes the
//! returned effect. The form serves two modes: register builds the full
//! create payload, edit diffs the fields against the committed record so
//! an untouched form submits `{ id }` alone. A confirmed mutation resets
//! or closes the form and reloads the page so the hosting portal
//! re-fetches its list; a malformed success body does neither.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::types::{
    AdvertisementKind, AdvertisementRecord, CreateAdvertisementVariables, UpdateAdvertisementVariables,
};
use crate::state::entry::AdvertisementDraft;
use crate::util::diff::changed_fields;

/// Which mutation the form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Create a new advertisement.
    #[default]
    Register,
    /// Update an existing advertisement, pre-filled from its record.
    Edit,
}

/// Side effect the form component must execute after a mutation resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterEffect {
    /// Reload the page so the portal re-fetches the advertisement list.
    Reload,
    /// Surface a transient error notification.
    NotifyError(String),
}

/// Editable fields and flags of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub mode: FormMode,
    /// Whether the form dialog is open.
    pub open: bool,
    /// True while a mutation is in flight.
    pub submitting: bool,
    pub name: String,
    pub media_url: String,
    pub kind: AdvertisementKind,
    pub start_date: String,
    pub end_date: String,
    /// Committed record being edited; present only in edit mode and used
    /// as the diff baseline for the partial-update payload.
    pub committed: Option<AdvertisementRecord>,
}

impl RegisterFormState {
    /// Pre-fill the form from an existing record for edit mode.
    pub fn for_edit(record: &AdvertisementRecord) -> Self {
        Self {
            mode: FormMode::Edit,
            open: false,
            submitting: false,
            name: record.name.clone(),
            media_url: record.media_url.clone(),
            kind: record.kind,
            start_date: record.start_date.clone(),
            end_date: record.end_date.clone(),
            committed: Some(record.clone()),
        }
    }

    /// Validate fields before submission.
    ///
    /// Dates are `YYYY-MM-DD` strings, so lexicographic comparison is
    /// the calendar order.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for an empty name, a missing date,
    /// or an end date before the start date.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Advertisement name is required".to_owned());
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Start and end dates are required".to_owned());
        }
        if self.end_date < self.start_date {
            return Err("End date must not precede start date".to_owned());
        }
        Ok(())
    }

    /// Build the create-mutation variables for the given organization.
    pub fn create_variables(&self, organization_id: &str) -> CreateAdvertisementVariables {
        CreateAdvertisementVariables {
            organization_id: organization_id.to_owned(),
            name: self.name.trim().to_owned(),
            file: self.media_url.clone(),
            kind: self.kind,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }

    /// Build the update-mutation variables by diffing the current fields
    /// against the committed record. Returns `None` outside edit mode.
    ///
    /// An untouched form diffs to `{ id }` alone — the partial-update
    /// contract holds for the form exactly as it does for the entry.
    pub fn update_variables(&self) -> Option<UpdateAdvertisementVariables> {
        let committed = self.committed.as_ref()?;
        let draft = AdvertisementDraft {
            name: self.name.trim().to_owned(),
            kind: self.kind,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        };
        Some(changed_fields(committed, &draft))
    }

    /// Clear all editable fields and close the dialog.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold a resolved create mutation into the form.
    ///
    /// Well-formed success resets the form and asks for a reload;
    /// a success body without a usable payload leaves the form intact and
    /// does nothing; rejection keeps the fields and surfaces the error.
    pub fn resolve_create(&mut self, result: Result<Option<String>, String>) -> Option<RegisterEffect> {
        self.submitting = false;
        match result {
            Ok(Some(_id)) => {
                self.reset();
                Some(RegisterEffect::Reload)
            }
            Ok(None) => None,
            Err(message) => Some(RegisterEffect::NotifyError(message)),
        }
    }

    /// Fold a resolved update mutation into the form (edit mode).
    ///
    /// Well-formed success closes the dialog and asks for a reload so the
    /// portal re-fetches the updated record; a malformed success body is
    /// a silent no-op; rejection keeps the fields and surfaces the error.
    pub fn resolve_update(&mut self, result: Result<Option<AdvertisementRecord>, String>) -> Option<RegisterEffect> {
        self.submitting = false;
        match result {
            Ok(Some(_record)) => {
                self.open = false;
                Some(RegisterEffect::Reload)
            }
            Ok(None) => None,
            Err(message) => Some(RegisterEffect::NotifyError(message)),
        }
    }
}
