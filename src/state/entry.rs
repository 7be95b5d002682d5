//! Lifecycle state machine for one advertisement entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! An entry is a card with an inline action menu. The user path is
//! view -> menu -> edit/delete -> submit -> back to view, with error
//! branches that surface a toast and leave the committed record intact.
//!
//! DESIGN
//! ======
//! UI mode is one explicit enum rather than a pair of booleans, so
//! impossible combinations (menu open while submitting, editing while
//! confirming a delete) cannot be represented. `apply` is a pure reducer:
//! it mutates the model and returns the side effect the view layer must
//! execute, which keeps every transition unit-testable without a DOM.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use crate::net::types::{AdvertisementRecord, DeleteAdvertisementVariables, UpdateAdvertisementVariables};
use crate::util::diff::changed_fields;

/// Which mutation is currently in flight for this entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Delete,
    Update,
}

/// UI mode of an advertisement entry.
///
/// Exactly one mode is active at a time; while `Submitting` all user
/// events are ignored, which is what bounds the entry to one outstanding
/// mutation without any locking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryUi {
    /// Plain card display.
    #[default]
    Viewing,
    /// The more-options dropdown is open.
    MenuOpen,
    /// The delete confirmation prompt is showing.
    ConfirmingDelete,
    /// The edit form is open over a draft copy of the record.
    Editing,
    /// A mutation is in flight; controls are disabled.
    Submitting(MutationKind),
}

/// In-progress edited copy of a record, not yet committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvertisementDraft {
    pub name: String,
    pub kind: crate::net::types::AdvertisementKind,
    pub start_date: String,
    pub end_date: String,
}

impl AdvertisementDraft {
    /// Snapshot the committed record into an editable draft.
    pub fn from_record(record: &AdvertisementRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            start_date: record.start_date.clone(),
            end_date: record.end_date.clone(),
        }
    }
}

/// A single draft field edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Kind(crate::net::types::AdvertisementKind),
    StartDate(String),
    EndDate(String),
}

/// User- and network-driven events for the entry lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryEvent {
    /// More-options button clicked; opens or closes the dropdown.
    ToggleMenu,
    /// Edit selected from the dropdown.
    SelectEdit,
    /// Delete selected from the dropdown.
    SelectDelete,
    /// Delete confirmed in the prompt.
    ConfirmDelete,
    /// Delete prompt dismissed.
    CancelDelete,
    /// A draft field changed; client-side only, no network.
    EditField(FieldEdit),
    /// Edit form dismissed; the draft is discarded.
    CancelEdit,
    /// Edit form submitted.
    SubmitUpdate,
    /// The delete mutation resolved.
    DeleteResolved(Result<(), String>),
    /// The update mutation resolved. `Ok(None)` means the response body
    /// carried no usable payload.
    UpdateResolved(Result<Option<AdvertisementRecord>, String>),
}

/// Side effect the view layer must execute after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryCommand {
    /// Call the delete mutation with exactly these variables.
    Delete(DeleteAdvertisementVariables),
    /// Call the update mutation with these partial variables.
    Update(UpdateAdvertisementVariables),
    /// Remove this entry from the owning list.
    RemoveFromList { id: String },
    /// Surface a transient error notification.
    NotifyError(String),
}

/// Full state of one advertisement entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryState {
    /// Last confirmed, persisted record shown in view mode.
    pub committed: AdvertisementRecord,
    /// Current UI mode.
    pub ui: EntryUi,
    /// Editable snapshot, present only while editing or submitting an
    /// update.
    pub draft: Option<AdvertisementDraft>,
}

impl EntryState {
    pub fn new(committed: AdvertisementRecord) -> Self {
        Self {
            committed,
            ui: EntryUi::Viewing,
            draft: None,
        }
    }

    /// Apply one event, returning the side effect to execute, if any.
    pub fn apply(&mut self, event: EntryEvent) -> Option<EntryCommand> {
        // One outstanding mutation per entry: user events are dropped
        // while submitting, only resolution events get through.
        if matches!(self.ui, EntryUi::Submitting(_))
            && !matches!(event, EntryEvent::DeleteResolved(_) | EntryEvent::UpdateResolved(_))
        {
            return None;
        }

        match event {
            EntryEvent::ToggleMenu => {
                self.ui = match self.ui {
                    EntryUi::Viewing => EntryUi::MenuOpen,
                    EntryUi::MenuOpen | EntryUi::ConfirmingDelete => EntryUi::Viewing,
                    other => other,
                };
                None
            }
            EntryEvent::SelectEdit => {
                if self.ui == EntryUi::MenuOpen {
                    self.draft = Some(AdvertisementDraft::from_record(&self.committed));
                    self.ui = EntryUi::Editing;
                }
                None
            }
            EntryEvent::SelectDelete => {
                if self.ui == EntryUi::MenuOpen {
                    self.ui = EntryUi::ConfirmingDelete;
                }
                None
            }
            EntryEvent::ConfirmDelete => {
                self.ui = EntryUi::Submitting(MutationKind::Delete);
                Some(EntryCommand::Delete(DeleteAdvertisementVariables {
                    id: self.committed.id.clone(),
                }))
            }
            EntryEvent::CancelDelete => {
                if self.ui == EntryUi::ConfirmingDelete {
                    self.ui = EntryUi::Viewing;
                }
                None
            }
            EntryEvent::EditField(edit) => {
                if self.ui == EntryUi::Editing {
                    if let Some(draft) = self.draft.as_mut() {
                        match edit {
                            FieldEdit::Name(v) => draft.name = v,
                            FieldEdit::Kind(v) => draft.kind = v,
                            FieldEdit::StartDate(v) => draft.start_date = v,
                            FieldEdit::EndDate(v) => draft.end_date = v,
                        }
                    }
                }
                None
            }
            EntryEvent::CancelEdit => {
                if self.ui == EntryUi::Editing {
                    self.draft = None;
                    self.ui = EntryUi::Viewing;
                }
                None
            }
            EntryEvent::SubmitUpdate => {
                if self.ui != EntryUi::Editing {
                    return None;
                }
                let draft = self.draft.as_ref()?;
                let variables = changed_fields(&self.committed, draft);
                self.ui = EntryUi::Submitting(MutationKind::Update);
                Some(EntryCommand::Update(variables))
            }
            EntryEvent::DeleteResolved(result) => {
                self.ui = EntryUi::Viewing;
                match result {
                    // Removal from the list is the owning collaborator's
                    // job; the command tells it which entry is gone.
                    Ok(()) => Some(EntryCommand::RemoveFromList {
                        id: self.committed.id.clone(),
                    }),
                    Err(message) => Some(EntryCommand::NotifyError(message)),
                }
            }
            EntryEvent::UpdateResolved(result) => {
                self.ui = EntryUi::Viewing;
                self.draft = None;
                match result {
                    Ok(Some(record)) => {
                        self.commit(record);
                        None
                    }
                    // Malformed success body: fail silently, keep the
                    // prior record.
                    Ok(None) => None,
                    Err(message) => Some(EntryCommand::NotifyError(message)),
                }
            }
        }
    }

    /// Replace the committed record with a mutation response record.
    ///
    /// Mutation responses omit `organizationId` (and sometimes
    /// `mediaUrl`), so immutable identity fields are preserved from the
    /// previous committed copy when the response leaves them empty.
    fn commit(&mut self, mut record: AdvertisementRecord) {
        if record.organization_id.is_empty() {
            record.organization_id = self.committed.organization_id.clone();
        }
        self.committed = record;
    }
}
