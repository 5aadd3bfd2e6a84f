//! Multi-field store that owns IME focus.
//!
//! At most one field is attached to the input method at a time. Focusing a
//! field detaches the previously focused one first; typed text and keys are
//! routed to whichever field is attached.

use std::collections::HashMap;

use crate::event::{EditKey, Modifiers};
use crate::field::{EditOutcome, TextField};
use crate::id::FieldId;

/// Why [`FieldStore::focus`] did not move focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusError {
    UnknownField(FieldId),
    /// The currently attached field's delegate refused to detach.
    DetachRefused(FieldId),
    /// The target field's delegate refused to attach.
    AttachRefused(FieldId),
}

impl std::fmt::Display for FocusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusError::UnknownField(id) => write!(f, "no field with id {}", id.as_raw()),
            FocusError::DetachRefused(id) => write!(f, "field {} refused to detach", id.as_raw()),
            FocusError::AttachRefused(id) => write!(f, "field {} refused to attach", id.as_raw()),
        }
    }
}

impl std::error::Error for FocusError {}

#[derive(Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, TextField>,
    attached: Option<FieldId>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field. Replacing the attached field drops focus.
    ///
    /// A field that arrives already attached takes focus only when no other
    /// field holds it; otherwise it is released and must go through
    /// [`focus`](Self::focus).
    pub fn insert(&mut self, id: FieldId, mut field: TextField) {
        if self.attached == Some(id) {
            self.attached = None;
        }
        if field.is_attached() {
            match self.attached {
                None => self.attached = Some(id),
                Some(owner) => {
                    log::debug!(
                        target: "edit_core.store",
                        "field {} inserted attached while {} has focus; released",
                        id.as_raw(),
                        owner.as_raw()
                    );
                    field.release_ime();
                }
            }
        }
        self.fields.insert(id, field);
    }

    pub fn remove(&mut self, id: FieldId) -> Option<TextField> {
        if self.attached == Some(id) {
            self.attached = None;
        }
        self.fields.remove(&id)
    }

    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn get(&self, id: FieldId) -> Option<&TextField> {
        self.fields.get(&id)
    }

    /// Mutable access for editing. Attach and detach through
    /// [`focus`](Self::focus) / [`blur`](Self::blur) so focus stays tracked.
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        self.fields.get_mut(&id)
    }

    /// The field currently attached to the input method.
    pub fn focused(&self) -> Option<FieldId> {
        self.attached
    }

    /// Attach `id`, detaching whichever field held focus before.
    ///
    /// Focusing the already focused field is a no-op.
    pub fn focus(&mut self, id: FieldId) -> Result<(), FocusError> {
        if !self.fields.contains_key(&id) {
            return Err(FocusError::UnknownField(id));
        }
        if self.attached == Some(id) {
            return Ok(());
        }

        if let Some(prev) = self.attached
            && let Some(field) = self.fields.get_mut(&prev)
        {
            if field.detach_ime() == EditOutcome::Rejected {
                return Err(FocusError::DetachRefused(prev));
            }
            self.attached = None;
        }

        let field = self
            .fields
            .get_mut(&id)
            .ok_or(FocusError::UnknownField(id))?;
        if field.attach_ime() == EditOutcome::Rejected {
            return Err(FocusError::AttachRefused(id));
        }
        self.attached = Some(id);
        log::debug!(target: "edit_core.store", "focus -> {}", id.as_raw());
        Ok(())
    }

    /// Detach the focused field, if any. Returns `false` if its delegate
    /// refused.
    pub fn blur(&mut self) -> bool {
        let Some(id) = self.attached else {
            return true;
        };
        if let Some(field) = self.fields.get_mut(&id)
            && field.detach_ime() == EditOutcome::Rejected
        {
            return false;
        }
        self.attached = None;
        log::debug!(target: "edit_core.store", "blur {}", id.as_raw());
        true
    }

    /// Route typed text to the focused field.
    pub fn dispatch_text(&mut self, text: &str) -> EditOutcome {
        self.dispatch(|field| field.handle_text(text))
    }

    /// Route a key to the focused field.
    pub fn dispatch_key(&mut self, key: EditKey, mods: Modifiers) -> EditOutcome {
        self.dispatch(|field| field.handle_key(key, mods))
    }

    fn dispatch(&mut self, f: impl FnOnce(&mut TextField) -> EditOutcome) -> EditOutcome {
        let Some(id) = self.attached else {
            return EditOutcome::Unchanged;
        };
        let Some(field) = self.fields.get_mut(&id) else {
            self.attached = None;
            return EditOutcome::Unchanged;
        };
        let outcome = f(field);
        // Submit and Escape may detach the field on their own.
        if !field.is_attached() {
            self.attached = None;
        }
        outcome
    }
}
