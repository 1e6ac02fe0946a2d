//! Item entry form and client-side validation.
//!
//! # Design
//! The form is an explicit state machine: `Empty -> Editing -> {Valid,
//! Invalid}`. Each field has its own setter instead of a single dynamic
//! change handler, so a checkbox can never be confused with a text input at
//! runtime. The one enforced rule is that the title must be non-empty after
//! trimming; an invalid form blocks submission and flags the offending
//! field, which guarantees a blank title never reaches the network.
//!
//! In batch mode, validated entries accumulate in a `PendingBatch` until the
//! user submits them in one request.

use crate::types::CreateItem;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Editing,
    Valid,
    Invalid,
}

/// A failed validation, naming the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    TitleRequired,
}

/// Working state for a single item being entered.
#[derive(Debug, Clone)]
pub struct ItemForm {
    title: String,
    description: String,
    is_active: bool,
    state: FormState,
    error: Option<FormError>,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            is_active: true,
            state: FormState::Empty,
            error: None,
        }
    }
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = value.to_string();
        self.touch();
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = value.to_string();
        self.touch();
    }

    pub fn set_is_active(&mut self, value: bool) {
        self.is_active = value;
        self.touch();
    }

    /// Any edit moves the form to `Editing` and clears a stale error flag.
    fn touch(&mut self) {
        self.state = FormState::Editing;
        self.error = None;
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run validation and settle into `Valid` or `Invalid`.
    pub fn validate(&mut self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            self.error = Some(FormError::TitleRequired);
            self.state = FormState::Invalid;
            Err(FormError::TitleRequired)
        } else {
            self.error = None;
            self.state = FormState::Valid;
            Ok(())
        }
    }

    /// Validate and, on success, yield the pending item and reset the form
    /// to `Empty`. An invalid form stays put with the error flagged.
    pub fn take(&mut self) -> Result<CreateItem, FormError> {
        self.validate()?;
        let item = CreateItem {
            title: self.title.trim().to_string(),
            description: match self.description.trim() {
                "" => None,
                trimmed => Some(trimmed.to_string()),
            },
            is_active: self.is_active,
        };
        *self = Self::default();
        Ok(item)
    }
}

/// Validated entries waiting to be submitted as one batch create.
#[derive(Debug, Clone, Default)]
pub struct PendingBatch {
    entries: Vec<CreateItem>,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: CreateItem) {
        self.entries.push(item);
    }

    pub fn entries(&self) -> &[CreateItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain the batch for submission, leaving it empty.
    pub fn take(&mut self) -> Vec<CreateItem> {
        std::mem::take(&mut self.entries)
    }
}
