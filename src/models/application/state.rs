use serde::{Deserialize, Serialize};

use super::types::{ApplicationForm, ApplicationSnapshot, Field, Region};
use super::validate::NAME_MAX_LEN;
use crate::phone;

/// Per-session values of the application form.
///
/// Lives in the session cookie between requests and is dropped once a
/// submission goes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub full_name: String,
    pub whatsapp: String,
    pub responsible_name: String,
    pub responsible_phone: String,
    pub region: String,
    pub is_minor: bool,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            whatsapp: String::new(),
            responsible_name: String::new(),
            responsible_phone: String::new(),
            region: String::new(),
            is_minor: true,
            is_submitting: false,
            error: None,
        }
    }
}

impl FormState {
    /// Replace a single field. Phone fields are masked, and an input over the
    /// digit cap leaves the previous value in place.
    pub fn update_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Whatsapp => &mut self.whatsapp,
            Field::ResponsibleName => &mut self.responsible_name,
            Field::ResponsiblePhone => &mut self.responsible_phone,
            Field::Region => &mut self.region,
        };
        *slot = if field.is_phone() {
            phone::apply_input(slot, value)
        } else {
            value.to_string()
        };
    }

    /// Apply every posted input, one structural update per field.
    pub fn apply_form(&mut self, form: &ApplicationForm) {
        self.update_field(Field::FullName, &form.full_name);
        self.update_field(Field::Whatsapp, &form.whatsapp);
        self.update_field(Field::ResponsibleName, &form.responsible_name);
        self.update_field(Field::ResponsiblePhone, &form.responsible_phone);
        self.update_field(Field::Region, &form.region);
        match form.is_minor.as_str() {
            "true" => self.is_minor = true,
            "false" => self.is_minor = false,
            _ => {}
        }
    }

    /// Responsible-party fields are kept; only whether they count changes.
    pub fn toggle_minor(&mut self) {
        self.is_minor = !self.is_minor;
    }

    /// Returns false when a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.error = None;
        true
    }

    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Copy small enough for the session cookie. Names over the length cap
    /// and unknown regions are blanked; the rest is kept as typed.
    pub fn for_session(&self) -> FormState {
        let mut stored = self.clone();
        for name in [&mut stored.full_name, &mut stored.responsible_name] {
            let trimmed = name.trim();
            *name = if trimmed.chars().count() > NAME_MAX_LEN {
                String::new()
            } else {
                trimmed.to_string()
            };
        }
        if Region::from_label(&stored.region).is_none() {
            stored.region.clear();
        }
        stored
    }

    pub fn snapshot(&self) -> ApplicationSnapshot {
        ApplicationSnapshot {
            full_name: self.full_name.clone(),
            whatsapp: self.whatsapp.clone(),
            is_minor: self.is_minor,
            responsible_name: self.responsible_name.clone(),
            responsible_phone: self.responsible_phone.clone(),
            region: self.region.clone(),
        }
    }
}
