use serde::Serialize;

use super::types::{ApplicationSnapshot, Field, Region};

pub const NAME_MAX_LEN: usize = 120;

/// One field-level problem found before a submission starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

/// Validate a required text field with a max length (counted in characters).
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} é obrigatório"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} deve ter no máximo {max_len} caracteres"));
    }
    None
}

/// Validate a masked phone: something must have been typed.
pub fn validate_phone(value: &str, field_name: &str) -> Option<String> {
    if crate::phone::digits(value).is_empty() {
        return Some(format!("{field_name} é obrigatório"));
    }
    None
}

pub fn validate_region(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Selecione uma região".to_string());
    }
    if Region::from_label(value).is_none() {
        return Some("Selecione uma região válida".to_string());
    }
    None
}

/// Check an application, with the responsible party required only for minors.
pub fn validate_application(snapshot: &ApplicationSnapshot) -> Vec<FieldViolation> {
    let mut violations = vec![];
    let mut check = |field: Field, result: Option<String>| {
        if let Some(message) = result {
            violations.push(FieldViolation { field, message });
        }
    };

    check(
        Field::FullName,
        validate_required(&snapshot.full_name, Field::FullName.label(), NAME_MAX_LEN),
    );
    check(
        Field::Whatsapp,
        validate_phone(&snapshot.whatsapp, Field::Whatsapp.label()),
    );
    if snapshot.is_minor {
        check(
            Field::ResponsibleName,
            validate_required(
                &snapshot.responsible_name,
                Field::ResponsibleName.label(),
                NAME_MAX_LEN,
            ),
        );
        check(
            Field::ResponsiblePhone,
            validate_phone(&snapshot.responsible_phone, Field::ResponsiblePhone.label()),
        );
    }
    check(Field::Region, validate_region(&snapshot.region));

    violations
}
