//! Request payloads checked against the entity schemas.
//!
//! Create and update bodies are validated before any storage write; the
//! failed case is reported as an ordered list of field-level issues. All
//! violations are collected instead of stopping at the first one.

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::dto::api::ValidationIssue;

pub mod cliente;
pub mod personal;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Body of the `DELETE` endpoints: just the identifier.
pub struct DeleteForm {
    pub id: i32,
}

/// Checks that a phone number parses and is valid for the MX region.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let parsed = phonenumber::parse(Some(phonenumber::country::Id::MX), value);
    match parsed {
        Ok(number) if phonenumber::is_valid(&number) => Ok(()),
        _ => {
            let mut error = ValidationError::new("telefono");
            error.message = Some("El teléfono no es válido".into());
            Err(error)
        }
    }
}

/// Flattens [`ValidationErrors`] into the wire-level issue list, sorted by
/// field name so the output is deterministic.
pub fn issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ValidationIssue {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valor inválido para {field}")),
            })
        })
        .collect();
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}
