//! Write-view validation rules
//!
//! Two checks exist. Presence applies to create only: every declared field
//! must be sent and non-empty. Length caps apply to every write path, and
//! only to the fields actually sent.

use super::error::{FieldError, ValidationError};
use super::payload::{StorePayload, WriteField};
use validator::Validate;

/// Require every write field to be present and non-empty.
///
/// Fails on the first offending field, in declaration order.
pub fn require_all_fields(payload: &StorePayload) -> Result<(), ValidationError> {
    match WriteField::ALL
        .into_iter()
        .find(|field| payload.get(*field).is_none_or(str::is_empty))
    {
        Some(field) => Err(ValidationError::MissingField {
            field: field.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

/// Check the length caps of the fields present in `payload`.
pub fn check_constraints(payload: &StorePayload) -> Result<(), ValidationError> {
    let Err(errors) = payload.validate() else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let violations: Vec<FieldError> = WriteField::ALL
        .into_iter()
        .filter_map(|field| {
            by_field.get(field.struct_field()).map(|errs| (field, *errs))
        })
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.as_str().to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Field \"{}\" is invalid", field.as_str())),
            })
        })
        .collect();

    Err(ValidationError::FieldErrors(violations))
}
