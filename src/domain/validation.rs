//! Request validation helpers.

use validator::{Validate, ValidationErrors};

/// Validate `request`, returning one message per violated rule.
///
/// Messages are sorted by field name so the order is stable across runs.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), Vec<String>> {
    request
        .validate()
        .map_err(|errors| validation_messages(&errors))
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}
