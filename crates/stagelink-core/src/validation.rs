//! Required-field validation for forms.

use crate::error::{Result, StagelinkError};

/// A single form input as seen by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
    /// Display mark set by [`validate_required`].
    pub invalid: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required,
            invalid: false,
        }
    }

    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, true)
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, false)
    }
}

/// Returns true iff every required field has a non-blank value.
///
/// Marks each field valid or invalid as a side effect.
pub fn validate_required(fields: &mut [Field]) -> bool {
    let mut all_valid = true;
    for field in fields.iter_mut() {
        field.invalid = field.required && field.value.trim().is_empty();
        if field.invalid {
            all_valid = false;
        }
    }
    all_valid
}

/// Runs [`validate_required`] and turns a failure into `ValidationFailed`.
pub fn ensure_required(fields: &mut [Field]) -> Result<()> {
    if validate_required(fields) {
        return Ok(());
    }
    Err(StagelinkError::validation(
        fields.iter().filter(|f| f.invalid).map(|f| f.name.clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_empty_required_field() {
        let mut fields = vec![
            Field::required("date", "2025-01-01"),
            Field::required("budget", "   "),
            Field::required("location", "Lagos"),
        ];
        assert!(!validate_required(&mut fields));
        let invalid: Vec<_> = fields.iter().filter(|f| f.invalid).map(|f| f.name.as_str()).collect();
        assert_eq!(invalid, ["budget"]);
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut fields = vec![Field::required("date", "x"), Field::optional("notes", "")];
        assert!(validate_required(&mut fields));
        assert!(fields.iter().all(|f| !f.invalid));
    }

    #[test]
    fn test_revalidation_clears_marks() {
        let mut fields = vec![Field::required("date", "")];
        assert!(!validate_required(&mut fields));
        fields[0].value = "2025-01-01".to_string();
        assert!(validate_required(&mut fields));
        assert!(!fields[0].invalid);
    }

    #[test]
    fn test_ensure_required_reports_names() {
        let mut fields = vec![Field::required("service", ""), Field::required("date", "")];
        let err = ensure_required(&mut fields).unwrap_err();
        assert_eq!(err, StagelinkError::validation(["service", "date"]));
    }
}
