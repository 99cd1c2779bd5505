//! Write-time rules for item fields.
//!
//! `name` and `description` must both be present, be JSON strings and be
//! non-empty. The same rules run on create and update.

use std::fmt;

use item_types::ItemPayload;
use serde_json::Value;

use crate::models::ItemFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    NotAString,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match self.problem {
            FieldProblem::Missing => write!(f, "{field}: {field} is required"),
            FieldProblem::NotAString => write!(f, "{field}: {field} must be a string"),
            FieldProblem::Empty => write!(f, "{field}: {field} must not be empty"),
        }
    }
}

/// Every field that failed, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn check_field(field: &'static str, value: Option<&Value>) -> Result<String, FieldError> {
    let problem = match value {
        None | Some(Value::Null) => FieldProblem::Missing,
        Some(Value::String(s)) if s.is_empty() => FieldProblem::Empty,
        Some(Value::String(s)) => return Ok(s.clone()),
        Some(_) => FieldProblem::NotAString,
    };
    Err(FieldError { field, problem })
}

pub fn validate_item(payload: &ItemPayload) -> Result<ItemFields, ValidationError> {
    let name = check_field("name", payload.name.as_ref());
    let description = check_field("description", payload.description.as_ref());

    match (name, description) {
        (Ok(name), Ok(description)) => Ok(ItemFields { name, description }),
        (name, description) => Err(ValidationError {
            errors: [name.err(), description.err()].into_iter().flatten().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ItemPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_two_non_empty_strings() {
        let fields = validate_item(&ItemPayload::new("Valid Item", "Description of test item"))
            .unwrap();
        assert_eq!(fields.name, "Valid Item");
        assert_eq!(fields.description, "Description of test item");
    }

    #[test]
    fn reports_both_missing_fields() {
        let err = validate_item(&ItemPayload::default()).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("description"));
        assert_eq!(
            err.to_string(),
            "Item validation failed: name: name is required, description: description is required"
        );
    }

    #[test]
    fn rejects_non_string_name() {
        let err = validate_item(&payload(json!({ "name": 123, "description": "Description" })))
            .unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError {
                field: "name",
                problem: FieldProblem::NotAString
            }]
        );
    }

    #[test]
    fn rejects_non_string_description() {
        let err = validate_item(&payload(json!({ "name": "Name", "description": ["x"] })))
            .unwrap_err();
        assert!(!err.has_field("name"));
        assert!(err.has_field("description"));
    }

    #[test]
    fn rejects_empty_strings() {
        let err = validate_item(&ItemPayload::new("", "Description")).unwrap_err();
        assert_eq!(err.errors[0].problem, FieldProblem::Empty);
        assert!(!err.has_field("description"));

        let err = validate_item(&ItemPayload::new("Name", "")).unwrap_err();
        assert!(err.has_field("description"));
        assert!(err.to_string().contains("description must not be empty"));
    }

    #[test]
    fn null_counts_as_missing() {
        let err = validate_item(&payload(json!({ "name": null, "description": "d" })))
            .unwrap_err();
        assert_eq!(err.errors[0].problem, FieldProblem::Missing);
    }
}
