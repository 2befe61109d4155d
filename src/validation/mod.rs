//! Record validation: pure rule functions attached to fields as explicit
//! lists, run by an accumulating pipeline.
//!
//! Every rule on every field is evaluated; failures never short-circuit
//! and come back to the caller as data, not panics. A record is only
//! accepted by the persistence layer once `validate` comes back clean.

pub mod rules;

use std::fmt;

/// A single validation failure on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated validation failures for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-failure set, for checks resolved outside the field pipeline
    /// (e.g. the client-name uniqueness check at the persistence boundary).
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Runs the list of rules attached to `field`, recording every failure
    /// in declaration order.
    pub fn field<T: ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        rules: &[&dyn Fn(&T) -> Result<(), String>],
    ) {
        for rule in rules {
            if let Err(message) = rule(value) {
                self.push(field, message);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// True when at least one failure was recorded against `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// All messages recorded against `field`, in declaration order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when clean, otherwise the accumulated failures.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A record that knows the validator lists attached to its fields.
pub trait Validate {
    /// Runs every attached validator and returns all failures at once.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::rules::{max_length, required, starts_with_uppercase, with_message};
    use super::*;

    #[test]
    fn clean_pipeline_yields_ok() {
        let mut errors = ValidationErrors::new();
        errors.field("title", "Valid", &[&required, &starts_with_uppercase]);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn failures_accumulate_across_rules_and_fields() {
        let mut errors = ValidationErrors::new();
        errors.field("title", "", &[&required, &starts_with_uppercase]);
        errors.field("description", "toolong", &[&max_length(3)]);
        let errors = errors.into_result().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains("title"));
        assert!(errors.contains("description"));
    }

    #[test]
    fn later_rules_still_run_after_a_failure() {
        let mut errors = ValidationErrors::new();
        errors.field(
            "name",
            "x",
            &[
                &with_message("too long", max_length(0)),
                &with_message("not uppercase", starts_with_uppercase),
            ],
        );
        let errors = errors.into_result().unwrap_err();
        let messages: Vec<_> = errors.messages_for("name").collect();
        assert_eq!(messages, vec!["too long", "not uppercase"]);
    }

    #[test]
    fn display_lists_field_and_message_pairs() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Client name is required.");
        errors.push("contact_email", "Invalid email address.");
        assert_eq!(
            errors.to_string(),
            "validation failed: name: Client name is required.; \
             contact_email: Invalid email address."
        );
    }

    #[test]
    fn single_builds_a_one_failure_set() {
        let errors = ValidationErrors::single("name", "A client with this name already exists.");
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("name"));
    }
}
