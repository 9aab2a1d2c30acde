// Validation Module - field-level validation with nested paths
use std::fmt;

use serde::{Deserialize, Serialize};

mod validators;

pub use validators::{FieldValidator, RangeValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field path
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            let error = &self.errors[0];
            write!(f, "Validation failed: {}: {}", error.field, error.message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error, addressed by a dotted path such as
/// `escalation.level2.triggerPercent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collects field errors while walking a value, prefixing nested fields
/// with the path of the enclosing object.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    path: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn qualified(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else if field.is_empty() {
            self.path.join(".")
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    /// Add an error for a field relative to the current path
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        let field = self.qualified(field);
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a reusable validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
    }

    /// Validate a numeric range (inclusive on both ends)
    pub fn validate_range<T>(&mut self, field: &str, value: T, min: T, max: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value < min || value > max {
            self.add_error(field, format!("must be between {} and {}", min, max));
        }
    }

    /// Validate maximum value
    pub fn validate_max<T>(&mut self, field: &str, value: T, max: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value > max {
            self.add_error(field, format!("must not exceed {}", max));
        }
    }

    /// Validate that `lower` is strictly below `upper`
    pub fn validate_less_than<T>(&mut self, field: &str, lower: T, upper: T, upper_name: &str)
    where
        T: PartialOrd + fmt::Display,
    {
        if lower >= upper {
            self.add_error(field, format!("must be less than {} ({})", upper_name, upper));
        }
    }

    /// Validate string is not empty after trimming
    pub fn validate_not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
    }

    /// Validate collection is not empty
    pub fn validate_non_empty_collection<T>(&mut self, field: &str, collection: &[T]) {
        if collection.is_empty() {
            self.add_error(field, "must contain at least 1 item");
        }
    }

    /// Validate with nested context
    pub fn validate_nested<F>(&mut self, field: &str, f: F)
    where
        F: FnOnce(&mut Validator),
    {
        self.path.push(field.to_string());
        f(self);
        self.path.pop();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_are_prefixed() {
        let mut validator = Validator::new();
        validator.validate_nested("escalation", |v| {
            v.validate_nested("level2", |v| {
                v.validate_range("triggerPercent", 120, 0, 100);
            });
        });
        validator.validate_not_empty("name", "   ");

        let err = validator.finalize().unwrap_err();
        assert_eq!(err.error_count(), 2);
        assert_eq!(err.errors[0].field, "escalation.level2.triggerPercent");
        assert_eq!(err.errors[0].message, "must be between 0 and 100");
        assert_eq!(err.errors[1].field, "name");
    }

    #[test]
    fn empty_field_name_addresses_the_enclosing_object() {
        let mut validator = Validator::new();
        validator.validate_nested("businessHours", |v| v.add_error("", "invalid window"));
        let err = validator.finalize().unwrap_err();
        assert_eq!(err.errors[0].field, "businessHours");
    }

    #[test]
    fn less_than_rejects_equal_values() {
        let mut validator = Validator::new();
        validator.validate_less_than("level1", 75, 75, "level2");
        assert!(validator.has_errors());

        let mut validator = Validator::new();
        validator.validate_less_than("level1", 50, 75, "level2");
        assert!(validator.finalize().is_ok());
    }

    #[test]
    fn display_lists_every_error() {
        let mut err = ValidationError::field("a", "bad");
        err.merge(ValidationError::field("b", "worse"));
        assert_eq!(err.to_string(), "Validation failed with 2 errors: a: bad; b: worse");
        assert_eq!(err.field_errors("b").len(), 1);
    }
}
