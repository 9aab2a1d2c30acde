// Field Validators - reusable validation components
use std::fmt::Display;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for RangeValidator<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T> {
    /// Create a range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None }
    }

    /// Create a range validator with inclusive bounds
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) if value < min || value > max => {
                Err(format!("must be between {} and {}", min, max))
            }
            (Some(min), None) if value < min => Err(format!("must be at least {}", min)),
            (None, Some(max)) if value > max => Err(format!("must not exceed {}", max)),
            _ => Ok(()),
        }
    }
}

/// String validator with length and character-class constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    max_length: Option<usize>,
    not_empty: bool,
    identifier: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    pub fn new() -> Self {
        Self { max_length: None, not_empty: false, identifier: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set maximum length in characters
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Only accept lowercase ASCII letters, digits and `_` / `-`
    pub fn identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };

        if self.not_empty && val.is_empty() {
            return Err("cannot be empty".to_string());
        }

        if let Some(max) = self.max_length {
            if val.chars().count() > max {
                return Err(format!("must not exceed {} characters", max));
            }
        }

        if self.identifier
            && !val
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err("must contain only lowercase letters, digits, '_' or '-'".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        <Self as FieldValidator<str>>::validate(self, value.as_str())
    }
}
