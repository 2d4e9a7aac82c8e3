//! Form field value objects

use super::validation::ValidationError;

/// A single input field: its text, validity and error-message slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    #[allow(dead_code)]
    pub name: String,
    pub label: String,
    /// Rendered masked (passwords)
    pub is_secret: bool,
    value: String,
    valid: bool,
    error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            is_secret: false,
            value: String::new(),
            valid: false,
            error: None,
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Get the raw value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Get the value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record the outcome of validating this field.
    ///
    /// `None` means the field is empty: invalid, but no message is shown.
    pub fn set_validity(&mut self, outcome: Option<Result<(), ValidationError>>) {
        match outcome {
            None => {
                self.valid = false;
                self.error = None;
            }
            Some(Ok(())) => {
                self.valid = true;
                self.error = None;
            }
            Some(Err(e)) => {
                self.valid = false;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
