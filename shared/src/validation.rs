// =============================================================================
// Field Checks
// =============================================================================
//
// A field value runs through a chain of checks; the first failure wins and
// later checks are skipped:
//
//     check(value).required().finish()   // Result<(), String>
//
// Forms on this site only mark fields `required`, so that is the only check.
//
// =============================================================================

/// Message shown under a required field left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Fails if the value is empty or whitespace only.
pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(REQUIRED_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

pub struct FieldCheck<'a> {
    value: &'a str,
    first_error: Option<String>,
}

pub fn check(value: &str) -> FieldCheck<'_> {
    FieldCheck {
        value,
        first_error: None,
    }
}

impl FieldCheck<'_> {
    pub fn required(mut self) -> Self {
        if self.first_error.is_none() {
            self.first_error = required(self.value).err();
        }
        self
    }

    pub fn finish(self) -> Result<(), String> {
        match self.first_error {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}
