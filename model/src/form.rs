// =============================================================================
// Form Engine: Required-Field Validation
// =============================================================================
//
// validate() walks every required field of a form in document order:
//
//   - blank (empty or whitespace-only)  -> clear, then annotate with the
//                                          required message + invalid state
//   - filled                            -> clear any annotation
//
// Clearing always precedes annotating, so a field never carries more than
// one error no matter how often validation re-runs. The annotation target
// is a trait so the DOM layer can render into the page and tests can
// render into memory.
//
// =============================================================================

use wirip_shared::validation::check;

/// Where field errors are rendered.
pub trait FieldAnnotations {
    /// Remove the field's error annotation and invalid state, if present.
    fn clear_error(&mut self, field: usize);
    /// Add an error annotation and the invalid state to the field.
    fn add_error(&mut self, field: usize, message: &str);
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    /// Indices of fields that failed, in document order.
    pub invalid: Vec<usize>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Validate the current values of a form's required fields, updating
/// `annotations` as a side effect.
pub fn validate_required<S, A>(values: &[S], annotations: &mut A) -> FormReport
where
    S: AsRef<str>,
    A: FieldAnnotations + ?Sized,
{
    let mut invalid = Vec::new();

    for (index, value) in values.iter().enumerate() {
        annotations.clear_error(index);
        if let Err(message) = check(value.as_ref()).required().finish() {
            annotations.add_error(index, &message);
            invalid.push(index);
        }
    }

    FormReport { invalid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirip_shared::validation::REQUIRED_MESSAGE;

    /// In-memory stand-in for the page: every annotation ever attached to
    /// each field, so duplicates would be visible.
    #[derive(Default)]
    struct Rendered {
        errors: Vec<Vec<String>>,
        invalid_class: Vec<bool>,
    }

    impl Rendered {
        fn with_fields(n: usize) -> Self {
            Self {
                errors: vec![Vec::new(); n],
                invalid_class: vec![false; n],
            }
        }
    }

    impl FieldAnnotations for Rendered {
        fn clear_error(&mut self, field: usize) {
            self.errors[field].clear();
            self.invalid_class[field] = false;
        }

        fn add_error(&mut self, field: usize, message: &str) {
            self.errors[field].push(message.to_string());
            self.invalid_class[field] = true;
        }
    }

    #[test]
    fn test_blank_field_gets_single_error() {
        let mut page = Rendered::with_fields(2);
        let report = validate_required(&["", "ok"], &mut page);

        assert!(!report.is_valid());
        assert_eq!(report.invalid, vec![0]);
        assert_eq!(page.errors[0], vec![REQUIRED_MESSAGE.to_string()]);
        assert!(page.invalid_class[0]);
        assert!(page.errors[1].is_empty());
        assert!(!page.invalid_class[1]);
    }

    #[test]
    fn test_revalidate_after_fix_clears_errors() {
        let mut page = Rendered::with_fields(2);
        validate_required(&["", "ok"], &mut page);

        let report = validate_required(&["filled", "ok"], &mut page);
        assert!(report.is_valid());
        assert!(page.errors.iter().all(|e| e.is_empty()));
        assert!(page.invalid_class.iter().all(|c| !c));
    }

    #[test]
    fn test_repeated_failures_never_stack() {
        let mut page = Rendered::with_fields(1);
        for _ in 0..5 {
            validate_required(&["   "], &mut page);
        }
        assert_eq!(page.errors[0].len(), 1);
    }

    #[test]
    fn test_no_required_fields_is_valid() {
        let mut page = Rendered::default();
        let values: [&str; 0] = [];
        assert!(validate_required(&values, &mut page).is_valid());
    }
}
