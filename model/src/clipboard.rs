//! Copy-to-clipboard with a legacy fallback.
//!
//! The platform clipboard is tried first. If it is missing or rejects the
//! write, the backend's legacy path (hidden textarea + copy command) runs.
//! The caller only ever sees a bool.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::Result;

#[async_trait(?Send)]
pub trait ClipboardBackend {
    /// Write through the asynchronous clipboard API.
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Copy through a temporary editable element. Implementations must
    /// remove that element before returning, on success and on error.
    fn legacy_copy(&self, text: &str) -> Result<bool>;
}

pub async fn copy_with_fallback<B: ClipboardBackend + ?Sized>(backend: &B, text: &str) -> bool {
    match backend.write_text(text).await {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "clipboard api failed, trying legacy copy");
            match backend.legacy_copy(text) {
                Ok(copied) => copied,
                Err(err) => {
                    warn!(error = %err, "legacy copy failed");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Fake {
        api: Result<()>,
        legacy: Result<bool>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl Fake {
        fn new(api: Result<()>, legacy: Result<bool>) -> Self {
            Self {
                api,
                legacy,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClipboardBackend for Fake {
        async fn write_text(&self, _text: &str) -> Result<()> {
            self.calls.borrow_mut().push("api");
            self.api.clone()
        }

        fn legacy_copy(&self, _text: &str) -> Result<bool> {
            self.calls.borrow_mut().push("legacy");
            self.legacy.clone()
        }
    }

    fn denied() -> UiError {
        UiError::Clipboard("permission denied".to_string())
    }

    #[test]
    fn test_api_success_skips_fallback() {
        let fake = Fake::new(Ok(()), Ok(false));
        assert!(block_on(copy_with_fallback(&fake, "hi")));
        assert_eq!(*fake.calls.borrow(), vec!["api"]);
    }

    #[test]
    fn test_fallback_success() {
        let fake = Fake::new(Err(denied()), Ok(true));
        assert!(block_on(copy_with_fallback(&fake, "hi")));
        assert_eq!(*fake.calls.borrow(), vec!["api", "legacy"]);
    }

    #[test]
    fn test_fallback_reports_command_result() {
        let fake = Fake::new(Err(denied()), Ok(false));
        assert!(!block_on(copy_with_fallback(&fake, "hi")));
    }

    #[test]
    fn test_both_paths_failing_is_false_not_error() {
        let fake = Fake::new(Err(denied()), Err(UiError::Dom("no body".to_string())));
        assert!(!block_on(copy_with_fallback(&fake, "hi")));
    }
}
