use thiserror::Error;

/// Failures the page behaviours can run into. None of these reach the
/// user as an exception: handlers log them and degrade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
