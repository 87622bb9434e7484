//! Error types for dark mode state and its browser backends.
//!
//! ERROR HANDLING
//! ==============
//! Only `MissingProvider` is meant to reach calling code. Storage and
//! document failures are logged by the store and otherwise ignored, since
//! losing a preference write must never break the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DarkModeError {
    #[error("use_dark_mode must be used within a DarkModeProvider")]
    MissingProvider,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("document error: {0}")]
    Document(String),
}
