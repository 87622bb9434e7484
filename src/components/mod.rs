//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read/write dark mode state through the Leptos context set up
//! by `DarkModeProvider`.

pub mod dark_mode_provider;
pub mod dark_mode_toggle;
