//! Shared dark mode state.
//!
//! DESIGN
//! ======
//! `mode` is the plain store with no framework types; `context` wraps it in
//! Leptos reactivity and context so components can reach it.

pub mod context;
pub mod mode;
