//! Provider component that scopes dark mode state to a subtree.

#[cfg(test)]
#[path = "dark_mode_provider_test.rs"]
mod dark_mode_provider_test;

use leptos::prelude::*;

use crate::state::context::provide_dark_mode;

/// Owns the dark mode store for `children`.
///
/// `default_dark` only applies when no preference has been saved yet. The
/// injected style node is removed when this component unmounts.
#[component]
pub fn DarkModeProvider(
    /// Initial mode when storage holds no preference.
    #[prop(optional)]
    default_dark: bool,
    children: Children,
) -> impl IntoView {
    provide_dark_mode(default_dark);
    children()
}
