//! Button that flips dark mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless leaf: the label, icon, and classes are derived from the
//! provider's signal on every render.

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

use leptos::prelude::*;

use crate::state::context::use_dark_mode;

const BASE_CLASS: &str = "p-2 rounded-lg transition-colors";
const DARK_CLASS: &str = "bg-gray-800 text-yellow-400 hover:bg-gray-700";
const LIGHT_CLASS: &str = "bg-gray-100 text-gray-800 hover:bg-gray-200";

/// Class list for the toggle button; `extra` is appended as given.
pub fn button_class(is_dark: bool, extra: &str) -> String {
    let mode = if is_dark { DARK_CLASS } else { LIGHT_CLASS };
    format!("{BASE_CLASS} {mode} {extra}")
}

/// Sun while dark (click for light), moon while light.
pub fn icon(is_dark: bool) -> &'static str {
    if is_dark { "☀" } else { "☾" }
}

/// Dark mode toggle button. Must be rendered inside a `DarkModeProvider`.
#[component]
pub fn DarkModeToggle(
    /// Extra classes appended to the button.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let dark_mode = use_dark_mode();

    view! {
        <button
            class=move || button_class(dark_mode.is_dark(), &class)
            on:click=move |_| dark_mode.toggle_mode()
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
        >
            {move || icon(dark_mode.is_dark())}
        </button>
    }
}
