//! # darkmode
//!
//! Leptos dark mode add-on: a provider that tracks a persisted boolean, a
//! toggle button, and a generated global stylesheet that recolors the page
//! while leaving `no-dark-mode` subtrees untouched.
//!
//! ```ignore
//! view! {
//!     <DarkModeProvider default_dark=true>
//!         <DarkModeToggle class="mb-4"/>
//!         <div class="no-dark-mode bg-blue-100">"keeps its colors"</div>
//!     </DarkModeProvider>
//! }
//! ```

pub mod app;
pub mod components;
pub mod error;
pub mod state;
pub mod util;

pub use components::dark_mode_provider::DarkModeProvider;
pub use components::dark_mode_toggle::DarkModeToggle;
pub use error::DarkModeError;
pub use state::context::{DarkMode, try_use_dark_mode, use_dark_mode};
pub use state::mode::OPT_OUT_CLASS;

/// WASM entry point: installs console logging and hydrates the demo app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
