//! Leptos context wiring for the dark mode store.
//!
//! SYSTEM CONTEXT
//! ==============
//! A provider owns one `ModeStore` per mounted subtree. Descendants receive
//! a `Copy` handle through context: the store itself sits in a
//! `StoredValue`, and an `RwSignal` mirrors its boolean so views re-render
//! after the store has finished its side effects.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::DarkModeError;
use crate::state::mode::{self, ModeStore};
use crate::util::document::{DocumentHost, platform_document};
use crate::util::storage::{PreferenceStorage, platform_storage};

/// Handle to the nearest provider's dark mode state.
#[derive(Clone, Copy)]
pub struct DarkMode {
    is_dark: RwSignal<bool>,
    store: StoredValue<ModeStore>,
}

impl DarkMode {
    /// Current mode, tracked by the surrounding reactive scope.
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    /// Current mode without subscribing.
    pub fn is_dark_untracked(&self) -> bool {
        self.is_dark.get_untracked()
    }

    /// Flip the mode. Storage, root class, and styles are updated before
    /// the signal changes.
    pub fn toggle_mode(&self) {
        if let Some(next) = self.store.try_update_value(ModeStore::toggle) {
            self.is_dark.set(next);
        }
    }

    /// Bring the signal in line with the store, e.g. once hydration has
    /// finished with the server-rendered value.
    pub fn resync(&self) {
        if let Some(stored) = self.store.try_with_value(ModeStore::is_dark) {
            self.is_dark.set(stored);
        }
    }

    /// Force a specific mode.
    pub fn set_mode(&self, is_dark: bool) {
        if self.store.try_update_value(|store| store.set(is_dark)).is_some() {
            self.is_dark.set(is_dark);
        }
    }
}

/// Create the store with the platform backends and provide it to the
/// current owner's descendants.
pub fn provide_dark_mode(default_dark: bool) -> DarkMode {
    provide_dark_mode_with(default_dark, platform_storage(), platform_document())
}

/// Like [`provide_dark_mode`], with explicit backends.
///
/// The style node is removed when the current owner is cleaned up.
pub fn provide_dark_mode_with(
    default_dark: bool,
    storage: Box<dyn PreferenceStorage>,
    document: Arc<dyn DocumentHost>,
) -> DarkMode {
    let hydrating = cfg!(feature = "hydrate");
    let dark_mode = install(default_dark, storage, document, hydrating);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| dark_mode.resync());
    }

    dark_mode
}

/// Value the view should start from.
///
/// Server HTML is always rendered with `default_dark`, and hydration does
/// not rewrite server text or classes, so while hydrating the signal must
/// match the server and catch up to the stored mode afterwards.
fn rendered_value(default_dark: bool, stored: bool, hydrating: bool) -> bool {
    if hydrating { default_dark } else { stored }
}

fn install(
    default_dark: bool,
    storage: Box<dyn PreferenceStorage>,
    document: Arc<dyn DocumentHost>,
    hydrating: bool,
) -> DarkMode {
    let store = ModeStore::initialize(default_dark, storage, document);
    let document = store.document();
    let dark_mode = DarkMode {
        is_dark: RwSignal::new(rendered_value(default_dark, store.is_dark(), hydrating)),
        store: StoredValue::new(store),
    };

    on_cleanup(move || mode::release(document.as_ref()));
    provide_context(dark_mode);
    dark_mode
}

/// Look up the nearest provider.
///
/// # Errors
///
/// Returns [`DarkModeError::MissingProvider`] outside a provider scope.
pub fn try_use_dark_mode() -> Result<DarkMode, DarkModeError> {
    use_context::<DarkMode>().ok_or(DarkModeError::MissingProvider)
}

/// Look up the nearest provider.
///
/// # Panics
///
/// Panics when called outside a `DarkModeProvider`.
#[track_caller]
pub fn use_dark_mode() -> DarkMode {
    match try_use_dark_mode() {
        Ok(dark_mode) => dark_mode,
        Err(err) => panic!("{err}"),
    }
}
