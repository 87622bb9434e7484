//! Dark mode store: the boolean, its persistence, and its DOM mirror.
//!
//! DESIGN
//! ======
//! Every change runs its side effects before returning: the preference is
//! written to storage, the root marker class is updated, and the stylesheet
//! node is regenerated. Backend failures are logged and skipped so a broken
//! `localStorage` never blocks the toggle.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::sync::Arc;

use crate::util::document::DocumentHost;
use crate::util::storage::{self, PreferenceStorage};
use crate::util::stylesheet;

/// Storage key holding `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on the root `<html>` element while dark mode is on.
pub const ROOT_CLASS: &str = "dark";

/// Identifier of the singleton `<style>` node.
pub const STYLE_ID: &str = "dark-mode-styles";

/// Class consumers put on elements that must keep their own colors.
pub const OPT_OUT_CLASS: &str = "no-dark-mode";

pub struct ModeStore {
    is_dark: bool,
    storage: Box<dyn PreferenceStorage>,
    document: Arc<dyn DocumentHost>,
}

impl ModeStore {
    /// Build the store from the persisted preference, falling back to
    /// `default_dark`, and apply the resulting mode immediately.
    pub fn initialize(
        default_dark: bool,
        storage: Box<dyn PreferenceStorage>,
        document: Arc<dyn DocumentHost>,
    ) -> Self {
        // A failed read looks like a missing key: the default is used and
        // written back by `sync`, overwriting whatever the backend held.
        let saved = storage::load_json::<bool>(storage.as_ref(), STORAGE_KEY);
        let is_dark = saved.unwrap_or(default_dark);
        log::debug!("dark mode initialized: {is_dark} (saved: {saved:?}, default: {default_dark})");

        let store = Self {
            is_dark,
            storage,
            document,
        };
        store.sync();
        store
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        log::debug!("dark mode toggled: {}", self.is_dark);
        self.sync();
        self.is_dark
    }

    /// Set an explicit mode. No-op when unchanged.
    pub fn set(&mut self, is_dark: bool) {
        if self.is_dark == is_dark {
            return;
        }
        self.is_dark = is_dark;
        self.sync();
    }

    /// Remove the style node this store owns.
    pub fn teardown(&self) {
        release(self.document.as_ref());
    }

    /// Shared handle to the document backend, for cleanup that must outlive
    /// the store.
    #[must_use]
    pub fn document(&self) -> Arc<dyn DocumentHost> {
        Arc::clone(&self.document)
    }

    fn sync(&self) {
        storage::save_json(self.storage.as_ref(), STORAGE_KEY, &self.is_dark);
        if let Err(err) = self.document.set_root_class(ROOT_CLASS, self.is_dark) {
            log::warn!("updating root class: {err}");
        }
        if let Err(err) = stylesheet::inject(self.document.as_ref(), self.is_dark) {
            log::warn!("injecting dark mode styles: {err}");
        }
    }
}

/// Remove the style node from `document`, logging failures.
pub fn release(document: &dyn DocumentHost) {
    if let Err(err) = stylesheet::remove(document) {
        log::warn!("removing dark mode styles: {err}");
    }
}
