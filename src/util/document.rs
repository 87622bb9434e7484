//! Document mutations: root marker class and singleton style nodes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserDocument` drives the real DOM through `web-sys` and only exists
//! under `hydrate`. `MemoryDocument` records the same operations so the
//! store's side effects can be asserted in native tests.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::DarkModeError;

/// The document operations the dark mode store performs.
pub trait DocumentHost: Send + Sync {
    /// Add (`present = true`) or remove `class` on the root `<html>` element.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Document`] when the root element is missing.
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), DarkModeError>;

    /// Replace the text of the `<style>` node with `id`, creating it in
    /// `<head>` first when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Document`] when the node cannot be created.
    fn upsert_style(&self, id: &str, css: &str) -> Result<(), DarkModeError>;

    /// Remove the `<style>` node with `id`. Absent nodes are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Document`] when the document is unavailable.
    fn remove_style(&self, id: &str) -> Result<(), DarkModeError>;
}

#[derive(Debug, Default)]
struct MemoryDom {
    root_classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    styles_created: usize,
}

/// In-memory document. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    dom: Arc<Mutex<MemoryDom>>,
}

impl MemoryDocument {
    fn dom(&self) -> MutexGuard<'_, MemoryDom> {
        self.dom.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the root element currently carries `class`.
    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.dom().root_classes.contains(class)
    }

    /// Text content of the style node `id`, if it exists.
    #[must_use]
    pub fn style(&self, id: &str) -> Option<String> {
        self.dom().styles.get(id).cloned()
    }

    /// Number of style nodes created over the document's lifetime.
    #[must_use]
    pub fn styles_created(&self) -> usize {
        self.dom().styles_created
    }
}

impl DocumentHost for MemoryDocument {
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), DarkModeError> {
        let mut dom = self.dom();
        if present {
            dom.root_classes.insert(class.to_owned());
        } else {
            dom.root_classes.remove(class);
        }
        Ok(())
    }

    fn upsert_style(&self, id: &str, css: &str) -> Result<(), DarkModeError> {
        let mut dom = self.dom();
        if !dom.styles.contains_key(id) {
            dom.styles_created += 1;
        }
        dom.styles.insert(id.to_owned(), css.to_owned());
        Ok(())
    }

    fn remove_style(&self, id: &str) -> Result<(), DarkModeError> {
        self.dom().styles.remove(id);
        Ok(())
    }
}

/// The browser's `window.document`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    fn document() -> Result<web_sys::Document, DarkModeError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DarkModeError::Document("no document".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl DocumentHost for BrowserDocument {
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), DarkModeError> {
        let root = Self::document()?
            .document_element()
            .ok_or_else(|| DarkModeError::Document("no root element".to_owned()))?;
        root.class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|err| DarkModeError::Document(format!("{err:?}")))
    }

    fn upsert_style(&self, id: &str, css: &str) -> Result<(), DarkModeError> {
        let doc = Self::document()?;
        let node = match doc.get_element_by_id(id) {
            Some(node) => node,
            None => {
                let node = doc
                    .create_element("style")
                    .map_err(|err| DarkModeError::Document(format!("{err:?}")))?;
                node.set_id(id);
                let head = doc
                    .head()
                    .ok_or_else(|| DarkModeError::Document("no head element".to_owned()))?;
                head.append_child(&node)
                    .map_err(|err| DarkModeError::Document(format!("{err:?}")))?;
                node
            }
        };
        node.set_text_content(Some(css));
        Ok(())
    }

    fn remove_style(&self, id: &str) -> Result<(), DarkModeError> {
        if let Some(node) = Self::document()?.get_element_by_id(id) {
            node.remove();
        }
        Ok(())
    }
}

/// Document backend for the current build: the live DOM in the browser,
/// a detached in-memory document elsewhere.
pub fn platform_document() -> Arc<dyn DocumentHost> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserDocument)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryDocument::default())
    }
}
