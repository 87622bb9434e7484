//! Utility helpers shared across dark mode modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM) and
//! the generated stylesheet from state and component logic.

pub mod document;
pub mod storage;
pub mod stylesheet;
