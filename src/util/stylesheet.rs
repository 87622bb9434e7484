//! Global recolor stylesheet and its singleton `<style>` node.
//!
//! DESIGN
//! ======
//! Both palettes are always present in the sheet. The `dark` class on the
//! root element decides which variables apply, so toggling only changes the
//! `color-scheme` hint in the regenerated text. Anything inside an element
//! carrying `no-dark-mode` is left alone by every recolor and transition
//! rule.

#[cfg(test)]
#[path = "stylesheet_test.rs"]
mod stylesheet_test;

use crate::error::DarkModeError;
use crate::state::mode::{OPT_OUT_CLASS, ROOT_CLASS, STYLE_ID};
use crate::util::document::DocumentHost;

/// Color variables for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#000000",
    border: "#e5e7eb",
};

pub const DARK: Palette = Palette {
    background: "#1a1a1a",
    text: "#ffffff",
    border: "#374151",
};

/// Duration of the background/text/border color transition.
pub const TRANSITION: &str = "0.3s ease";

fn variables(selector: &str, palette: Palette) -> String {
    format!(
        "{selector} {{\n  --bg-primary: {bg};\n  --text-primary: {text};\n  --border-color: {border};\n}}\n",
        bg = palette.background,
        text = palette.text,
        border = palette.border,
    )
}

/// Render the full stylesheet for the given mode.
#[must_use]
pub fn stylesheet(is_dark: bool) -> String {
    let scheme = if is_dark { "dark" } else { "light" };
    let dark = ROOT_CLASS;
    let opt_out = OPT_OUT_CLASS;
    let t = TRANSITION;

    let mut css = format!(":root {{\n  color-scheme: {scheme};\n}}\n\n");
    css.push_str(&variables(":root", LIGHT));
    css.push('\n');
    css.push_str(&variables(&format!(".{dark}"), DARK));
    css.push_str(&format!(
        r#"
body {{
  background-color: var(--bg-primary);
  color: var(--text-primary);
  transition: background-color {t}, color {t};
}}

.{dark} *:not(.{opt_out}):not(.{opt_out} *) {{
  border-color: var(--border-color);
  background-color: var(--bg-primary);
  color: var(--text-primary);
}}

.{dark} *:not(.{opt_out})[class*="bg-"]:not([class*="hover\:bg-"]) {{
  background-color: inherit;
}}

.{dark} *:not(.{opt_out})[class*="text-"]:not([class*="hover\:text-"]) {{
  color: inherit;
}}

.{dark} *:not(.{opt_out})[class*="border-"]:not([class*="hover\:border-"]) {{
  border-color: inherit;
}}

*:not(.{opt_out}) {{
  transition: background-color {t}, color {t}, border-color {t};
}}

.{dark} *:not(.{opt_out})[style*="background: none"],
.{dark} *:not(.{opt_out})[style*="background: transparent"],
.{dark} *:not(.{opt_out})[style*="background-color: transparent"] {{
  background: transparent !important;
}}
"#
    ));
    css
}

/// Write the stylesheet for `is_dark` into the singleton style node.
///
/// # Errors
///
/// Propagates [`DarkModeError::Document`] from the host.
pub fn inject(document: &dyn DocumentHost, is_dark: bool) -> Result<(), DarkModeError> {
    document.upsert_style(STYLE_ID, &stylesheet(is_dark))
}

/// Remove the singleton style node.
///
/// # Errors
///
/// Propagates [`DarkModeError::Document`] from the host.
pub fn remove(document: &dyn DocumentHost) -> Result<(), DarkModeError> {
    document.remove_style(STYLE_ID)
}
