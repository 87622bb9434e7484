#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use super::*;
use crate::components::dark_mode_toggle::DarkModeToggle;

fn render(default_dark: bool, class: &'static str) -> String {
    Owner::new().with(|| {
        view! {
            <DarkModeProvider default_dark=default_dark>
                <DarkModeToggle class=class/>
            </DarkModeProvider>
        }
        .to_html()
    })
}

#[test]
fn dark_default_renders_sun_and_dark_palette() {
    let html = render(true, "x");
    assert!(html.contains("☀"), "{html}");
    assert!(!html.contains("☾"), "{html}");
    assert!(
        html.contains("p-2 rounded-lg transition-colors bg-gray-800 text-yellow-400 hover:bg-gray-700 x"),
        "{html}"
    );
}

#[test]
fn light_default_renders_moon_and_light_palette() {
    let html = render(false, "mb-4");
    assert!(html.contains("☾"), "{html}");
    assert!(
        html.contains("p-2 rounded-lg transition-colors bg-gray-100 text-gray-800 hover:bg-gray-200 mb-4"),
        "{html}"
    );
}

#[test]
fn toggle_button_is_labelled() {
    let html = render(false, "");
    assert!(html.contains("<button"), "{html}");
    assert!(html.contains(r#"aria-label="Toggle dark mode""#), "{html}");
}

#[test]
fn omitted_default_renders_light() {
    let html = Owner::new().with(|| {
        view! {
            <DarkModeProvider>
                <DarkModeToggle/>
            </DarkModeProvider>
        }
        .to_html()
    });
    assert!(html.contains("☾"), "{html}");
}
