//! Demo application showing adapting and opted-out elements side by side.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::{dark_mode_provider::DarkModeProvider, dark_mode_toggle::DarkModeToggle};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root demo component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dark Mode Demo"/>

        <DarkModeProvider>
            <div class="min-h-screen p-8">
                <DarkModeToggle class="mb-4"/>

                <div class="space-y-8">
                    <div>
                        <h1 class="text-3xl font-bold mb-4">"Dark Mode Demo"</h1>
                        <p class="text-lg mb-8">"This text will automatically adapt to dark mode"</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="p-6 rounded-lg border">
                            <h2 class="text-xl font-semibold mb-3">"Auto-adapting Card"</h2>
                            <p>"This card will automatically switch between light and dark mode"</p>
                        </div>

                        <div class="p-6 rounded-lg border no-dark-mode bg-blue-100">
                            <h2 class="text-xl font-semibold mb-3">"Custom Styled Card"</h2>
                            <p>"This card will keep its custom blue background in both modes"</p>
                        </div>
                    </div>

                    <div class="mt-8">
                        <button class="px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700">
                            "Normal Button (Auto-adapting)"
                        </button>
                        <button class="ml-4 px-4 py-2 bg-green-500 text-white rounded-lg hover:bg-green-600 no-dark-mode">
                            "Custom Button (Stays Green)"
                        </button>
                    </div>
                </div>
            </div>
        </DarkModeProvider>
    }
}
