use leptos::prelude::*;
use leptos_use::{use_color_mode, ColorMode, UseColorModeReturn};

/// Light/dark switch. The choice is kept in local storage; until one is
/// made the OS preference applies.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let UseColorModeReturn { mode, set_mode, .. } = use_color_mode();

    let is_dark = move || mode.get() == ColorMode::Dark;

    view! {
        <button
            class="p-2 rounded-full hover:bg-secondary/80 transition-all duration-300"
            aria-label="Toggle theme"
            on:click=move |_| {
                let next = if is_dark() { ColorMode::Light } else { ColorMode::Dark };
                set_mode.set(next);
            }
        >
            {move || {
                if is_dark() {
                    view! { <span class="text-gold">"☀"</span> }.into_any()
                } else {
                    view! { <span class="text-purple">"☾"</span> }.into_any()
                }
            }}
        </button>
    }
}
