use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_LINKS, OWNER_NAME};

use super::theme::ThemeToggle;

const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = move || scroll_y.get() > SCROLLED_OFFSET;
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            if is_scrolled() {
                "fixed pt-2 top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-lg border-b border-border/50"
            } else {
                "fixed pt-2 top-0 left-0 right-0 z-50 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <a href="#" class="flex items-center gap-3">
                        <img src="/logo.jpg" alt="Logo" class="h-10 md:h-14 w-auto rounded-full" />
                        <span class="text-xl md:text-4xl font-bold text-gradient">{OWNER_NAME}</span>
                    </a>
                    <div class="hidden md:flex items-center gap-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="px-4 py-2 text-sm md:text-xl font-medium text-muted-foreground hover:text-foreground"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <div class="ml-4">
                            <ThemeToggle />
                        </div>
                    </div>
                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-full"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="fixed inset-0 z-40 md:hidden">
                        <div
                            class="absolute inset-0 bg-background/60 backdrop-blur-sm"
                            on:click=move |_| set_menu_open(false)
                        />
                        <div class="absolute top-20 right-4 w-56 rounded-2xl bg-background/95 border border-border shadow-2xl">
                            <div class="flex flex-col divide-y divide-border">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                on:click=move |_| set_menu_open(false)
                                                class="px-6 py-4 text-base font-medium text-foreground hover:bg-secondary/60"
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
