use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

// set by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = BUILD_TIME.get(..4).unwrap_or_default();

    view! {
        <footer class="py-8 border-t border-border/50">
            <div class="container mx-auto px-4 md:px-6 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-muted-foreground">
                    {format!("© {year} {OWNER_NAME}. Built with Rust, Leptos & a lot of chai ☕")}
                </p>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="text-muted-foreground hover:text-foreground"
                                >
                                    <i class=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
