mod contact;
mod footer;
mod navbar;
mod sections;
mod theme;

pub use contact::{send_contact_email, ContactSection};

use footer::Footer;
use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_element_visibility;
use navbar::Navbar;
use sections::{About, Blog, Hero, Projects, Skills};

use crate::content::OWNER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Backend Developer" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Blog />
        <ContactSection />
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
fn Reveal(#[prop(optional, into)] layout: String, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if seen() { "scroll-animate visible" } else { "scroll-animate" };
                format!("{state} {layout}")
            }
        >
            {children()}
        </div>
    }
}
