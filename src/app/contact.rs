use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::content::{LOCATION, OWNER_EMAIL, SOCIAL_LINKS, WHATSAPP_DISPLAY, WHATSAPP_URL};
use crate::contact::{EMAIL_MAX_LEN, MESSAGE_MAX_LEN, NAME_MAX_LEN};
use crate::form::{begin_submit, finish_submit, ContactForm, Notice};

use super::Reveal;

/// Browser-side entry into the contact handler.
///
/// Runs the same validation and notification chain as the plain HTTP
/// endpoint; callers only ever see the public error text.
#[server]
pub async fn send_contact_email(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::ContactSubmission;
    use crate::server::ContactService;

    let service = use_context::<ContactService>()
        .ok_or_else(|| ServerFnError::new(crate::contact::SEND_FAILED_MSG))?;

    service
        .submit(ContactSubmission::new(name, email, message).into())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Contact server function failed");
            ServerFnError::new(e.public_message())
        })
}

fn server_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg,
        other => other.to_string(),
    }
}

#[component]
fn NoticeBanner(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice
            .get()
            .map(|n| {
                let class = if n.is_success() {
                    "mt-4 p-4 rounded-xl border border-green-500/40 bg-green-500/10"
                } else {
                    "mt-4 p-4 rounded-xl border border-destructive/40 bg-destructive/10"
                };
                view! {
                    <div class=class role="status">
                        <p class="font-bold">{n.title().to_string()}</p>
                        <p class="text-sm">{n.description().to_string()}</p>
                    </div>
                }
            })
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (submitting, set_submitting) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let attempt = form.with_untracked(|f| {
            begin_submit(f, move |v| {
                // the section may be gone by the time the call settles
                let _ = set_submitting.try_set(v);
            })
        });
        let (submission, guard) = match attempt {
            Ok(started) => started,
            Err(notice) => {
                set_notice(Some(notice));
                return;
            }
        };
        spawn_local(async move {
            let notice = finish_submit(submission, guard, |sub| async move {
                send_contact_email(sub.name, sub.email, sub.message)
                    .await
                    .map_err(server_message)
            })
            .await;
            if notice.is_success() {
                form.update(ContactForm::clear);
            }
            set_notice(Some(notice));
        });
    };

    view! {
        <section id="contact" class="py-24 md:py-32 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary/50 text-sm text-secondary-foreground mb-4">
                            "💬 Get In Touch"
                        </div>
                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4">
                            "Let's Code " <span class="text-gradient">"Something Epic!"</span>
                        </h2>
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                            "Have a project in mind? Want to collaborate? Or just want to say hi? I'm always excited to connect with fellow developers and creators."
                        </p>
                    </div>
                    <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 max-w-5xl mx-auto">
                        <div class="glass-card p-8">
                            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>
                            <form on:submit=on_submit class="space-y-6">
                                <div>
                                    <label for="name" class="block text-sm font-medium mb-2">
                                        "Your Name"
                                    </label>
                                    <input
                                        id="name"
                                        class="w-full px-4 py-2 rounded-xl bg-secondary/50 border border-border/50"
                                        placeholder="John Doe"
                                        required
                                        maxlength=NAME_MAX_LEN.to_string()
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                        disabled=submitting
                                    />
                                </div>
                                <div>
                                    <label for="email" class="block text-sm font-medium mb-2">
                                        "Email Address"
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        class="w-full px-4 py-2 rounded-xl bg-secondary/50 border border-border/50"
                                        placeholder="john@example.com"
                                        required
                                        maxlength=EMAIL_MAX_LEN.to_string()
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                        disabled=submitting
                                    />
                                </div>
                                <div>
                                    <label for="message" class="block text-sm font-medium mb-2">
                                        "Your Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        class="w-full px-4 py-2 rounded-xl bg-secondary/50 border border-border/50 resize-none"
                                        placeholder="Tell me about your project or just say hello!"
                                        required
                                        maxlength=MESSAGE_MAX_LEN.to_string()
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                                        disabled=submitting
                                    />
                                </div>
                                <button
                                    type="submit"
                                    class="w-full py-3 rounded-xl bg-primary text-primary-foreground shadow-glow disabled:opacity-60"
                                    disabled=submitting
                                >
                                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                            <NoticeBanner notice />
                        </div>
                        <div class="space-y-8">
                            <div class="glass-card p-8">
                                <h3 class="text-2xl font-bold mb-6">"Quick Contact"</h3>
                                <div class="space-y-4">
                                    <a
                                        href=format!("mailto:{OWNER_EMAIL}")
                                        class="flex items-center gap-4 p-4 rounded-xl bg-secondary/50 hover:bg-secondary"
                                    >
                                        <div>
                                            <div class="font-medium">"Email"</div>
                                            <div class="text-sm text-muted-foreground">{OWNER_EMAIL}</div>
                                        </div>
                                    </a>
                                    <a
                                        href=WHATSAPP_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-4 p-4 rounded-xl bg-secondary/50 hover:bg-secondary"
                                    >
                                        <div>
                                            <div class="font-medium">"WhatsApp"</div>
                                            <div class="text-sm text-muted-foreground">{WHATSAPP_DISPLAY}</div>
                                        </div>
                                    </a>
                                </div>
                            </div>
                            <div class="glass-card p-8">
                                <h3 class="text-xl font-bold mb-6">"Connect With Me"</h3>
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
                                                    class="p-4 rounded-xl bg-secondary/50 hover:bg-secondary"
                                                >
                                                    <i class=link.icon />
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="p-6 rounded-2xl border-2 border-dashed border-primary/30 bg-primary/5 text-center">
                                <p class="text-lg font-medium mb-2">
                                    "Open to freelance & full-time opportunities! 🎯"
                                </p>
                                <p class="text-muted-foreground">{format!("Based in {LOCATION} 🇮🇳")}</p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
