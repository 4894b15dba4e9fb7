use leptos::prelude::*;

use crate::content::{CONTACTS, CONTACT_BLURB};
use crate::sections::SectionId;

use super::homepage::SectionHeading;
use super::theme::use_theme;

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section
            id=SectionId::Contact.anchor()
            class=move || format!("min-h-screen p-8 md:p-16 {}", theme.palette().contact_band)
        >
            <div class="max-w-5xl mx-auto text-center">
                <SectionHeading text="Let's Connect!" />
                <p class=move || format!("text-lg mb-8 {}", theme.palette().muted)>{CONTACT_BLURB}</p>
                <div class="flex flex-wrap justify-center gap-6">
                    {CONTACTS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-400 hover:text-blue-300"
                                >
                                    {format!("{} {}", link.kind.glyph(), link.kind.label())}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

/// Layout only, messages are not sent anywhere.
#[component]
fn ContactForm() -> impl IntoView {
    let theme = use_theme();
    let field = move || format!("w-full px-4 py-2 rounded-md border {}", theme.palette().input);
    view! {
        <form class=move || {
            format!("mt-12 p-6 max-w-xl mx-auto flex flex-col gap-4 text-left {}", theme.palette().card)
        }>
            <input type="text" name="name" placeholder="Your name" class=field />
            <input type="email" name="email" placeholder="Your email" class=field />
            <textarea name="message" rows="4" placeholder="Your message" class=field></textarea>
            <button
                type="button"
                class="self-end bg-gradient-to-r from-green-400 to-blue-500 text-white font-semibold py-2 px-6 rounded-full"
            >
                "Send"
            </button>
        </form>
    }
}
