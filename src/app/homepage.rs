use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use crate::content::{ABOUT, BUILD_YEAR, NAME, PROFILE_IMAGE, TAGLINE};
use crate::sections::SectionId;

use super::background::ParallaxBackground;
use super::contact::Contact;
use super::navigation::Navigation;
use super::scroll::use_active_section;
use super::showcase::{Education, Experience, Projects, Skills};
use super::theme::use_theme;

pub(super) const GRADIENT_TEXT: &str =
    "bg-gradient-to-r from-green-400 to-blue-500 bg-clip-text text-transparent";

#[component]
pub(super) fn SectionHeading(
    text: &'static str,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let align = if centered { "text-center" } else { "" };
    view! { <h2 class=format!("text-3xl font-bold mb-8 {GRADIENT_TEXT} {align}")>{text}</h2> }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll) = use_window_scroll();
    let active = use_active_section(scroll);

    view! {
        <Title text="Home" />
        <div class=move || {
            format!("font-sans overflow-x-hidden relative min-h-screen {}", theme.palette().page)
        }>
            <ParallaxBackground scroll />
            <Navigation active />
            <main class="relative">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Education />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section class="min-h-screen flex items-center justify-center text-center px-4">
            <div>
                <h1 class=format!("text-4xl md:text-6xl font-bold mb-4 {GRADIENT_TEXT}")>
                    "Hi, I'm "
                    <span class="inline-block overflow-hidden whitespace-nowrap animate-typing">
                        {NAME}
                    </span>
                </h1>
                <p class=move || format!("text-xl {}", theme.palette().muted)>{TAGLINE}</p>
                <div class="mt-8 flex justify-center">
                    <a
                        href=SectionId::Projects.href()
                        class=format!(
                            "font-semibold py-3 px-6 rounded-full shadow-lg border border-blue-500/40 {GRADIENT_TEXT}",
                        )
                    >
                        "View My Work"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id=SectionId::About.anchor() class="min-h-screen p-8 md:p-16">
            <div class="max-w-5xl mx-auto">
                <SectionHeading text="About Me" />
                <div class="grid grid-cols-1 gap-8 items-center">
                    <div class="animate-float">
                        <img
                            src=PROFILE_IMAGE
                            alt="Profile"
                            class="w-64 h-64 rounded-full mx-auto shadow-lg object-cover"
                        />
                    </div>
                    <div class=move || format!("text-lg space-y-4 {}", theme.palette().muted)>
                        {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let theme = use_theme();
    view! {
        <footer class=move || format!("relative p-8 text-center {}", theme.palette().muted)>
            <p>{format!("© {BUILD_YEAR} {NAME}. All rights reserved.")}</p>
        </footer>
    }
}
