use leptos::prelude::*;

use crate::content::{Skill, TimelineEntry, EDUCATION, EXPERIENCE, PROJECTS, SKILLS};
use crate::sections::SectionId;

use super::homepage::SectionHeading;
use super::theme::use_theme;

// Cuts the centre out of the conic gradient so only a ring remains.
const RING_MASK: &str = "-webkit-mask: radial-gradient(farthest-side, transparent calc(100% - 8px), black calc(100% - 7px)); mask: radial-gradient(farthest-side, transparent calc(100% - 8px), black calc(100% - 7px)); animation: fill 1.5s ease-in-out forwards";

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("p-6 flex flex-col items-center {}", theme.palette().card)>
            <h3 class="text-xl font-bold mb-4">{skill.title}</h3>
            <div class="relative w-32 h-32">
                <div
                    class="w-full h-full rounded-full"
                    style=format!("{}; {RING_MASK}", skill.ring_style())
                ></div>
                <span class=move || {
                    format!(
                        "text-xl absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 {}",
                        theme.palette().muted,
                    )
                }>{skill.percent_label()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="min-h-screen p-8 md:p-16">
            <div class="max-w-5xl mx-auto">
                <SectionHeading text="Skills" centered=true />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILLS.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(entry: &'static TimelineEntry) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("p-6 {}", theme.palette().card)>
            <h3 class="text-2xl font-bold mb-2">{entry.title}</h3>
            <p class=move || theme.palette().muted>{entry.organisation}</p>
            <ul class=move || format!("list-disc ml-6 mt-2 {}", theme.palette().muted)>
                {entry.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
            </ul>
            <span class=move || format!("text-sm {}", theme.palette().muted)>{entry.date}</span>
        </div>
    }
}

#[component]
fn Timeline(
    id: SectionId,
    heading: &'static str,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <section id=id.anchor() class="p-8 md:px-16 mb-8">
            <div class="max-w-5xl mx-auto">
                <SectionHeading text=heading />
                <div class="flex flex-col gap-8">
                    {entries.iter().map(|entry| view! { <TimelineCard entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! { <Timeline id=SectionId::Experience heading="Experience" entries=EXPERIENCE /> }
}

#[component]
pub fn Education() -> impl IntoView {
    view! { <Timeline id=SectionId::Education heading="Education" entries=EDUCATION /> }
}

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id=SectionId::Projects.anchor() class="min-h-screen p-8 md:p-16">
            <div class="max-w-5xl mx-auto">
                <SectionHeading text="Projects" />
                <div class="grid grid-cols-1 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class=move || format!("p-6 {}", theme.palette().card)>
                                    <img
                                        src=project.image
                                        alt=project.title
                                        class="rounded-lg mb-4"
                                    />
                                    <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
                                    <p class=move || {
                                        theme.palette().muted
                                    }>{project.description}</p>
                                    <a
                                        href=project.link
                                        class="text-blue-400 hover:text-blue-300 mt-4 inline-block"
                                    >
                                        "View Project →"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
