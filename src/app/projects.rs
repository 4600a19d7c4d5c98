use leptos::prelude::*;

use super::{
    reveal::{reveal_items, Reveal, RevealGroup},
    SectionHeading,
};
use crate::{
    content::{portfolio, Project},
    nav::Section,
    reveal::RevealableElement,
};

fn project_key(project: &Project) -> String {
    format!("project-{}", project.id)
}

#[component]
pub fn Projects() -> impl IntoView {
    let p = portfolio();
    // only one card shows its overlay at a time
    let active = RwSignal::new(None::<&'static str>);

    let mut items = reveal_items(&[("heading", 0), ("cta", 800)]);
    items.extend(p.projects.iter().enumerate().map(|(i, project)| {
        RevealableElement::delayed(project_key(project), Project::reveal_delay_ms(i))
    }));

    view! {
        <RevealGroup items>
            <section id=Section::Projects.anchor() class="py-20 bg-dark-lighter relative">
                <div class="absolute bottom-0 left-0 w-full h-20 bg-gradient-to-t from-dark to-transparent"></div>
                <div class="absolute top-1/4 right-0 w-80 h-80 rounded-full bg-neon-purple/10 blur-[100px]"></div>
                <div class="absolute bottom-1/3 left-0 w-96 h-96 rounded-full bg-neon-blue/10 blur-[120px]"></div>

                <div class="container mx-auto px-4">
                    <Reveal key="heading" class="text-center mb-16">
                        <SectionHeading
                            title="Featured Projects"
                            subtitle="Explore my latest work that combines AI innovation with practical solutions for healthcare."
                        />
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {p
                            .projects
                            .iter()
                            .map(|project| {
                                let id = project.id.as_str();
                                view! {
                                    <Reveal key=project_key(project) class="group relative">
                                        <div
                                            class="h-full"
                                            on:mouseenter=move |_| active.set(Some(id))
                                            on:mouseleave=move |_| active.set(None)
                                        >
                                            <ProjectCard project active />
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Reveal key="cta" class="mt-16 text-center">
                        <a
                            href=Section::Contact.href()
                            class="inline-flex items-center gap-2 border border-neon-blue px-6 py-3 rounded-full hover:bg-neon-blue/10 transition-all duration-300"
                        >
                            <span>"Get in Touch"</span>
                            <span aria-hidden="true">"→"</span>
                        </a>
                    </Reveal>
                </div>
            </section>
        </RevealGroup>
    }
}

#[component]
fn ProjectCard(project: &'static Project, active: RwSignal<Option<&'static str>>) -> impl IntoView {
    let id = project.id.as_str();
    let is_active = move || active.get() == Some(id);
    let overlay_class = move || {
        let base = "absolute inset-0 flex items-center justify-center bg-dark-lighter/90 backdrop-blur-sm opacity-0 transition-opacity duration-300";
        if is_active() && project.demo.is_some() {
            format!("{base} sm:opacity-100")
        } else {
            base.to_string()
        }
    };
    let overlay_events = move || if is_active() { "auto" } else { "none" };
    let icon_link =
        "w-10 h-10 rounded-full flex items-center justify-center bg-dark hover:bg-neon-blue/20 transition-all duration-300";

    view! {
        <div class="absolute -inset-0.5 bg-gradient-to-r from-neon-blue to-neon-purple rounded-lg opacity-0 group-hover:opacity-80 transition duration-300 blur-sm"></div>
        <div class="relative bg-dark-lighter rounded-lg overflow-hidden h-full flex flex-col">
            <div
                class="h-48 bg-cover bg-center"
                style:background-image=format!("url({})", project.image)
            >
                <div class="absolute inset-0 bg-gradient-to-t from-dark-lighter to-transparent opacity-80"></div>
            </div>
            <div class="p-6 flex-grow flex flex-col">
                <h3 class="text-xl font-bold mb-3">{project.title.as_str()}</h3>
                <p class="text-white/70 mb-4 flex-grow">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2 mb-5">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-dark rounded text-xs text-white/80">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-between items-center">
                    <div class="flex gap-2">
                        {project
                            .repository
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        class=icon_link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Source Repository"
                                    >
                                        <i class="devicon-github-plain" />
                                    </a>
                                }
                            })}
                        {project
                            .demo
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        class=icon_link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Live Demo"
                                    >
                                        <span aria-hidden="true">"↗"</span>
                                    </a>
                                }
                            })}
                    </div>
                    {project
                        .has_all_links()
                        .then(|| {
                            view! {
                                <a
                                    href=project.demo.as_deref().unwrap_or_default()
                                    class="flex items-center text-neon-blue hover:text-white transition-colors duration-300"
                                >
                                    <span class="mr-2">"View Project"</span>
                                    <span aria-hidden="true">"→"</span>
                                </a>
                            }
                        })}
                    {project
                        .is_coming_soon()
                        .then(|| {
                            view! {
                                <div class="inline-flex items-center px-3 py-1 rounded-full bg-neon-purple/20 text-neon-purple text-xs font-medium">
                                    "Coming Soon"
                                </div>
                            }
                        })}
                </div>
            </div>
            <div class=overlay_class style:pointer-events=overlay_events>
                {project
                    .demo
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                class="px-6 py-3 bg-gradient-to-r from-neon-blue to-neon-violet rounded-full text-white font-medium transform hover:scale-105 transition-all duration-300"
                            >
                                "View Project"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
