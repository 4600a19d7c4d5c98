use leptos::prelude::*;

use super::{
    reveal::{reveal_items, Reveal, RevealGroup},
    SectionHeading,
};
use crate::{content::portfolio, nav::Section};

#[component]
pub fn About() -> impl IntoView {
    let p = portfolio();
    let items = reveal_items(&[("heading", 0), ("portrait", 200), ("summary", 400)]);

    view! {
        <RevealGroup items>
            <section id=Section::About.anchor() class="py-20 bg-dark-lighter relative">
                <div class="absolute top-0 left-0 w-full h-20 bg-gradient-to-b from-dark to-transparent"></div>
                <div class="absolute right-0 bottom-0 w-64 h-64 rounded-full bg-neon-blue/10 blur-[80px]"></div>
                <div class="absolute left-0 top-1/4 w-96 h-96 rounded-full bg-neon-purple/10 blur-[100px]"></div>

                <div class="container mx-auto px-4">
                    <Reveal key="heading" class="text-center mb-12">
                        <SectionHeading title="About Me" />
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                        <Reveal key="portrait">
                            <div class="relative group">
                                <div class="absolute -inset-1 bg-gradient-to-r from-neon-blue to-neon-purple rounded-lg blur-sm opacity-70 group-hover:opacity-100 transition duration-500"></div>
                                <div class="relative">
                                    <img
                                        src=p.profile.portrait.src.as_str()
                                        alt=p.profile.portrait.alt.as_str()
                                        class="rounded-lg w-full h-auto object-cover"
                                    />
                                </div>
                            </div>
                        </Reveal>
                        <Reveal key="summary" class="space-y-6">
                            {p
                                .profile
                                .about
                                .iter()
                                .map(|para| {
                                    view! {
                                        <p class="text-lg text-white/80 leading-relaxed">
                                            {para.as_str()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 pt-6">
                                {p
                                    .highlights
                                    .iter()
                                    .map(|h| {
                                        let badge = format!(
                                            "w-12 h-12 rounded-full flex items-center justify-center mb-4 transition-all duration-300 {} {}",
                                            h.accent.tint(),
                                            h.accent.group_hover_tint(),
                                        );
                                        view! {
                                            <div class="neon-card group flex flex-col items-center p-5">
                                                <div class=badge>
                                                    <span class=h.accent.text() aria-hidden="true">
                                                        {h.icon.glyph()}
                                                    </span>
                                                </div>
                                                <h3 class="font-bold">{h.title.as_str()}</h3>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>
        </RevealGroup>
    }
}
