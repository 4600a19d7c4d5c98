use leptos::prelude::*;

use super::{
    reveal::{reveal_items, Reveal, RevealGroup},
    SectionHeading,
};
use crate::{
    content::{portfolio, SkillCategory},
    nav::Section,
    reveal::RevealableElement,
};

fn category_key(index: usize) -> String {
    format!("category-{index}")
}

#[component]
pub fn Skills() -> impl IntoView {
    let p = portfolio();

    let mut items = reveal_items(&[("heading", 0), ("competencies", 300), ("focus", 500)]);
    items.extend(p.skill_categories.iter().enumerate().map(|(i, c)| {
        RevealableElement::delayed(category_key(i), c.delay_ms)
    }));

    view! {
        <RevealGroup items>
            <section id=Section::Skills.anchor() class="py-20 bg-dark relative">
                <div class="absolute top-1/3 right-0 w-72 h-72 rounded-full bg-neon-violet/10 blur-[100px]"></div>
                <div class="absolute bottom-1/4 left-0 w-64 h-64 rounded-full bg-neon-blue/10 blur-[80px]"></div>

                <div class="container mx-auto px-4">
                    <Reveal key="heading" class="text-center mb-16">
                        <SectionHeading title="Skills & Expertise" />
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {p
                            .skill_categories
                            .iter()
                            .enumerate()
                            .map(|(i, category)| {
                                view! {
                                    <Reveal key=category_key(i) class="neon-card">
                                        <CategoryCard category />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-16 grid grid-cols-1 md:grid-cols-2 gap-8">
                        <Reveal key="competencies">
                            <h3 class="text-xl font-bold mb-6 text-white/90">"Core Competencies"</h3>
                            <div class="space-y-5">
                                {p
                                    .competencies
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <div class="space-y-2">
                                                <div class="flex justify-between">
                                                    <span class="text-white/80">{c.name.as_str()}</span>
                                                    <span class="text-neon-blue">{c.width()}</span>
                                                </div>
                                                <div class="h-2 bg-dark-lighter rounded-full overflow-hidden">
                                                    <div
                                                        class="h-full bg-gradient-to-r from-neon-blue to-neon-purple rounded-full"
                                                        style:width=c.width()
                                                        style:transition="width 1.5s ease"
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                        <Reveal key="focus">
                            <h3 class="text-xl font-bold mb-6 text-white/90">"Areas of Focus"</h3>
                            <div class="grid grid-cols-2 gap-4">
                                {p
                                    .focus_areas
                                    .iter()
                                    .map(|area| {
                                        let badge = format!(
                                            "w-10 h-10 rounded-full flex items-center justify-center bg-gradient-to-br {} mb-3 group-hover:scale-110 transition-transform duration-300",
                                            area.gradient_class(),
                                        );
                                        view! {
                                            <div class="neon-card group flex flex-col items-center justify-center p-4 text-center h-32">
                                                <div class=badge>
                                                    <span class="text-white" aria-hidden="true">
                                                        {area.icon.glyph()}
                                                    </span>
                                                </div>
                                                <span class="font-medium">{area.name.as_str()}</span>
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

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let badge = format!(
        "w-10 h-10 rounded-md flex items-center justify-center {}",
        category.accent.tint()
    );
    let dot = format!("w-1.5 h-1.5 rounded-full {}", category.accent.dot());
    view! {
        <div class="flex items-center gap-3 mb-4">
            <div class=badge>
                <span class="text-white" aria-hidden="true">
                    {category.icon.glyph()}
                </span>
            </div>
            <h3 class="text-xl font-bold">{category.title.as_str()}</h3>
        </div>
        <div class="space-y-2">
            {category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="flex items-center gap-2">
                            <div class=dot.clone()></div>
                            <span class="text-white/80">{skill.as_str()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
