use leptos::{either::Either, ev, prelude::*};

use crate::{
    content::{portfolio, settings},
    nav::{NavState, Section},
};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new(settings().nav_scroll_threshold));
    let brand = portfolio().profile.brand.as_str();

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset_y = window().scroll_y().unwrap_or_default();
        nav.maybe_update(|n| {
            let was_scrolled = n.is_scrolled();
            n.on_scroll(offset_y) != was_scrolled
        });
    });
    on_cleanup(move || handle.remove());

    let bar_class = move || {
        if nav.with(NavState::is_scrolled) {
            "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-dark/90 backdrop-blur-md py-3"
        } else {
            "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent py-5"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-4 flex items-center justify-between">
                <a href=Section::Home.href() class="text-2xl font-heading font-bold">
                    <span class="neon-text">{brand}</span>
                </a>
                <div class="hidden md:flex items-center space-x-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="text-white/80 hover:text-neon-blue transition-colors duration-300"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-white"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        if nav.with(NavState::is_menu_open) {
                            Either::Left(view! { <span class="text-2xl" aria-hidden="true">"✕"</span> })
                        } else {
                            Either::Right(view! { <span class="text-2xl" aria-hidden="true">"☰"</span> })
                        }
                    }}
                </button>
            </div>
            <Show when=move || nav.with(NavState::is_menu_open)>
                <div class="md:hidden absolute top-full left-0 w-full bg-dark-lighter border-t border-neon-blue/30 animate-fade-in-up">
                    <div class="container mx-auto px-4 py-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="block py-3 text-white/80 hover:text-neon-blue border-b border-white/10"
                                        on:click=move |_| nav.update(NavState::on_navigate)
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
