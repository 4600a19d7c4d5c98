use leptos::prelude::*;

use crate::{config::build_year, content::portfolio, nav::Section};

fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Footer() -> impl IntoView {
    let p = portfolio();
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", p.profile.name),
        None => format!("© {}. All rights reserved.", p.profile.name),
    };

    view! {
        <footer class="bg-dark-lighter py-10 relative">
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-neon-blue to-transparent"></div>
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div>
                        <a href=Section::Home.href() class="text-2xl font-heading font-bold">
                            <span class="neon-text">{p.profile.brand.as_str()}</span>
                        </a>
                        <p class="text-white/50 mt-2 text-sm">{p.profile.role.as_str()}</p>
                    </div>
                    <div class="mt-6 md:mt-0">
                        <button
                            on:click=move |_| scroll_to_top()
                            class="flex items-center justify-center w-10 h-10 rounded-full border border-neon-blue text-neon-blue hover:bg-neon-blue/10 transition-colors duration-300"
                            aria-label="Back to top"
                        >
                            <span aria-hidden="true">"↑"</span>
                        </button>
                    </div>
                </div>
                <div class="border-t border-white/10 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <div class="text-white/50 text-sm">{copyright}</div>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        {p
                            .footer_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.as_str()
                                        class="text-white/50 hover:text-neon-blue transition-colors duration-300 text-sm"
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
