use leptos::{ev, html, prelude::*};

use super::reveal::{reveal_items, Reveal, RevealGroup};
use crate::{
    content::{portfolio, settings},
    nav::Section,
    parallax::{parallax_offset, Point, Region},
};

/// Decorative layers: `(class, speed)`.
const BACKDROP_LAYERS: [(&str, f64); 6] = [
    ("absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-neon-purple/20 blur-[100px]", -0.2),
    ("absolute bottom-1/3 right-1/4 w-72 h-72 rounded-full bg-neon-blue/20 blur-[120px]", 0.3),
    ("absolute top-2/3 left-1/3 w-48 h-48 rounded-full bg-neon-violet/20 blur-[80px]", 0.1),
    ("absolute top-20 left-20 w-8 h-8 rounded-full border border-neon-blue animate-pulse-glow", 0.6),
    ("absolute bottom-32 right-48 w-6 h-6 rounded-full border border-neon-purple animate-pulse-glow", 0.4),
    ("absolute top-1/2 right-20 w-10 h-10 rounded-full border border-neon-violet animate-pulse-glow", 0.5),
];

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let scale = settings().parallax_scale;
    let hero_ref = NodeRef::<html::Section>::new();
    let (pointer, set_pointer) = signal(None::<(Point, Region)>);

    let items = reveal_items(&[("content", 0)]);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        let Some(el) = hero_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let point = Point {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        };
        let region = Region {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        set_pointer.set(Some((point, region)));
    });
    on_cleanup(move || handle.remove());

    let shift = move |speed: f64| {
        move || {
            pointer
                .get()
                .map(|(point, region)| parallax_offset(point, region, speed, scale).to_transform())
                .unwrap_or_default()
        }
    };

    view! {
        <RevealGroup items>
            <section
                id=Section::Home.anchor()
                node_ref=hero_ref
                class="h-screen w-full flex items-center justify-center relative overflow-hidden bg-dark"
            >
                <div class="absolute inset-0 grid-pattern opacity-30"></div>
                {BACKDROP_LAYERS
                    .into_iter()
                    .map(|(class, speed)| view! { <div class=class style:transform=shift(speed)></div> })
                    .collect_view()}
                <div class="container mx-auto px-4 relative z-10 text-center">
                    <Reveal key="content" class="max-w-4xl mx-auto">
                        <h1
                            class="text-5xl md:text-7xl font-bold mb-4"
                            style:transform=shift(0.2)
                        >
                            <span class="neon-text">{profile.name.as_str()}</span>
                        </h1>
                        <h2
                            class="text-2xl md:text-3xl font-heading text-white/90 mb-6"
                            style:transform=shift(0.15)
                        >
                            {profile.role.as_str()}
                        </h2>
                        <p
                            class="text-xl text-white/70 mb-10 max-w-2xl mx-auto"
                            style:transform=shift(0.1)
                        >
                            {profile.tagline.as_str()}
                        </p>
                        <a
                            href=Section::Projects.href()
                            class="inline-flex items-center gap-2 bg-gradient-to-r from-neon-blue to-neon-violet text-dark font-medium px-8 py-3 rounded-full transition-all duration-300 hover:shadow-[0_0_15px_rgba(0,240,255,0.7)] hover:scale-105"
                            style:transform=shift(0.05)
                        >
                            "View My Work"
                            <span aria-hidden="true">"➜"</span>
                        </a>
                    </Reveal>
                </div>
                <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 flex flex-col items-center">
                    <span class="text-white/50 text-sm mb-2">"Scroll Down"</span>
                    <div class="w-0.5 h-10 bg-gradient-to-b from-white/50 to-transparent"></div>
                </div>
            </section>
        </RevealGroup>
    }
}
