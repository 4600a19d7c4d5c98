mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;

#[cfg(feature = "ssr")]
pub use contact::SharedSink;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

use crate::content::portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = portfolio().profile.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let profile = &portfolio().profile;
    view! {
        <Title text=profile.role.as_str() />
        <Meta name="description" content=profile.tagline.as_str() />
        <div class="min-h-screen bg-dark text-white overflow-hidden">
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}

/// Gradient section title with its underline bar and optional blurb.
#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold mb-4">
            <span class="neon-text">{title}</span>
        </h2>
        <div class="h-1 w-20 bg-gradient-to-r from-neon-blue to-neon-purple rounded mx-auto"></div>
        {subtitle.map(|s| view! { <p class="mt-4 text-white/70 max-w-2xl mx-auto">{s}</p> })}
    }
}
