mod contact;
mod education;
mod experience;
mod nav;
mod projects;
mod skills;
mod story;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::content::{build_year, LOGO_PATH, OWNER};
use crate::state::{NavMenu, Theme, Viewport};

use contact::ContactSection;
use education::{EducationSection, HonorsSection};
use experience::ExperienceSection;
use nav::{scroll_to_top, Dock};
use projects::ProjectsSection;
use skills::SkillsSection;
use story::StorySection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-montserrat">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content="Omar Ahmed - software engineer portfolio" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single scrolling page. Owns the page-wide state and hands children
/// read-only signals or the write handles they need.
#[component]
fn HomePage() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let viewport = Memo::new(move |_| Viewport::from_width(width.get()));
    let menu = RwSignal::new(NavMenu::new(viewport.get_untracked()));

    Effect::watch(
        move || viewport.get(),
        move |viewport, _, _| {
            log::debug!("viewport is now {viewport:?}");
            menu.update(|m| m.set_viewport(*viewport));
        },
        false,
    );

    let page_class = move || {
        if theme.get().is_dark() {
            "dark min-h-screen relative bg-gray-900 text-white transition-colors duration-300"
        } else {
            "min-h-screen relative bg-gray-100 text-black transition-colors duration-300"
        }
    };

    view! {
        <Title text="Portfolio" />
        <div class=page_class>
            <div class="relative z-10">
                <header class="fixed top-6 left-1/2 -translate-x-1/2 z-20 w-full max-w-5xl px-4">
                    <nav class=move || {
                        if theme.get().is_dark() {
                            "px-6 py-3 rounded-xl transition-all duration-300 bg-gray-800/10 shadow-lg backdrop-blur-md"
                        } else {
                            "px-6 py-3 rounded-xl transition-all duration-300 bg-white/10 shadow-lg backdrop-blur-md"
                        }
                    }>
                        <div class="flex items-center justify-between">
                            <button
                                class="w-16 h-16 rounded-lg overflow-hidden flex-shrink-0 cursor-pointer transition-transform hover:scale-105"
                                aria-label="Back to top"
                                on:click=move |_| scroll_to_top()
                            >
                                <img src=LOGO_PATH alt="Logo" class="w-full h-full object-cover" />
                            </button>
                            <Dock viewport menu theme />
                        </div>
                    </nav>
                </header>

                <main class="container mx-auto px-6 pt-32">
                    <StorySection />
                    <SkillsSection viewport />
                    <ProjectsSection />
                    <ExperienceSection />
                    <EducationSection />
                    <HonorsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-gray-500 dark:text-gray-400">
            {format!("© {} {OWNER}", build_year())}
        </footer>
    }
}
