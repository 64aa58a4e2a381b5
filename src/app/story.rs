use leptos::prelude::*;

use crate::content::{
    Milestone, SectionId, AVATAR_PATH, LINKEDIN_URL, MILESTONES, OWNER, PERSPECTIVE, TAGLINE,
};
use crate::state::TabSelector;

const TAB_SELECTED: &str = "flex-1 py-4 px-2 text-center cursor-pointer transition-colors duration-300 bg-blue-500 text-white";
const TAB_IDLE: &str = "flex-1 py-4 px-2 text-center cursor-pointer transition-colors duration-300 bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-600";

#[component]
pub fn StorySection() -> impl IntoView {
    view! {
        <section
            id=SectionId::Story.as_str()
            class="py-16 bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 rounded-xl"
        >
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold mb-12 text-center text-gray-800 dark:text-gray-100 animate-fade-up">
                    "My Journey in Tech"
                </h2>
                <div class="flex flex-col lg:flex-row gap-12 items-center lg:items-start">
                    <div class="w-full lg:w-1/3 animate-slide-right">
                        <div class="relative w-64 h-64 mx-auto">
                            <div class="absolute inset-0 bg-blue-500 opacity-10 rounded-3xl"></div>
                            <div class="absolute inset-0 overflow-hidden border-4 border-white dark:border-gray-800 shadow-lg rounded-3xl">
                                <img
                                    src=AVATAR_PATH
                                    alt=OWNER
                                    class="w-full h-full object-cover"
                                    style="object-position: 50% 3%"
                                />
                            </div>
                        </div>
                        <div class="mt-8 text-center">
                            <h3 class="text-2xl font-semibold text-gray-800 dark:text-gray-100">
                                {OWNER}
                            </h3>
                            <p class="text-gray-600 dark:text-gray-300 mt-2">{TAGLINE}</p>
                        </div>
                    </div>
                    <div class="w-full lg:w-2/3 animate-slide-left">
                        {TabSelector::new(MILESTONES).map(|tabs| view! { <MilestoneTabs tabs /> })}
                        <Perspective />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MilestoneTabs(tabs: TabSelector<Milestone>) -> impl IntoView {
    let tabs = RwSignal::new(tabs);

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-xl overflow-hidden">
            <div class="flex">
                {tabs
                    .get_untracked()
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(index, milestone)| {
                        view! {
                            <button
                                class=move || {
                                    if tabs.with(|t| t.is_selected(index)) {
                                        TAB_SELECTED
                                    } else {
                                        TAB_IDLE
                                    }
                                }
                                on:click=move |_| {
                                    tabs.update(|t| {
                                        t.select(index);
                                    })
                                }
                            >
                                {milestone.year}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            // keyed on the milestone so the pane is replaced and its entrance replays
            <For
                each=move || [tabs.with(|t| t.current())]
                key=|milestone| milestone.year
                children=|milestone| {
                    view! {
                        <div class="p-6 animate-fade-up">
                            <h3 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-gray-100">
                                {milestone.event}
                            </h3>
                            <p class="text-gray-600 dark:text-gray-300">{milestone.details}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn Perspective() -> impl IntoView {
    view! {
        <div
            class="mt-8 bg-white dark:bg-gray-800 rounded-lg shadow-xl p-6 animate-fade-up"
            style="animation-delay: 200ms"
        >
            <h3 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-gray-100">
                "My Unique Perspective"
            </h3>
            <p class="text-gray-600 dark:text-gray-300 mb-4 text-justify">{PERSPECTIVE}</p>
            <a
                href=LINKEDIN_URL
                target="_blank"
                rel="noopener noreferrer"
                class="mt-6 px-6 py-2 bg-blue-500 text-white rounded-full inline-flex items-center group transition-all duration-300 hover:bg-blue-600 hover:scale-105 active:scale-95"
            >
                "Connect with me"
                <span class="ml-2 group-hover:translate-x-1 transition-transform duration-300">
                    "›"
                </span>
            </a>
        </div>
    }
}
