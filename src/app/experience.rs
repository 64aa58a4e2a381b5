use leptos::prelude::*;

use crate::content::{Experience, SectionId, EXPERIENCES};

/// Each timeline entry enters this much later than the one above it.
const STAGGER_MS: usize = 100;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-16">
            <h2 class="text-3xl font-bold mb-8">"Experience"</h2>
            <div class="space-y-8">
                {EXPERIENCES
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(index, job)| {
                        let delay_ms = index * STAGGER_MS;
                        view! { <TimelineEntry job delay_ms /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(job: Experience, delay_ms: usize) -> impl IntoView {
    let style = format!("animation-delay: {delay_ms}ms");
    view! {
        <div class="relative flex animate-fade-up" style=style>
            <div class="absolute left-0 h-full w-6 flex items-center">
                <div class="h-full w-px bg-gray-200 dark:bg-gray-700 absolute left-3"></div>
                <div class="w-6 h-6 rounded-full bg-blue-500 border-4 border-white dark:border-gray-800 z-10"></div>
            </div>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 ml-10 flex-grow">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-2">
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">{job.title}</h3>
                    <span class="text-sm text-gray-500 dark:text-gray-400 md:ml-4">{job.date}</span>
                </div>
                <div class="text-lg font-medium text-blue-500 dark:text-blue-400 mb-2">
                    {job.company}
                </div>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{job.description}</p>
                <div class="flex flex-wrap gap-2">
                    {job
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 text-sm rounded-full bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
