use leptos::prelude::*;

use crate::content::{Project, SectionId, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-16 section-content">
            <h2 class="text-3xl font-bold mb-8">"Selected Works"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 text-justify">
                {PROJECTS.iter().copied().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden transition-all duration-300 hover:shadow-xl">
            <div class="relative h-64 md:h-80">
                <img src=project.image alt=project.title class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/50 flex items-center justify-center opacity-0 hover:opacity-100 transition-opacity duration-300">
                    <h3 class="text-2xl font-bold text-white text-center px-4">{project.title}</h3>
                </div>
            </div>
            <div class="p-6">
                <p class="mb-4 text-gray-600 dark:text-gray-300">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-gray-200 dark:bg-gray-700 rounded-full px-3 py-1 text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center text-blue-500 hover:text-blue-600 transition-colors"
                            >
                                "Visit Project"
                                <span class="ml-2">"↗"</span>
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
