use leptos::prelude::*;

use crate::content::{Education, SectionId, EDUCATION, HONORS};

const DETAIL: &str = "text-gray-600 dark:text-gray-400 mb-2";

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id=SectionId::Education.as_str() class="py-16">
            <h2 class="text-3xl font-bold mb-8">"Education"</h2>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 border border-gray-200 dark:border-gray-700 space-y-6">
                {EDUCATION.iter().copied().map(|school| view! { <School school /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn School(school: Education) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold mb-2">{school.school}</h3>
            <p class=DETAIL>{school.degree}</p>
            {school.minor.map(|minor| view! { <p class=DETAIL>{minor}</p> })}
            <p class=DETAIL>
                "GPA: "
                <span class="text-blue-500 dark:text-blue-300 font-semibold">{school.gpa}</span>
            </p>
            <p class=DETAIL>"Graduated: " {school.graduated}</p>
            {school
                .coursework
                .map(|coursework| view! { <p class=DETAIL>"Relevant Coursework: " {coursework}</p> })}
        </div>
    }
}

#[component]
pub fn HonorsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Honors.as_str() class="py-16">
            <h2 class="text-3xl font-bold mb-8">"Honors & Awards"</h2>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 border border-gray-200 dark:border-gray-700">
                <ul class="list-disc list-inside space-y-2 text-lg">
                    {HONORS.iter().map(|honor| view! { <li>{*honor}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
