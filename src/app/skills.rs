use leptos::prelude::*;

use crate::content::{SectionId, SkillGroup, TechCategory, SKILL_GROUPS, TECH_CATEGORIES};
use crate::state::{DisclosureSet, PointerKind, Viewport};

#[component]
pub fn SkillsSection(#[prop(into)] viewport: Signal<Viewport>) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-16 section-content">
            <h2 class="text-3xl font-bold mb-8 text-gray-900 dark:text-white">"Tech Stack"</h2>
            <TechStack viewport />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-10">
                {SKILL_GROUPS.iter().copied().map(|group| view! { <SkillCard group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TechStack(viewport: Signal<Viewport>) -> impl IntoView {
    let cards = RwSignal::new(DisclosureSet::new(TECH_CATEGORIES.len()));
    let hint = move || {
        if viewport.get().is_mobile() {
            "Tap cards to explore skills"
        } else {
            "Hover over cards to explore skills"
        }
    };

    view! {
        <Show when=move || cards.with(|c| c.hint_visible())>
            <div class="mb-4 bg-gradient-to-r from-blue-50 to-purple-50 dark:from-blue-900/20 dark:to-purple-900/20 rounded-lg py-2 px-3 shadow-md backdrop-blur-sm border border-blue-100/50 dark:border-blue-800/50 animate-fade-down">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-base animate-bounce-soft">"✨"</span>
                        <span class="text-sm text-gray-600 dark:text-gray-400">{hint}</span>
                    </div>
                    <button
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 transition-colors duration-200 ml-2"
                        aria-label="Dismiss hint"
                        on:click=move |_| cards.update(|c| c.dismiss_hint())
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-6">
            {TECH_CATEGORIES
                .iter()
                .copied()
                .enumerate()
                .map(|(index, tech)| view! { <TechCard index tech cards /> })
                .collect_view()}
        </div>
    }
}

/// Mouse pointers open the card while hovering; touch and pen taps toggle it.
/// The tap acts on `click` so a swipe across the grid leaves the cards alone.
#[component]
fn TechCard(index: usize, tech: TechCategory, cards: RwSignal<DisclosureSet>) -> impl IntoView {
    let is_active = move || cards.with(|c| c.is_active(index));
    // `click` is not a PointerEvent everywhere, remember what pressed
    let pressed_by = StoredValue::new(PointerKind::default());

    view! {
        <div
            class="relative"
            on:pointerenter=move |ev| {
                let kind = PointerKind::from_pointer_type(&ev.pointer_type());
                cards.update(|c| c.pointer_enter(index, kind))
            }
            on:pointerleave=move |ev| {
                let kind = PointerKind::from_pointer_type(&ev.pointer_type());
                cards.update(|c| c.pointer_leave(index, kind))
            }
            on:pointerdown=move |ev| {
                pressed_by.set_value(PointerKind::from_pointer_type(&ev.pointer_type()))
            }
            on:click=move |_| {
                let kind = pressed_by.get_value();
                cards.update(|c| c.click(index, kind))
            }
        >
            <div class=move || {
                if is_active() {
                    "bg-white dark:bg-gray-800 rounded-xl shadow-lg cursor-pointer transition-transform duration-200 scale-[1.02]"
                } else {
                    "bg-white dark:bg-gray-800 rounded-xl shadow-lg cursor-pointer transition-transform duration-200"
                }
            }>
                <div class="p-4 md:p-6">
                    <div class="flex items-start space-x-3 md:space-x-4">
                        <div class="w-10 h-10 md:w-12 md:h-12 flex-shrink-0 flex items-center justify-center rounded-xl bg-blue-100 dark:bg-blue-900/30 text-xl">
                            {tech.icon}
                        </div>
                        <div class="flex flex-col">
                            <h3 class="font-semibold text-sm md:text-base text-gray-900 dark:text-white">
                                {tech.name}
                            </h3>
                            <p class="text-xs md:text-sm text-gray-500 dark:text-gray-400">
                                {tech.description}
                            </p>
                        </div>
                    </div>
                    <Show when=is_active>
                        <div class="mt-4 md:mt-6 overflow-hidden animate-expand">
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-2 md:gap-3">
                                {tech
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="bg-gray-100 dark:bg-gray-700 rounded-lg px-3 py-1.5 md:px-4 md:py-2 text-xs md:text-sm font-medium text-gray-700 dark:text-gray-300">
                                                {*skill}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    let hovered = RwSignal::new(DisclosureSet::without_hint(group.skills.len()));
    let pressed_by = StoredValue::new(PointerKind::default());

    view! {
        <div class="bg-gray-800/10 backdrop-blur-md rounded-xl p-6 transition-all duration-300 hover:scale-[1.02]">
            <h3 class="text-xl font-semibold mb-4">{group.title}</h3>
            <div class="space-y-4">
                {group
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! {
                            <div
                                class="relative"
                                on:pointerenter=move |ev| {
                                    let kind = PointerKind::from_pointer_type(&ev.pointer_type());
                                    hovered.update(|h| h.pointer_enter(index, kind))
                                }
                                on:pointerleave=move |ev| {
                                    let kind = PointerKind::from_pointer_type(&ev.pointer_type());
                                    hovered.update(|h| h.pointer_leave(index, kind))
                                }
                                on:pointerdown=move |ev| {
                                    pressed_by
                                        .set_value(PointerKind::from_pointer_type(&ev.pointer_type()))
                                }
                                on:click=move |_| {
                                    let kind = pressed_by.get_value();
                                    hovered.update(|h| h.click(index, kind))
                                }
                            >
                                <div class="flex justify-between items-center mb-1">
                                    <span class=move || {
                                        if hovered.with(|h| h.is_active(index)) {
                                            "font-medium text-blue-500"
                                        } else {
                                            "font-medium"
                                        }
                                    }>{skill.name}</span>
                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                        {format!("{}%", skill.proficiency.percent())}
                                    </span>
                                </div>
                                <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-blue-500 rounded-full animate-fill"
                                        style=skill.proficiency.bar_style()
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
