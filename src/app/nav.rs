use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::content::{SectionId, NAV_ITEMS};
use crate::state::{NavMenu, Theme, Viewport};

/// Brings the section's top edge to the top of the viewport. Smoothness comes
/// from `scroll-behavior: smooth` in the stylesheet.
pub fn scroll_to_section(section: SectionId) {
    match document().get_element_by_id(section.as_str()) {
        Some(el) => el.scroll_into_view(),
        None => log::debug!("no element with id {section}, not scrolling"),
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn Dock(
    #[prop(into)] viewport: Signal<Viewport>,
    menu: RwSignal<NavMenu>,
    theme: RwSignal<Theme>,
) -> impl IntoView {
    let dock_ref = NodeRef::<html::Div>::new();
    let _ = on_click_outside(dock_ref, move |_| {
        if menu.try_update(|m| m.dismiss()).unwrap_or(false) {
            log::debug!("menu closed by outside click");
        }
    });

    let select = move |section: SectionId| {
        let Some(target) = menu.try_update(|m| m.select(section)) else {
            return;
        };
        scroll_to_section(target);
    };

    let panel_class = move || {
        if viewport.get().is_mobile() {
            "fixed top-4 right-4 left-4 bg-white/95 dark:bg-gray-900/95 backdrop-blur-lg shadow-xl z-50 rounded-2xl border border-gray-200/50 dark:border-gray-800/50 animate-fade-down"
        } else {
            "flex items-center space-x-4"
        }
    };
    let list_class = move || {
        if viewport.get().is_mobile() {
            "grid grid-cols-1 gap-1 px-2 py-3"
        } else {
            "flex items-center space-x-4"
        }
    };

    view! {
        <div class="relative" node_ref=dock_ref>
            <Show when=move || viewport.get().is_mobile()>
                <button
                    class="w-8 h-8 flex items-center justify-center rounded-full bg-gray-200/50 dark:bg-gray-800/50 backdrop-blur-sm hover:bg-gray-300/50 dark:hover:bg-gray-700/50 transition-all"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </Show>
            <Show when=move || menu.get().is_open()>
                <div
                    class="fixed inset-0 bg-black/20 backdrop-blur-sm z-40"
                    on:click=move |_| {
                        menu.update(|m| {
                            m.dismiss();
                        })
                    }
                ></div>
            </Show>
            <Show when=move || menu.get().panel_visible()>
                <div class=panel_class>
                    <div class=list_class>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <DockIcon
                                        icon=Signal::stored(item.icon)
                                        label=Signal::stored(item.label)
                                        viewport
                                        on_select=Callback::new(move |_: ()| select(id))
                                    />
                                }
                            })
                            .collect_view()}
                        <DockIcon
                            icon=Signal::derive(move || theme.get().toggle_icon())
                            label=Signal::derive(move || theme.get().toggle_label())
                            viewport
                            on_select=Callback::new(move |_: ()| theme.update(|t| *t = t.toggled()))
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DockIcon(
    icon: Signal<&'static str>,
    label: Signal<&'static str>,
    viewport: Signal<Viewport>,
    on_select: Callback<()>,
) -> impl IntoView {
    let item_class = move || {
        if viewport.get().is_mobile() {
            "flex items-center gap-3 w-full p-2 hover:bg-gray-100/50 dark:hover:bg-gray-800/50 rounded-lg transition-all cursor-pointer"
        } else {
            "flex flex-col items-center gap-1 cursor-pointer transition-all duration-300 hover:translate-y-1 hover:scale-[1.02] active:scale-[0.98]"
        }
    };
    let icon_class = move || {
        if viewport.get().is_mobile() {
            "w-8 h-8 flex items-center justify-center rounded-lg bg-gray-100 dark:bg-gray-800"
        } else {
            "w-9 h-9 flex items-center justify-center rounded-lg bg-gray-100 dark:bg-gray-700"
        }
    };
    let label_class = move || {
        if viewport.get().is_mobile() {
            "font-medium text-sm text-gray-600 dark:text-gray-300"
        } else {
            "font-medium text-xs text-gray-700 dark:text-gray-300"
        }
    };

    view! {
        <button class=item_class on:click=move |_| on_select.run(())>
            <span class=icon_class>{move || icon.get()}</span>
            <span class=label_class>{move || label.get()}</span>
        </button>
    }
}
