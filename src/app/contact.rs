use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::content::{SectionId, EMAIL, RESUME_PATH, SOCIAL_LINKS};
use crate::relay::RelayClient;
use crate::state::ContactForm;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=SectionId::Connect.as_str() class="py-16">
            <h2 class="text-3xl font-bold mb-8 text-gray-800 dark:text-white">"Let's Connect"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                    <h3 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-white">
                        "Get in Touch"
                    </h3>
                    <p class="mb-6 text-gray-600 dark:text-gray-300">
                        "I'm always open to new opportunities and collaborations. Feel free to reach out!"
                    </p>
                    <MessageForm />
                </div>
                <Socials />
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                log::debug!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let outcome = RelayClient::from_config().submit(&message).await;
            if let Err(e) = &outcome {
                log::warn!("contact message failed: {e}");
            }
            // the form may have been disposed while the request was in flight
            if form.try_update(|f| f.finish(outcome)).is_none() {
                log::debug!("contact form gone, dropping relay result");
            }
        });
    };

    view! {
        <form class="space-y-4 animate-fade-up" on:submit=on_submit>
            <div class="relative">
                <textarea
                    placeholder="Your message..."
                    required
                    class="w-full p-3 border border-gray-300 dark:border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none h-32 bg-white dark:bg-gray-700 text-gray-800 dark:text-white"
                    prop:value=move || form.with(|f| f.message().to_string())
                    on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
                ></textarea>
                <button
                    type="submit"
                    aria-label="Send message"
                    class="absolute bottom-3 right-3 bg-blue-500 text-white p-2 rounded-full hover:bg-blue-600 disabled:opacity-50 transition-colors"
                    disabled=move || form.with(|f| f.is_sending())
                >
                    "➤"
                </button>
            </div>
            {move || {
                form.with(|f| {
                    f.status()
                        .map(|status| {
                            let class = if f.is_success() {
                                "text-sm text-green-500"
                            } else {
                                "text-sm text-red-500"
                            };
                            view! { <p class=class>{status}</p> }
                        })
                })
            }}
        </form>
    }
}

#[component]
fn Socials() -> impl IntoView {
    let mailto = format!("mailto:{EMAIL}");
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
            <h3 class="text-2xl font-semibold mb-4">"Connect with Me"</h3>
            <p class="mb-6 text-gray-600 dark:text-gray-300">"Find me on these platforms:"</p>
            <div class="flex space-x-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="bg-gray-200 dark:bg-gray-700 p-3 rounded-full hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors text-xl"
                                aria-label=link.label
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8">
                <h4 class="text-lg font-semibold mb-2">"Email"</h4>
                <a href=mailto target="_blank" class="text-blue-500 hover:underline">
                    {EMAIL}
                </a>
            </div>
            <div class="mt-8">
                <h4 class="text-lg font-semibold mb-2">"Résumé"</h4>
                <a
                    href=RESUME_PATH
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-500 hover:underline"
                >
                    "Download PDF"
                </a>
            </div>
        </div>
    }
}
