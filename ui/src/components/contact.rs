use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;
use leptos::prelude::event_target_value;
use leptos::{IntoView, component, view};
use web_sys::SubmitEvent;

use crate::content::{CONTACT_BLURB, CONTACT_HEADING, mailto_href, tel_href};

/// What the visitor typed into the contact form. Kept on the page only,
/// there is no endpoint to send it to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Swallows the submit so the browser neither reloads nor navigates.
fn hold_submit(ev: &SubmitEvent) {
    ev.prevent_default();
}

#[component]
pub fn ContactForm(#[prop(optional)] draft: Option<RwSignal<ContactDraft>>) -> impl IntoView {
    let draft = draft.unwrap_or_else(|| RwSignal::new(ContactDraft::default()));

    view! {
        <form class="grid gap-3" on:submit=move |ev| hold_submit(&ev)>
            <input
                class="rounded-xl bg-black/40 border border-white/10 px-4 py-3 outline-none"
                placeholder="Name"
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                class="rounded-xl bg-black/40 border border-white/10 px-4 py-3 outline-none"
                placeholder="Email"
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <textarea
                class="rounded-xl bg-black/40 border border-white/10 px-4 py-3 outline-none min-h-[120px]"
                placeholder="Message"
                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="rounded-2xl bg-white text-neutral-900 px-5 py-3 text-sm font-semibold"
            >"Send"</button>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="mx-auto max-w-7xl px-4 py-14">
            <div class="rounded-2xl border border-white/10 bg-white/5 p-6 grid md:grid-cols-2 gap-8">
                <div>
                    <h3 class="text-2xl font-semibold">{ CONTACT_HEADING }</h3>
                    <p class="mt-2 text-white/70 text-sm">{ CONTACT_BLURB }</p>
                    <div class="mt-6 flex gap-3">
                        <a
                            href={mailto_href()}
                            class="rounded-2xl bg-white text-neutral-900 px-5 py-3 text-sm font-semibold"
                        >"Email us"</a>
                        <a
                            href={tel_href()}
                            class="rounded-2xl border border-white/20 px-5 py-3 text-sm font-semibold hover:bg-white/10"
                        >"Call now"</a>
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
