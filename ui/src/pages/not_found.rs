use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-neutral-950 text-white grid place-items-center">
            <div class="text-center">
                <p class="text-5xl">"🚚"</p>
                <h1 class="mt-4 text-2xl font-semibold">"404 – not found"</h1>
                <a href="/" class="mt-6 inline-block rounded-2xl bg-white text-neutral-900 px-5 py-3 text-sm font-semibold">
                    "Back to the truck"
                </a>
            </div>
        </div>
    }
}
