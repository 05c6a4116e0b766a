use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::StyleAttribute;
use leptos::{IntoView, component, view};

use crate::content::{BENEFITS, Benefit};

/// Entrance delay for the card at `index`, in seconds.
fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f32 * 0.1)
}

#[component]
fn BenefitCard(benefit: Benefit, index: usize) -> impl IntoView {
    view! {
        <div
            class="animate-rise rounded-2xl bg-white/5 p-6 border border-white/10 shadow-xl"
            style=stagger(index)
        >
            <div class="text-4xl">{ benefit.icon }</div>
            <h3 class="mt-3 text-xl font-semibold">{ benefit.title }</h3>
            <p class="mt-2 text-white/70 text-sm leading-relaxed">{ benefit.text }</p>
        </div>
    }
}

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="mx-auto max-w-7xl px-4 py-14">
            <div class="grid md:grid-cols-3 gap-6">
                { BENEFITS.iter().enumerate().map(|(index, benefit)| view! {
                    <BenefitCard benefit={*benefit} index />
                }).collect::<Vec<_>>() }
            </div>
        </section>
    }
}
