use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::{IntoView, component, view};

use crate::components::BadgePill;
use crate::content::{
    PRICING_BADGE, PRICING_FOCUS, PRICING_HEADING, PRICING_LINES, PRICING_SUBHEADING,
};

#[component]
pub fn PricingMessage() -> impl IntoView {
    view! {
        <section id="pricing" class="mx-auto max-w-7xl px-4 py-14">
            <div class="max-w-3xl">
                <BadgePill badge=PRICING_BADGE />
                <h2 class="mt-4 text-2xl md:text-4xl font-bold">{ PRICING_HEADING }</h2>
                <p class="mt-2 text-white/70">{ PRICING_SUBHEADING }</p>

                <ul class="mt-6 space-y-3 text-base">
                    <li class="flex items-start gap-3">
                        <span class="mt-1">"•"</span>
                        <span>{ PRICING_FOCUS }</span>
                    </li>
                </ul>

                <div class="mt-6 grid gap-3">
                    { PRICING_LINES.iter().map(|line| view! {
                        <div class="rounded-2xl border border-white/10 bg-white/5 px-4 py-3">
                            <div class="text-sm">{ *line }</div>
                        </div>
                    }).collect::<Vec<_>>() }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn renders_every_pricing_line() {
        let html = view! { <PricingMessage /> }.to_html();

        assert!(html.contains("id=\"pricing\""));
        assert!(html.contains(PRICING_HEADING));
        assert!(html.contains("00:40"));
        for line in PRICING_LINES {
            assert!(html.contains(line), "missing {line}");
        }
    }
}
