use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::content::{BRAND, BRAND_GLYPH, NAV_LINKS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur bg-neutral-950/70 border-b border-white/10">
            <div class="mx-auto max-w-7xl px-4 py-3 flex items-center justify-between">
                <a href="#" class="flex items-center gap-3">
                    <div class="h-9 w-9 rounded-2xl bg-white/10 grid place-items-center text-lg">{ BRAND_GLYPH }</div>
                    <span class="font-semibold tracking-wide">{ BRAND }</span>
                </a>
                <nav class="hidden md:flex items-center gap-6 text-sm text-white/80">
                    { NAV_LINKS.iter().map(|link| view! {
                        <a href={link.href} class="hover:text-white">{ link.label }</a>
                    }).collect::<Vec<_>>() }
                </nav>
            </div>
        </header>
    }
}
