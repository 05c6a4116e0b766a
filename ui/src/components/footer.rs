use chrono::Datelike;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::content::{FOOTER_LINKS, copyright};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-white/10">
            <div class="mx-auto max-w-7xl px-4 py-8 text-sm text-white/60 flex flex-wrap items-center justify-between gap-4">
                <div>{ copyright(year) }</div>
                <div class="flex items-center gap-4">
                    { FOOTER_LINKS.iter().map(|link| view! {
                        <a href={link.href} class="hover:text-white">{ link.label }</a>
                    }).collect::<Vec<_>>() }
                </div>
            </div>
        </footer>
    }
}
