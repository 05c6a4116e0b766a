pub mod benefits;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod picker;
pub mod pricing;

pub use benefits::Benefits;
pub use contact::{ContactDraft, ContactForm, ContactSection};
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::{Hero, PreviewSurface};
pub use picker::MediaPicker;
pub use pricing::PricingMessage;

use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::content::Badge;

/// Pill with a label and a timestamp, used above section headings.
#[component]
pub fn BadgePill(badge: Badge) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 rounded-full bg-white/10 px-3 py-1 text-xs text-white/80 backdrop-blur">
            <span>{ badge.label }</span>
            <span class="text-white/60">{ badge.stamp }</span>
        </div>
    }
}
