use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Memo;
use leptos::prelude::RwSignal;
use leptos::prelude::With;
use leptos::{IntoView, component, view};

use crate::components::{
    Benefits, ContactSection, Hero, MediaPicker, PricingMessage, SiteFooter, SiteHeader,
};
use crate::preview::{BlobUrls, MediaPreview};

/// The whole page. Owns the preview state; dropping the page's owner
/// drops the state, which releases any live preview URI.
#[component]
pub fn LandingPage() -> impl IntoView {
    let preview = RwSignal::new_local(MediaPreview::<BlobUrls>::default());
    let preview_uri = Memo::new(move |_| preview.with(|p| p.uri().map(str::to_owned)));

    view! {
        <div class="min-h-screen bg-neutral-950 text-white">
            <SiteHeader />
            <Hero preview_uri>
                <MediaPicker preview />
            </Hero>
            <Benefits />
            <PricingMessage />
            <ContactSection />
            <SiteFooter />
        </div>
    }
}
