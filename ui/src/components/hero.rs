use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::IntoAny;
use leptos::prelude::PropAttribute;
use leptos::prelude::Signal;
use leptos::prelude::Children;
use leptos::{IntoView, component, view};

use crate::components::BadgePill;
use crate::content::{
    HERO_BADGE, HERO_CTA, HERO_HEADLINE, HERO_TAGLINE, PLACEHOLDER_GLYPH, PLACEHOLDER_TEXT,
};

/// The video header: a playable surface when a preview exists, the
/// placeholder otherwise.
#[component]
pub fn PreviewSurface(uri: Option<String>) -> impl IntoView {
    match uri {
        Some(src) => view! {
            <video
                src=src
                class="h-full w-full object-cover"
                autoplay=true
                loop=true
                muted=true
                // the attribute only sets defaultMuted on a created element
                prop:muted=true
                playsinline=true
                controls=true
            ></video>
        }
        .into_any(),
        None => view! {
            <div class="h-full w-full bg-gradient-to-br from-neutral-800 to-neutral-900 grid place-items-center">
                <div class="text-center opacity-80">
                    <div class="text-5xl">{ PLACEHOLDER_GLYPH }</div>
                    <p class="mt-2 text-sm text-white/70">{ PLACEHOLDER_TEXT }</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Hero(
    #[prop(into)] preview_uri: Signal<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="relative">
            <div class="relative aspect-[16/9] w-full overflow-hidden">
                { move || view! { <PreviewSurface uri=preview_uri.get() /> } }
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-neutral-950 via-neutral-950/30 to-transparent"></div>
            </div>

            <div class="pointer-events-none absolute inset-0 flex items-end">
                <div class="mx-auto max-w-7xl w-full px-4 pb-10">
                    <div class="pointer-events-auto max-w-3xl animate-rise">
                        <BadgePill badge=HERO_BADGE />
                        <h1 class="mt-4 text-3xl md:text-5xl font-extrabold leading-tight">
                            { HERO_HEADLINE }
                        </h1>
                        <p class="mt-4 text-white/80 max-w-xl text-base">{ HERO_TAGLINE }</p>
                        <div class="mt-6 flex flex-wrap items-center gap-3">
                            <a
                                href={HERO_CTA.href}
                                class="rounded-2xl bg-white text-neutral-900 px-5 py-3 text-sm font-semibold"
                            >{ HERO_CTA.label }</a>
                            { children.map(|c| c()) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn empty_preview_renders_placeholder_only() {
        let html = view! { <PreviewSurface uri=None /> }.to_html();

        assert!(html.contains("Video coming soon"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn active_preview_renders_playable_video() {
        let html = view! { <PreviewSurface uri={Some("blob:http://localhost/abc".to_string())} /> }
            .to_html();

        assert!(html.contains("<video"));
        assert!(html.contains("src=\"blob:http://localhost/abc\""));
        for attr in ["autoplay", "loop", "muted", "playsinline", "controls"] {
            assert!(html.contains(attr), "missing {attr} in {html}");
        }
        assert!(!html.contains("Video coming soon"));
    }

    #[test]
    fn hero_follows_preview_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let empty = view! { <Hero preview_uri={Signal::stored(None::<String>)} /> }.to_html();
            assert!(empty.contains("Video coming soon"));
            assert!(empty.contains(HERO_HEADLINE));
            assert!(empty.contains("href=\"#contact\""));

            let bound = view! {
                <Hero preview_uri={Signal::stored(Some("blob:test/1-clip.mp4".to_string()))} />
            }
            .to_html();
            assert!(bound.contains("src=\"blob:test/1-clip.mp4\""));
            assert!(!bound.contains("Video coming soon"));
        });
    }
}
