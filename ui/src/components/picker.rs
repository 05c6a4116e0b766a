use leptos::html;
use leptos::logging::{error, log};
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::LocalStorage;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;
use leptos::prelude::event_target;
use leptos::{IntoView, component, view};
use web_sys::HtmlInputElement;

use crate::content::PICK_VIDEO_LABEL;
use crate::preview::{BlobUrls, MediaPreview, Selection, VIDEO_ACCEPT};

/// Button plus hidden file input feeding the page's preview state.
#[component]
pub fn MediaPicker(preview: RwSignal<MediaPreview<BlobUrls>, LocalStorage>) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        preview.update(|p| match p.select(file) {
            Ok(Selection::Cancelled) => log!("video selection cancelled"),
            Ok(outcome) => log!("video preview {outcome:?}: {}", p.uri().unwrap_or_default()),
            Err(e) => error!("video preview failed: {e:#}"),
        });

        // same file twice in a row would not fire `change` otherwise
        input.set_value("");
    };

    view! {
        <input
            node_ref=input_ref
            type="file"
            accept=VIDEO_ACCEPT
            class="hidden"
            on:change=on_change
        />
        <button
            type="button"
            class="rounded-2xl border border-white/20 px-5 py-3 text-sm font-semibold hover:bg-white/10"
            on:click=open_picker
        >{ PICK_VIDEO_LABEL }</button>
    }
}
