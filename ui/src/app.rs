use leptos::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::content::{BRAND, PAGE_DESCRIPTION};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text=BRAND />
      <Meta name="description" content=PAGE_DESCRIPTION />
      <Router>
        <RoutesMenu/>
      </Router>
    }
}
