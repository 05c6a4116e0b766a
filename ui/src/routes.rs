// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{landing::LandingPage, not_found::NotFound};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")     view=LandingPage />
      </Routes>
    }
}
