//! Shop page component.

use super::TourPage;
use facilitipro_navigation::Page;
use leptos::prelude::*;

/// Shop page, reached from the login page.
#[component]
pub fn ShopPage() -> impl IntoView {
    view! { <TourPage page=Page::Shop/> }
}
