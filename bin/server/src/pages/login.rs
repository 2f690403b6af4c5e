//! Login page component.

use super::TourPage;
use facilitipro_navigation::Page;
use leptos::prelude::*;

/// Login page, the start of the tour.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <TourPage page=Page::Login/> }
}
