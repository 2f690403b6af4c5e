//! 404 page component.

use super::TourPage;
use facilitipro_navigation::Page;
use leptos::prelude::*;

/// Rendered for any path the router does not know.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! { <TourPage page=Page::NotFound/> }
}
