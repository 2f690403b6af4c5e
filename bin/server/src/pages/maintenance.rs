//! Maintenance page component.

use super::TourPage;
use facilitipro_navigation::Page;
use leptos::prelude::*;

/// Maintenance page, the end of the tour. Links back to Login.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    view! { <TourPage page=Page::Maintenance/> }
}
