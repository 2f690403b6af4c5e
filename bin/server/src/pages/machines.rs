//! Machines page component.

use super::TourPage;
use facilitipro_navigation::Page;
use leptos::prelude::*;

/// Machines page.
///
/// Reached from `/areas/:areaId/machines` and from the Shop link at
/// `/machines`; both render the same content.
#[component]
pub fn MachinesPage() -> impl IntoView {
    view! { <TourPage page=Page::Machines/> }
}
