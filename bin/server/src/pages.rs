//! Page components for the application.
//!
//! Each page renders the heading and tour link defined by
//! [`facilitipro_navigation::Page::content`].

pub mod login;
pub mod machines;
pub mod maintenance;
pub mod not_found;
pub mod shop;

pub use login::LoginPage;
pub use machines::MachinesPage;
pub use maintenance::MaintenancePage;
pub use not_found::NotFoundPage;
pub use shop::ShopPage;

use facilitipro_navigation::{Page, PageContent};
use leptos::prelude::*;
use leptos_router::components::A;

/// Shared layout for every page: a heading and one in-app link.
#[component]
fn TourPage(page: Page) -> impl IntoView {
    let PageContent { heading, link } = page.content();

    view! {
        <div class="page" data-page=page.name()>
            <h1>{heading}</h1>
            <A href=link.href>{link.label}</A>
        </div>
    }
}
