//! Main Leptos application component and routing.
//!
//! The routes mirror [`facilitipro_navigation::table::FACILITY_ROUTES`].
//! Path parameters are captured by the router but the pages do not read
//! them.

use crate::pages::{LoginPage, MachinesPage, MaintenancePage, NotFoundPage, ShopPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="FacilitiPro"/>
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/shop") view=ShopPage/>
                    <Route path=path!("/areas/:areaId/machines") view=MachinesPage/>
                    <Route path=path!("/machines/:machineId/maintenance") view=MaintenancePage/>
                    <Route path=path!("/machines") view=MachinesPage/>
                    <Route path=path!("/maintenance") view=MaintenancePage/>
                </Routes>
            </main>
        </Router>
    }
}
