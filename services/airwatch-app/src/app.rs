//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::readings_screen::ReadingsScreen;
use crate::components::ward_screen::WardScreen;

/// Root application component: header plus the two screens
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Air Quality Index Monitoring" />
        <Router>
            <header style="background-color: #4CAF50; color: white; padding: 1rem; text-align: center;">
                <h1 style="margin: 0; font-size: 1.25rem;">"Air Quality Index Monitoring"</h1>
                <nav style="margin-top: 0.5rem;">
                    <A href="/" attr:style="color: white; margin-right: 1rem;">"Live Readings"</A>
                    <A href="/wards" attr:style="color: white;">"Ward Management"</A>
                </nav>
            </header>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=ReadingsScreen />
                    <Route path=path!("/wards") view=WardScreen />
                </Routes>
            </main>
        </Router>
    }
}
