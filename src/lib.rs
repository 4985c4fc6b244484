pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use config::ApiConfig;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::browse::Browse;
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Router>
            <Title text="Komiku & Winbu API Explorer" />
            <ScrollToTop />
            <div class="min-h-screen bg-gray-950 text-gray-200 selection:bg-blue-500/30 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/browse") view=Browse />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
