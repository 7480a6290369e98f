pub mod components;
pub mod data;
pub mod dom;
pub mod pages;

use college_core::SiteConfig;
use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::apply::Apply;
use pages::fees::Fees;
use pages::home::Home;
use pages::sponsorship::Sponsorship;

const SITE_TOML: &str = include_str!("../site.toml");

/// Settings baked in from `site.toml`.
pub fn site_config() -> SiteConfig {
    SiteConfig::load(SITE_TOML)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(site_config());

    view! {
        <Router>
            <ScrollToTop />
            <div id="top" class="site">
                <Navbar />
                <main class="site-main">
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/fees") view=Fees />
                        <Route path=path!("/apply") view=Apply />
                        <Route path=path!("/sponsorship") view=Sponsorship />
                    </Routes>
                </main>
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
