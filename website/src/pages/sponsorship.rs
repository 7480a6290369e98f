use college_core::SiteConfig;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::sponsorship_form::SponsorshipFormWidget;

#[component]
pub fn Sponsorship() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <Title text=format!("Sponsorship | {}", config.site.name) />
        <section class="page sponsorship">
            <h1>"Partner With Us"</h1>
            <p>
                "Organizations can fund scholarships, donate equipment or sponsor student events. "
                "Tell us how you would like to help and our partnerships team will be in touch."
            </p>
            <SponsorshipFormWidget />
        </section>
    }
}
