use college_core::SiteConfig;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::application_form::ApplicationFormWidget;

#[component]
pub fn Apply() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <Title text=format!("Apply | {}", config.site.name) />
        <section class="page apply">
            <h1>"Apply Now"</h1>
            <p>"Fields marked as required must be filled in before you can submit."</p>
            <ApplicationFormWidget />
        </section>
    }
}
