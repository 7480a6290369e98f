use college_core::SiteConfig;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::fee_calculator::FeeCalculator;
use crate::components::fee_table::FeeTable;

#[component]
pub fn Fees() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <Title text=format!("Fees | {}", config.site.name) />
        <section class="page fees">
            <h1>"Fees & Estimates"</h1>
            <p>"Pick a course and how long you plan to study to get an estimate of your total fees."</p>
            <FeeCalculator />
            <h2>"Fee Structure"</h2>
            <FeeTable />
        </section>
    }
}
