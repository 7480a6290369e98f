use college_core::{format_amount, FeeSchedule, SiteConfig};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::fragment_link::FragmentLink;
use crate::data::{admission_steps, highlights};

#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let currency = config.currency.label.clone();
    let feats = highlights();

    let programs = FeeSchedule::builtin()
        .courses()
        .map(|course| {
            let from = format_amount(&currency, course.fees.per_term_total());
            view! {
                <li class="program-card">
                    <h3>{course.name}</h3>
                    <p>{format!("From {from} per term")}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text=config.site.name.clone() />
        <div class="home">
            // Hero Section
            <section class="hero">
                <h1>{config.site.name.clone()}</h1>
                <p class="tagline">{config.site.tagline.clone()}</p>
                <div class="hero-actions">
                    <FragmentLink href="#programs" class="btn-primary">
                        "Explore Programmes"
                    </FragmentLink>
                    <FragmentLink href="#admissions" class="btn-secondary">
                        "How to Apply"
                    </FragmentLink>
                </div>
            </section>

            // Highlights
            <section class="highlights">
                {feats
                    .into_iter()
                    .map(|feat| {
                        view! {
                            <div class="highlight">
                                <h3>{feat.title}</h3>
                                <p>{feat.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section id="programs" class="programs">
                <h2>"Our Programmes"</h2>
                <ul class="program-grid">{programs}</ul>
                <a href="/fees" class="btn-secondary">"See full fee breakdown"</a>
            </section>

            <section id="admissions" class="admissions">
                <h2>"Admissions"</h2>
                <ol class="steps">
                    {admission_steps()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <li>
                                    <strong>{s.step}</strong>
                                    ": "
                                    {s.detail}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <a href="/apply" class="btn-primary">"Start your application"</a>
                " "
                <FragmentLink href="#contact">"Questions? Contact us"</FragmentLink>
            </section>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p>
                    "Admissions: "
                    <a href=format!("mailto:{}", config.site.admissions_email)>
                        {config.site.admissions_email.clone()}
                    </a>
                </p>
                <p>{format!("Phone: {}", config.site.phone)}</p>
            </section>
        </div>
    }
}
