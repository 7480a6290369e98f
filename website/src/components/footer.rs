use college_core::SiteConfig;
use leptos::prelude::*;

use super::fragment_link::FragmentLink;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let mail_href = format!("mailto:{}", config.site.admissions_email);

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{format!("\u{00A9} 2026 {}. All rights reserved.", config.site.name)}</p>
                <p>
                    <a href=mail_href>{config.site.admissions_email.clone()}</a>
                    " \u{00B7} "
                    {config.site.phone.clone()}
                </p>
                <FragmentLink href="#top" class="back-to-top">
                    "Back to top"
                </FragmentLink>
            </div>
        </footer>
    }
}
