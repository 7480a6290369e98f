use college_core::{FocusTarget, NavMenu, SiteConfig};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::dom;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/fees", "Fees"),
    ("/apply", "Apply"),
    ("/sponsorship", "Sponsorship"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu = RwSignal::new(NavMenu::new(config.navigation.breakpoint_px));
    let first_link = NodeRef::<html::A>::new();

    let resize = window_event_listener(ev::resize, move |_| {
        let width = dom::viewport_width();
        if menu.try_update(|m| m.viewport_resized(width)) == Some(true) {
            log::debug!("Mobile menu closed on resize to {width}px");
        }
    });
    on_cleanup(move || resize.remove());

    let on_toggle = move |_| {
        if let Some(Some(FocusTarget::FirstMenuLink)) = menu.try_update(|m| m.toggle()) {
            request_animation_frame(move || {
                if let Some(link) = first_link.get_untracked() {
                    let _ = link.focus();
                }
            });
        }
    };

    let on_link = move |_| {
        let width = dom::viewport_width();
        menu.update(|m| {
            m.link_activated(width);
        });
    };

    view! {
        <header class="site-header">
            <div class="nav-container">
                <a href="/" class="logo">
                    {config.site.name}
                </a>

                <button
                    class="nav-toggle"
                    aria-controls="primary-menu"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.with(|m| m.aria_expanded())
                    on:click=on_toggle
                >
                    <span class="hamburger"></span>
                </button>

                <nav id="primary-menu" class="nav-menu" class:open=move || menu.with(|m| m.is_open())>
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, (href, label))| {
                            if i == 0 {
                                view! {
                                    <a href=*href node_ref=first_link on:click=on_link>
                                        {*label}
                                    </a>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <a href=*href on:click=on_link>
                                        {*label}
                                    </a>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
