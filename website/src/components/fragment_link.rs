use college_core::same_page_fragment;
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use crate::dom;

/// In-page `#fragment` link that smooth-scrolls instead of jumping.
#[component]
pub fn FragmentLink(
    href: &'static str,
    children: Children,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let anchor = NodeRef::<html::A>::new();

    let on_click = move |ev: MouseEvent| {
        let link_path = anchor
            .get_untracked()
            .map(|a| a.pathname())
            .unwrap_or_default();
        let current = dom::current_path();

        let Some(id) = same_page_fragment(href, &link_path, &current) else {
            return;
        };
        ev.prevent_default();
        if !dom::scroll_to_element(id) {
            log::debug!("No element with id '{id}' to scroll to");
        }
    };

    view! {
        <a href=href class=class node_ref=anchor on:click=on_click>
            {children()}
        </a>
    }
}
