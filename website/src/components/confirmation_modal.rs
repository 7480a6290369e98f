use college_core::{recipient_of, CloseTrigger, ModalState};
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

/// Overlay shown after an application is accepted.
///
/// The owner decides what a close means; this component only reports the
/// trigger through `on_close`.
#[component]
pub fn ConfirmationModal(
    #[prop(into)] modal: Signal<ModalState>,
    #[prop(into)] mailto: Signal<String>,
    on_close: Callback<CloseTrigger>,
    close_ref: NodeRef<html::Button>,
) -> impl IntoView {
    let overlay = NodeRef::<html::Div>::new();

    // Only clicks on the overlay itself count, not on the dialog content.
    let on_backdrop = move |ev: MouseEvent| {
        let (Some(target), Some(overlay)) = (ev.target(), overlay.get_untracked()) else {
            return;
        };
        let overlay: &web_sys::EventTarget = overlay.as_ref();
        if &target == overlay {
            on_close.run(CloseTrigger::Backdrop);
        }
    };

    view! {
        <div
            id="confirmation-modal"
            class="modal"
            role="dialog"
            aria-modal="true"
            aria-labelledby="confirmation-title"
            aria-hidden=move || modal.with(|m| m.aria_hidden())
            style:display=move || modal.with(|m| m.display())
            node_ref=overlay
            on:click=on_backdrop
        >
            <div class="modal-content">
                <button
                    class="close-btn"
                    aria-label="Close"
                    node_ref=close_ref
                    on:click=move |_| on_close.run(CloseTrigger::CloseButton)
                >
                    "\u{00D7}"
                </button>
                <h2 id="confirmation-title">"Application Received"</h2>
                <p>
                    "Thank you for applying. Our admissions office will review your application and contact you within five working days."
                </p>
                <p class="modal-recipient">
                    {move || {
                        mailto
                            .with(|link| recipient_of(link))
                            .map(|to| format!("Copy goes to {to}"))
                    }}
                </p>
                <a id="modal-mailto-btn" class="btn-primary" href=move || mailto.get()>
                    "Email me a copy"
                </a>
            </div>
        </div>
    }
}
