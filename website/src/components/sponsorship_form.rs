use std::time::Duration;

use college_core::{FieldState, SiteConfig, SponsorshipForm, SPONSORSHIP_FIELDS, SPONSORSHIP_TYPES};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::form_field::FormField;
use crate::dom;

#[component]
pub fn SponsorshipFormWidget() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let delay = Duration::from_millis(config.sponsorship.feedback_delay_ms);

    let state = RwSignal::new(SponsorshipForm::new());
    let form_ref = NodeRef::<html::Form>::new();
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // The feedback timer must not outlive the page it resets.
    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let finish = move || {
        pending.set_value(None);
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
        if let Some(Some(message)) = state.try_update(|s| s.finish()) {
            dom::alert(message);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match state.try_update(|s| s.submit()) {
            Some(Ok(Some(_))) => match set_timeout_with_handle(finish, delay) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(e) => {
                    log::error!("failed to schedule sponsorship reset: {e:?}");
                    finish();
                }
            },
            Some(Ok(None)) | None => {}
            Some(Err(e)) => log::error!("Sponsorship submission failed: {e}"),
        }
    };

    let fields = SPONSORSHIP_FIELDS
        .iter()
        .map(|spec| {
            let spec = *spec;
            let name = spec.name;
            let value = Signal::derive(move || {
                state.with(|s| s.form().value(name).unwrap_or_default().to_string())
            });
            let on_input = Callback::new(move |v: String| {
                state.update(|s| {
                    if let Err(e) = s.set_value(name, v) {
                        log::warn!("{e}");
                    }
                });
            });
            let options = if name == "sponsorship_type" {
                SPONSORSHIP_TYPES.to_vec()
            } else {
                Vec::new()
            };

            view! {
                <FormField
                    spec=spec
                    value=value
                    state=Signal::derive(|| FieldState::Valid)
                    on_input=on_input
                    options=options
                />
            }
        })
        .collect_view();

    view! {
        <form id="sponsorship-form" class="sponsorship-form" node_ref=form_ref on:submit=on_submit>
            {fields}
            <button
                type="submit"
                class="btn-primary"
                disabled=move || state.with(|s| s.button().disabled)
                style:background-color=move || state.with(|s| s.button().accent.hex())
            >
                {move || state.with(|s| s.button().label.clone())}
            </button>
        </form>
    }
}
