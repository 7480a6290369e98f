use college_core::{
    ApplicationForm, CloseTrigger, Error, FeeSchedule, FieldState, ModalFocus, ModalTransition,
    APPLICATION_FIELDS, INTAKES, REJECTION_ALERT,
};
use leptos::ev::{self, SubmitEvent};
use leptos::html;
use leptos::prelude::*;

use super::confirmation_modal::ConfirmationModal;
use super::form_field::FormField;
use crate::dom;

fn options_for(name: &str) -> Vec<&'static str> {
    match name {
        "course" => FeeSchedule::builtin().course_names().collect(),
        "intake" => INTAKES.to_vec(),
        _ => Vec::new(),
    }
}

#[component]
pub fn ApplicationFormWidget() -> impl IntoView {
    let state = RwSignal::new(ApplicationForm::new());
    let mailto = RwSignal::new(String::new());

    let form_ref = NodeRef::<html::Form>::new();
    let first_input = NodeRef::<html::Input>::new();
    let close_ref = NodeRef::<html::Button>::new();

    let apply_transition = move |t: ModalTransition| {
        dom::set_page_scroll_locked(t.scroll_locked);
        request_animation_frame(move || {
            let focused = match t.focus {
                ModalFocus::CloseButton => close_ref.get_untracked().map(|el| el.focus()),
                ModalFocus::FirstFormField => first_input.get_untracked().map(|el| el.focus()),
            };
            if let Some(Err(e)) = focused {
                log::warn!("focus failed: {e:?}");
            }
        });
    };

    let on_close = Callback::new(move |trigger: CloseTrigger| {
        if let Some(Some(t)) = state.try_update(|s| s.close_modal(trigger)) {
            apply_transition(t);
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|s| s.modal().is_open()) {
            on_close.run(CloseTrigger::EscapeKey);
        }
    });
    on_cleanup(move || {
        keydown.remove();
        dom::set_page_scroll_locked(false);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match state.try_update(|s| s.submit()) {
            Some(Ok(submission)) => {
                if let Some(form) = form_ref.get_untracked() {
                    // Clears the file input, which has no bound value.
                    form.reset();
                }
                mailto.set(submission.mailto);
                apply_transition(submission.transition);
            }
            Some(Err(Error::FormInvalid { fields })) => {
                log::debug!("Application has invalid fields: {fields:?}");
                dom::alert(REJECTION_ALERT);
            }
            Some(Err(e)) => {
                log::error!("Application submission failed: {e}");
                dom::alert(REJECTION_ALERT);
            }
            None => {}
        }
    };

    let fields = APPLICATION_FIELDS
        .iter()
        .map(|spec| {
            let spec = *spec;
            let name = spec.name;
            let value = Signal::derive(move || {
                state.with(|s| s.form().value(name).unwrap_or_default().to_string())
            });
            let field_state = Signal::derive(move || {
                state.with(|s| s.form().state(name).cloned().unwrap_or(FieldState::Valid))
            });
            let on_input = Callback::new(move |v: String| {
                state.update(|s| {
                    if let Err(e) = s.set_value(name, v) {
                        log::warn!("{e}");
                    }
                });
            });
            let on_blur = Callback::new(move |_: ()| {
                state.update(|s| {
                    if let Err(e) = s.blur(name) {
                        log::warn!("{e}");
                    }
                });
            });

            if Some(name) == state.with_untracked(|s| s.form().first_field()) {
                view! {
                    <FormField
                        spec=spec
                        value=value
                        state=field_state
                        on_input=on_input
                        on_blur=on_blur
                        options=options_for(name)
                        input_ref=first_input
                    />
                }
                .into_any()
            } else {
                view! {
                    <FormField
                        spec=spec
                        value=value
                        state=field_state
                        on_input=on_input
                        on_blur=on_blur
                        options=options_for(name)
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <form id="application-form" class="application-form" novalidate=true node_ref=form_ref on:submit=on_submit>
            {fields}
            <button type="submit" class="btn-primary">
                "Submit Application"
            </button>
        </form>

        <ConfirmationModal
            modal=Signal::derive(move || state.with(|s| s.modal()))
            mailto=mailto
            on_close=on_close
            close_ref=close_ref
        />
    }
}
