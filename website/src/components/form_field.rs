use college_core::{FieldSpec, FieldState, InputKind};
use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Label, control and inline error for one form field.
///
/// The control is driven by `value`/`state` and reports back through
/// `on_input` and `on_blur`. File inputs report the selected file name.
#[component]
pub fn FormField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] state: Signal<FieldState>,
    on_input: Callback<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(optional)] options: Vec<&'static str>,
    #[prop(optional)] input_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let name = spec.name;
    let id = format!("field-{name}");
    let error_id = format!("{id}-error");
    let required = spec.required;

    let blur = move |_| {
        if let Some(cb) = on_blur {
            cb.run(());
        }
    };
    let aria_invalid = move || state.with(|s| s.aria_invalid());

    let control = match spec.kind {
        InputKind::Hidden => view! {
            <input type="hidden" name=name prop:value=move || value.get() />
        }
        .into_any(),
        InputKind::File => view! {
            <input
                type="file"
                id=id.clone()
                name=name
                on:change=move |ev| {
                    let file_name = event_target::<HtmlInputElement>(&ev)
                        .files()
                        .and_then(|files| files.get(0))
                        .map(|file| file.name())
                        .unwrap_or_default();
                    on_input.run(file_name);
                }
            />
        }
        .into_any(),
        InputKind::Select => view! {
            <select
                id=id.clone()
                name=name
                required=required
                aria-invalid=aria_invalid
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
                on:blur=blur
            >
                <option value="">{format!("Select {}", spec.label.to_lowercase())}</option>
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt>{opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        InputKind::Textarea => view! {
            <textarea
                id=id.clone()
                name=name
                rows="4"
                required=required
                aria-invalid=aria_invalid
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=blur
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_ref = input_ref.unwrap_or_else(NodeRef::new);
            view! {
                <input
                    type=kind.input_type()
                    id=id.clone()
                    name=name
                    required=required
                    aria-invalid=aria_invalid
                    aria-describedby=error_id.clone()
                    node_ref=input_ref
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=blur
                />
            }
            .into_any()
        }
    };

    if spec.kind == InputKind::Hidden {
        return control;
    }

    view! {
        <div class="form-group">
            <label for=id>{spec.label}</label>
            {control}
            <span
                id=error_id
                class="error-message"
                role="alert"
                style:display=move || state.with(|s| s.error_display())
            >
                {move || state.with(|s| s.message().to_string())}
            </span>
        </div>
    }
    .into_any()
}
