use college_core::{
    calculate_fee, format_amount, Accent, CalculatorOutput, FeeSchedule, SiteConfig, DISCLAIMER,
    MISSING_DATA_MESSAGE, PROMPT_MESSAGE,
};
use leptos::prelude::*;

fn render_output(output: CalculatorOutput, currency: &str) -> AnyView {
    match output {
        CalculatorOutput::Prompt => view! {
            <p style:color=Accent::Secondary.hex()>{PROMPT_MESSAGE}</p>
        }
        .into_any(),
        CalculatorOutput::Missing => view! {
            <p style:color=Accent::Primary.hex()>{MISSING_DATA_MESSAGE}</p>
        }
        .into_any(),
        CalculatorOutput::Estimate(est) => {
            let tuition = format_amount(currency, est.tuition_per_term);
            let total = format_amount(currency, est.grand_total);
            let duration = est.duration_summary();
            view! {
                <p><strong>"Course: "</strong>{est.course}</p>
                <p><strong>"Duration: "</strong>{duration}</p>
                <hr style="margin:0.5rem 0;" style:border-color=Accent::Secondary.hex() />
                <p><strong>"Tuition per Term: "</strong>{tuition}</p>
                <p>
                    <strong>"Total Estimate: "</strong>
                    <span style="font-size:1.5rem;" style:color=Accent::Primary.hex()>{total}</span>
                </p>
                <p style="font-size:0.9rem; margin-top:0.5rem;">{DISCLAIMER}</p>
            }
            .into_any()
        }
    }
}

/// Course and duration selectors with a live estimate underneath.
#[component]
pub fn FeeCalculator() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let currency = config.currency.label;
    let schedule = FeeSchedule::builtin();

    let (course, set_course) = signal(String::new());
    let (duration, set_duration) = signal(String::new());

    view! {
        <form id="fee-calculator-form" class="fee-calculator" on:submit=|ev| ev.prevent_default()>
            <div class="form-group">
                <label for="calc-course">"Course"</label>
                <select id="calc-course" on:change=move |ev| set_course.set(event_target_value(&ev))>
                    <option value="">"Select a course"</option>
                    {schedule
                        .course_names()
                        .map(|name| view! { <option value=name>{name}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="calc-duration">"Duration"</label>
                <select id="calc-duration" on:change=move |ev| set_duration.set(event_target_value(&ev))>
                    <option value="">"Select a duration"</option>
                    {schedule
                        .durations()
                        .map(|d| view! { <option value=d.label>{d.label}</option> })
                        .collect_view()}
                </select>
            </div>

            <div id="calc-output" class="calc-output" aria-live="polite">
                {move || {
                    let output = course.with(|c| duration.with(|d| calculate_fee(&schedule, c, d)));
                    render_output(output, &currency)
                }}
            </div>
        </form>
    }
}
