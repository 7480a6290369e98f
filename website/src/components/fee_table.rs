use college_core::{format_amount, FeeSchedule, SiteConfig};
use leptos::prelude::*;

/// Per-term breakdown for every course.
#[component]
pub fn FeeTable() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let currency = config.currency.label;

    let rows = FeeSchedule::builtin()
        .courses()
        .map(|course| {
            let f = course.fees;
            view! {
                <tr>
                    <td>{course.name}</td>
                    <td>{format_amount(&currency, f.tuition)}</td>
                    <td>{format_amount(&currency, f.registration)}</td>
                    <td>{format_amount(&currency, f.library)}</td>
                    <td>{format_amount(&currency, f.exam)}</td>
                    <td><strong>{format_amount(&currency, f.per_term_total())}</strong></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <table class="fee-table">
                <caption>"Fees per term"</caption>
                <thead>
                    <tr>
                        <th scope="col">"Course"</th>
                        <th scope="col">"Tuition"</th>
                        <th scope="col">"Registration"</th>
                        <th scope="col">"Library"</th>
                        <th scope="col">"Exam"</th>
                        <th scope="col">"Total"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
