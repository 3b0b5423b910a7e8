//! Student attendance table with a percentage summary.

use leptos::prelude::*;

use crate::net::types::{AttendanceRecord, AttendanceStatus};
use crate::state::records::AttendanceSummary;

#[component]
pub fn AttendanceTable(#[prop(into)] records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    let summary = move || records.with(|r| AttendanceSummary::from_records(r));

    view! {
        <section class="card attendance-table">
            <header class="card__header">
                <h2 class="card__title">"Attendance Record"</h2>
                <span class="attendance-table__percentage">{move || format!("{}%", summary().percentage())}</span>
            </header>
            <p class="attendance-table__summary">
                {move || {
                    let s = summary();
                    format!("{} present / {} absent of {} classes", s.present, s.absent, s.total)
                }}
            </p>
            <Show
                when=move || records.with(|r| !r.is_empty())
                fallback=|| view! { <p class="card__empty">"No attendance records yet."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Subject"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            records
                                .get()
                                .into_iter()
                                .map(|record| {
                                    let badge = match record.status {
                                        AttendanceStatus::Present => "badge badge--success",
                                        AttendanceStatus::Absent => "badge badge--danger",
                                    };
                                    view! {
                                        <tr>
                                            <td>{record.date}</td>
                                            <td>{record.subject}</td>
                                            <td>
                                                <span class=badge>{record.status.label()}</span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
