//! Admin form for marking one student present or absent.

#[cfg(test)]
#[path = "attendance_marker_test.rs"]
mod attendance_marker_test;

use leptos::prelude::*;

use crate::net::types::{AttendanceStatus, MarkAttendance, StudentProfile};

fn validate_attendance_form(
    student_id: &str,
    date: &str,
    subject: &str,
    status: AttendanceStatus,
) -> Result<MarkAttendance, &'static str> {
    let (student_id, date, subject) = (student_id.trim(), date.trim(), subject.trim());
    if student_id.is_empty() || date.is_empty() || subject.is_empty() {
        return Err("Please fill all fields");
    }
    Ok(MarkAttendance { student_id: student_id.to_owned(), date: date.to_owned(), subject: subject.to_owned(), status })
}

#[component]
pub fn AttendanceMarker(
    #[prop(into)] students: Signal<Vec<StudentProfile>>,
    #[prop(into)] busy: Signal<bool>,
    on_mark: Callback<MarkAttendance>,
) -> impl IntoView {
    let student_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let mark = move |status: AttendanceStatus| {
        if busy.get_untracked() {
            return;
        }
        match validate_attendance_form(&student_id.get_untracked(), &date.get_untracked(), &subject.get_untracked(), status)
        {
            Ok(entry) => {
                error.set(None);
                on_mark.run(entry);
                student_id.set(String::new());
                date.set(String::new());
                subject.set(String::new());
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <section class="card attendance-marker">
            <h2 class="card__title">"Mark Attendance"</h2>
            <div class="form">
                <label class="form__label">
                    "Student"
                    <select
                        class="form__input"
                        prop:value=move || student_id.get()
                        on:change=move |ev| student_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a student"</option>
                        {move || {
                            students
                                .get()
                                .into_iter()
                                .map(|s| {
                                    view! { <option value=s.id>{format!("{} - {}", s.roll_number, s.name)}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <div class="form__row">
                    <label class="form__label">
                        "Date"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Subject"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter subject name"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| mark(AttendanceStatus::Present)
                    >
                        "Mark Present"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| mark(AttendanceStatus::Absent)
                    >
                        "Mark Absent"
                    </button>
                </div>
            </div>
        </section>
    }
}
