//! Admin table of every enrolled student.

use leptos::prelude::*;

use crate::net::types::StudentProfile;

#[component]
pub fn StudentsList(#[prop(into)] students: Signal<Vec<StudentProfile>>) -> impl IntoView {
    view! {
        <section class="card students-list">
            <h2 class="card__title">{move || format!("All Students ({})", students.with(Vec::len))}</h2>
            <Show
                when=move || students.with(|s| !s.is_empty())
                fallback=|| view! { <p class="card__empty">"No students found."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Roll Number"</th>
                            <th>"Name"</th>
                            <th>"Branch"</th>
                            <th>"Email"</th>
                            <th>"Semester"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            students
                                .get()
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <tr>
                                            <td>{s.roll_number}</td>
                                            <td>{s.name}</td>
                                            <td>{s.branch}</td>
                                            <td>{s.email}</td>
                                            <td>{s.semester}</td>
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
