//! Read-only student profile card.

use leptos::prelude::*;

use crate::net::types::StudentProfile;

#[component]
pub fn ProfileCard(profile: StudentProfile) -> impl IntoView {
    let rows = [
        ("Name", profile.name),
        ("Roll Number", profile.roll_number),
        ("Branch", profile.branch),
        ("Email", profile.email),
        ("Semester", profile.semester.to_string()),
    ];

    view! {
        <section class="card profile-card">
            <h2 class="card__title">"Student Profile"</h2>
            <dl class="profile-card__fields">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="profile-card__row">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </section>
    }
}
