//! Announcement feed shared by both dashboards.

use leptos::prelude::*;

use crate::net::types::Announcement;

#[component]
pub fn AnnouncementsList(#[prop(into)] announcements: Signal<Vec<Announcement>>) -> impl IntoView {
    view! {
        <section class="card announcements-list">
            <h2 class="card__title">"Announcements"</h2>
            <Show
                when=move || announcements.with(|a| !a.is_empty())
                fallback=|| view! { <p class="card__empty">"No announcements yet."</p> }
            >
                <ul class="announcements-list__items">
                    {move || {
                        announcements
                            .get()
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <li class="announcements-list__item">
                                        <h3>{a.title}</h3>
                                        <p>{a.content}</p>
                                        <p class="announcements-list__meta">
                                            <span>{a.author}</span>
                                            <span>{a.created_at}</span>
                                        </p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}
