//! Admin form for publishing an announcement.

#[cfg(test)]
#[path = "announcement_form_test.rs"]
mod announcement_form_test;

use leptos::prelude::*;

use crate::net::types::NewAnnouncement;

fn validate_announcement(title: &str, content: &str) -> Result<NewAnnouncement, &'static str> {
    let (title, content) = (title.trim(), content.trim());
    if title.is_empty() || content.is_empty() {
        return Err("Enter both a title and a message.");
    }
    Ok(NewAnnouncement { title: title.to_owned(), content: content.to_owned() })
}

#[component]
pub fn AnnouncementForm(#[prop(into)] busy: Signal<bool>, on_publish: Callback<NewAnnouncement>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_announcement(&title.get_untracked(), &content.get_untracked()) {
            Ok(announcement) => {
                error.set(None);
                on_publish.run(announcement);
                title.set(String::new());
                content.set(String::new());
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <section class="card announcement-form">
            <h2 class="card__title">"Create Announcement"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Enter announcement title..."
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Content"
                    <textarea
                        class="form__input"
                        rows="4"
                        placeholder="Write your announcement here..."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Publishing..." } else { "Publish Announcement" }}
                </button>
            </form>
        </section>
    }
}
